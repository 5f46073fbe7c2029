use crate::reports;
use clap::Args;
use cipherforge::config::Config;
use cipherforge::{CfResult, LanguageModel, Scorer};
use std::sync::Arc;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    /// Candidate plaintext (falls back to --input, then stdin)
    pub text: Option<String>,

    #[arg(short, long)]
    pub input: Option<String>,
}

pub fn run(args: &ScoreArgs, config: &Config, model: Arc<LanguageModel>) -> CfResult<()> {
    let text = super::read_input(&args.text, &args.input)?;
    let scorer = Scorer::new(model, config.weights.clone());
    let details = scorer.score_details(&text);

    reports::print_scoring_report(&text, &details);
    println!("Combined: {:.4}", details.combined);
    Ok(())
}
