use crate::reports;
use clap::Args;
use cipherforge::config::Config;
use cipherforge::{CfResult, Decipherer, LanguageModel};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct DecipherArgs {
    #[command(flatten)]
    pub config: Config,

    /// Ciphertext (falls back to --input, then stdin)
    pub text: Option<String>,

    #[arg(short, long)]
    pub input: Option<String>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &DecipherArgs, config: &Config, model: Arc<LanguageModel>) -> CfResult<()> {
    let ciphertext = super::read_input(&args.text, &args.input)?;
    let ciphertext = ciphertext.trim_end_matches('\n');

    let decipherer = Decipherer::from_config(model, config)?;
    let start = Instant::now();
    let result = decipherer.decipher(ciphertext, args.seed)?;
    info!("Finished in {:.2}s", start.elapsed().as_secs_f32());

    if args.json {
        let report = result.report(decipherer.alphabet());
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\n=== FINAL RESULT ===");
    println!("Ciphertext: {}", ciphertext);
    println!("Deciphered Plaintext: {}", result.plaintext);
    println!("Score: {:.4}", result.score);
    println!("Seed Key: {}", result.variant);
    reports::print_key_table(&result.key, decipherer.alphabet());
    Ok(())
}
