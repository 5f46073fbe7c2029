use cipherforge::config::Config;
use cipherforge::language::loader;
use cipherforge::{CfResult, LanguageModel};
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::fs;
use std::path::Path;
use std::process;
use std::sync::Arc;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/words.txt")]
    words: String,

    #[arg(global = true, short, long)]
    bigrams: Option<String>,

    /// Raw text whose adjacent word pairs extend the bigram table
    #[arg(global = true, long)]
    corpus: Option<String>,

    /// JSON settings file; flags typed on the command line win
    #[arg(global = true, long)]
    profile: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Decipher(cmd::decipher::DecipherArgs),
    Score(cmd::score::ScoreArgs),
    Encipher(cmd::encipher::EncipherArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = dispatch(&cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn dispatch(cli: &Cli, matches: &ArgMatches) -> CfResult<()> {
    match &cli.command {
        Commands::Decipher(args) => {
            let config = resolve_config(cli, &args.config, matches.subcommand_matches("decipher"))?;
            let model = load_model(cli)?;
            cmd::decipher::run(args, &config, model)
        }
        Commands::Score(args) => {
            let config = resolve_config(cli, &args.config, matches.subcommand_matches("score"))?;
            let model = load_model(cli)?;
            cmd::score::run(args, &config, model)
        }
        Commands::Encipher(args) => cmd::encipher::run(args),
    }
}

fn resolve_config(
    cli: &Cli,
    cli_config: &Config,
    sub_matches: Option<&ArgMatches>,
) -> CfResult<Config> {
    let Some(path) = &cli.profile else {
        return Ok(cli_config.clone());
    };

    info!("⚖️  Loading settings from: {}", path);
    let mut config = Config::load_from_file(path)?;
    if let Some(sub) = sub_matches {
        config.merge_from_cli(cli_config, sub);
    }
    Ok(config)
}

fn load_model(cli: &Cli) -> CfResult<Arc<LanguageModel>> {
    info!("📂 Loading word list: {}", cli.words);
    if let Some(path) = &cli.bigrams {
        info!("📂 Loading bigram table: {}", path);
    }
    let mut model = LanguageModel::load(&cli.words, cli.bigrams.as_deref().map(Path::new))?;

    if let Some(path) = &cli.corpus {
        info!("📚 Counting bigrams in corpus: {}", path);
        let text = fs::read_to_string(Path::new(path))?;
        for ((a, b), n) in loader::count_bigrams(&text) {
            model.insert_bigram(&a, &b, n);
        }
    }

    if model.bigram_count() == 0 {
        warn!("⚠️  No bigrams loaded; scores will rely on word validity alone.");
    }
    info!(
        "Language model: {} words, {} bigrams",
        model.word_count(),
        model.bigram_count()
    );
    Ok(Arc::new(model))
}
