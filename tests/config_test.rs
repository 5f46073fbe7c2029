use cipherforge::alphabet::DEFAULT_GLYPHS;
use cipherforge::config::Config;
use cipherforge::optimizer::SearchOptions;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::io::Write;
use std::time::Duration;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: Config,
}

fn parse(args: &[&str]) -> (Config, clap::ArgMatches) {
    let matches = TestCli::command().get_matches_from(args);
    let cli = TestCli::from_arg_matches(&matches).unwrap();
    (cli.config, matches)
}

fn write_profile(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", json).unwrap();
    file
}

#[test]
fn defaults_match_the_reference_search() {
    let cfg = Config::default();
    assert_eq!(cfg.search.num_runs, 100);
    assert_eq!(cfg.search.max_iterations, 14_000);
    assert_eq!(cfg.search.initial_temperature, 1.0);
    assert_eq!(cfg.search.cooling_rate, 0.99);
    assert_eq!(cfg.weights.word_weight, 0.3);
    assert_eq!(cfg.weights.bigram_weight, 0.7);
    assert_eq!(cfg.weights.two_letter_bonus, 2.0);
    assert_eq!(cfg.weights.acceptance_two_letter_bonus, 1.0);
    assert_eq!(cfg.alphabet.cipher_glyphs, DEFAULT_GLYPHS);
}

#[test]
fn clap_defaults_agree_with_serde_defaults() {
    let (parsed, _) = parse(&["test"]);
    let defaults = Config::default();
    assert_eq!(parsed.search.num_runs, defaults.search.num_runs);
    assert_eq!(parsed.search.max_iterations, defaults.search.max_iterations);
    assert_eq!(parsed.weights.bigram_weight, defaults.weights.bigram_weight);
    assert_eq!(parsed.alphabet.cipher_glyphs, defaults.alphabet.cipher_glyphs);
}

#[test]
fn partial_profile_keeps_other_defaults() {
    let file = write_profile(r#"{ "search": { "num_runs": 4 }, "weights": { "word_weight": 0.5 } }"#);
    let cfg = Config::load_from_file(file.path()).unwrap();

    assert_eq!(cfg.search.num_runs, 4);
    assert_eq!(cfg.search.max_iterations, 14_000);
    assert_eq!(cfg.weights.word_weight, 0.5);
    assert_eq!(cfg.weights.bigram_weight, 0.7);
}

#[test]
fn malformed_profile_is_an_error() {
    let file = write_profile("{ search: ");
    assert!(Config::load_from_file(file.path()).is_err());
    assert!(Config::load_from_file("/definitely/not/here.json").is_err());
}

#[test]
fn typed_flags_override_the_profile() {
    let file = write_profile(r#"{ "search": { "num_runs": 3, "max_iterations": 50 } }"#);
    let mut cfg = Config::load_from_file(file.path()).unwrap();

    let (cli, matches) = parse(&["test", "--num-runs", "7", "--cooling-rate", "0.9"]);
    cfg.merge_from_cli(&cli, &matches);

    assert_eq!(cfg.search.num_runs, 7);
    assert_eq!(cfg.search.cooling_rate, 0.9);
    // Untyped flags keep the profile's values, not clap's defaults.
    assert_eq!(cfg.search.max_iterations, 50);
}

#[test]
fn search_options_follow_config() {
    let (cfg, _) = parse(&[
        "test",
        "--num-runs",
        "12",
        "--max-iterations",
        "900",
        "--threads",
        "2",
        "--time-limit-secs",
        "30",
    ]);
    let opts = SearchOptions::from(&cfg);

    assert_eq!(opts.num_runs, 12);
    assert_eq!(opts.schedule.max_iterations, 900);
    assert_eq!(opts.schedule.cooling_rate, 0.99);
    assert_eq!(opts.num_threads, Some(2));
    assert_eq!(opts.max_time, Some(Duration::from_secs(30)));
}

#[test]
fn invalid_glyph_set_is_rejected() {
    let (cfg, _) = parse(&["test", "--cipher-glyphs", "abc"]);
    assert!(cfg.alphabet.build().is_err());
}
