use crate::alphabet::{Alphabet, DEFAULT_GLYPHS};
use crate::error::CfResult;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub weights: ScoringWeights,
    #[command(flatten)]
    pub alphabet: AlphabetDefs,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Annealing restarts per seed key.
    #[arg(long, default_value_t = 100)]
    pub num_runs: usize,
    #[arg(long, default_value_t = 14_000)]
    pub max_iterations: usize,
    #[arg(long, default_value_t = 1.0)]
    pub initial_temperature: f64,
    #[arg(long, default_value_t = 0.99)]
    pub cooling_rate: f64,

    // Worker pool size; rayon's global pool when unset
    #[arg(long)]
    pub threads: Option<usize>,
    /// Runs that have not started when this elapses are skipped.
    #[arg(long)]
    pub time_limit_secs: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            num_runs: 100,
            max_iterations: 14_000,
            initial_temperature: 1.0,
            cooling_rate: 0.99,
            threads: None,
            time_limit_secs: None,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    #[arg(long, default_value_t = 0.3)]
    pub word_weight: f64,
    #[arg(long, default_value_t = 0.7)]
    pub bigram_weight: f64,

    // Per common two-letter word, inside the lexical score
    #[arg(long, default_value_t = 2.0)]
    pub two_letter_bonus: f64,
    // Per common two-letter word again, added when the annealer judges a neighbour
    #[arg(long, default_value_t = 1.0)]
    pub acceptance_two_letter_bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            word_weight: 0.3,
            bigram_weight: 0.7,
            two_letter_bonus: 2.0,
            acceptance_two_letter_bonus: 1.0,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlphabetDefs {
    #[arg(long, default_value = DEFAULT_GLYPHS)]
    pub cipher_glyphs: String,
}

impl Default for AlphabetDefs {
    fn default() -> Self {
        Self {
            cipher_glyphs: DEFAULT_GLYPHS.to_string(),
        }
    }
}

impl AlphabetDefs {
    pub fn build(&self) -> CfResult<Alphabet> {
        Alphabet::new(&self.cipher_glyphs)
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Copies every flag the user typed on the command line over `self`.
    /// Flags left at their clap default keep the file's value.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(search.num_runs);
        update_if_present!(search.max_iterations);
        update_if_present!(search.initial_temperature);
        update_if_present!(search.cooling_rate);
        update_if_present!(search.threads);
        update_if_present!(search.time_limit_secs);

        update_if_present!(weights.word_weight);
        update_if_present!(weights.bigram_weight);
        update_if_present!(weights.two_letter_bonus);
        update_if_present!(weights.acceptance_two_letter_bonus);

        update_if_present!(alphabet.cipher_glyphs);
    }
}
