use crate::alphabet::Alphabet;
use crate::config::Config;
use crate::error::{CfResult, CipherForgeError};
use crate::key::Key;
use crate::language::LanguageModel;
use crate::optimizer::initialization::{adjust_for_single_letters, frequency_analysis};
use crate::optimizer::{MultiRunController, SearchOptions};
use crate::scorer::Scorer;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use tracing::{debug, info};

/// Offset between the seed streams of the two seed keys.
const VARIANT_SEED_STRIDE: u64 = 1 << 32;

/// Which single-letter word the seed key assumes for the commonest isolated glyph.
#[derive(Debug, Clone, Copy, EnumIter, Display, PartialEq, Eq, Hash, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SeedVariant {
    LetterA,
    LetterI,
}

impl SeedVariant {
    pub fn target_letter(self) -> char {
        match self {
            Self::LetterA => 'a',
            Self::LetterI => 'i',
        }
    }
}

/// Final answer for one ciphertext.
#[derive(Debug, Clone)]
pub struct Decipherment {
    pub plaintext: String,
    pub key: Key,
    pub score: f64,
    pub variant: SeedVariant,
}

#[derive(Serialize)]
pub struct DeciphermentReport<'a> {
    pub plaintext: &'a str,
    pub key: BTreeMap<char, char>,
    pub score: f64,
    pub variant: SeedVariant,
}

impl Decipherment {
    pub fn report(&self, alphabet: &Alphabet) -> DeciphermentReport<'_> {
        DeciphermentReport {
            plaintext: &self.plaintext,
            key: self.key.to_map(alphabet),
            score: self.score,
            variant: self.variant,
        }
    }
}

/// Entry point: seeds keys by frequency analysis, races the 'a' and 'i'
/// variants through the multi-run controller and keeps the better one.
pub struct Decipherer {
    scorer: Arc<Scorer>,
    alphabet: Arc<Alphabet>,
    controller: MultiRunController,
}

impl Decipherer {
    pub fn new(scorer: Arc<Scorer>, alphabet: Arc<Alphabet>, options: SearchOptions) -> Self {
        let controller = MultiRunController::new(scorer.clone(), alphabet.clone(), options);
        Self {
            scorer,
            alphabet,
            controller,
        }
    }

    pub fn from_config(model: Arc<LanguageModel>, config: &Config) -> CfResult<Self> {
        let alphabet = Arc::new(config.alphabet.build()?);
        let scorer = Arc::new(Scorer::new(model, config.weights.clone()));
        Ok(Self::new(scorer, alphabet, SearchOptions::from(config)))
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Frequency-analysis key adjusted once per variant.
    pub fn seed_keys(&self, ciphertext: &str) -> Vec<(SeedVariant, Key)> {
        let initial = frequency_analysis(ciphertext, &self.alphabet);
        debug!("Frequency-analysis key: {:?}", initial);

        SeedVariant::iter()
            .map(|v| {
                let key =
                    adjust_for_single_letters(ciphertext, initial, v.target_letter(), &self.alphabet);
                (v, key)
            })
            .collect()
    }

    pub fn decipher(&self, ciphertext: &str, seed: Option<u64>) -> CfResult<Decipherment> {
        let opts = self.controller.options();
        info!(
            "Deciphering {} chars: {} runs x {} iterations per seed key",
            ciphertext.chars().count(),
            opts.num_runs,
            opts.schedule.max_iterations
        );

        // One time budget covers both seed keys.
        let deadline = self.controller.deadline();
        let mut best: Option<Decipherment> = None;

        for (i, (variant, key)) in self.seed_keys(ciphertext).into_iter().enumerate() {
            let variant_seed = seed.map(|s| s.wrapping_add(i as u64 * VARIANT_SEED_STRIDE));
            let result = self
                .controller
                .run_until(ciphertext, key, variant_seed, deadline)?;

            info!(
                "Variant {} | best score {:.3} over {} runs",
                variant, result.score, result.runs_completed
            );

            if best.as_ref().map_or(true, |b| result.score > b.score) {
                best = Some(Decipherment {
                    plaintext: result.plaintext,
                    key: result.key,
                    score: result.score,
                    variant,
                });
            }
        }

        best.ok_or_else(|| CipherForgeError::Validation("No seed keys to search from".into()))
    }
}
