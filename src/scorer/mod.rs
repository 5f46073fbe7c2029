pub mod types;

pub use self::types::{ScoreDetails, WordTally};
use crate::config::ScoringWeights;
use crate::language::LanguageModel;
use std::sync::Arc;

/// Two-letter words that earn a bonus on top of plain validity.
pub const COMMON_TWO_LETTER_WORDS: [&str; 14] = [
    "to", "it", "is", "in", "of", "on", "by", "at", "we", "he", "me", "if", "so", "up",
];

#[inline(always)]
pub fn is_common_two_letter(word: &str) -> bool {
    word.len() == 2
        && COMMON_TWO_LETTER_WORDS
            .iter()
            .any(|w| w.eq_ignore_ascii_case(word))
}

/// Plausibility of candidate plaintext under a [`LanguageModel`].
pub struct Scorer {
    pub model: Arc<LanguageModel>,
    pub weights: ScoringWeights,
}

impl Scorer {
    pub fn new(model: Arc<LanguageModel>, weights: ScoringWeights) -> Self {
        Self { model, weights }
    }

    /// Single pass over the whitespace-separated words of `text`.
    pub fn tally(&self, text: &str) -> WordTally {
        let mut t = WordTally::default();
        let mut prev: Option<&str> = None;

        for word in text.split_whitespace() {
            t.words += 1;
            if self.model.is_word(word) {
                t.known_words += 1;
            }
            if is_common_two_letter(word) {
                t.two_letter_words += 1;
            }
            if let Some(p) = prev {
                if self.model.is_bigram(p, word) {
                    t.attested_pairs += 1;
                }
            }
            prev = Some(word);
        }
        t
    }

    /// Percentage of known words plus the two-letter bonus. 0 for wordless text.
    pub fn lexical_score(&self, text: &str) -> f64 {
        self.lexical_from(&self.tally(text))
    }

    /// Attested adjacent pairs divided by the number of words (not pairs).
    pub fn bigram_score(&self, text: &str) -> f64 {
        bigram_from(&self.tally(text))
    }

    pub fn combined_score(&self, text: &str) -> f64 {
        self.combined_from(&self.tally(text))
    }

    /// Combined score plus the second two-letter bonus the annealer uses when
    /// judging a neighbour key.
    pub fn acceptance_score(&self, text: &str) -> f64 {
        let t = self.tally(text);
        self.combined_from(&t) + self.weights.acceptance_two_letter_bonus * t.two_letter_words as f64
    }

    pub fn score_details(&self, text: &str) -> ScoreDetails {
        let t = self.tally(text);
        let lexical = self.lexical_from(&t);
        let bigram = bigram_from(&t);
        let combined = self.weights.word_weight * lexical + self.weights.bigram_weight * bigram;

        ScoreDetails {
            combined,
            acceptance: combined
                + self.weights.acceptance_two_letter_bonus * t.two_letter_words as f64,
            lexical,
            bigram,
            word_count: t.words,
            known_words: t.known_words,
            two_letter_words: t.two_letter_words,
            attested_pairs: t.attested_pairs,
        }
    }

    #[inline(always)]
    fn lexical_from(&self, t: &WordTally) -> f64 {
        if t.words == 0 {
            return 0.0;
        }
        (t.known_words as f64 / t.words as f64) * 100.0
            + t.two_letter_words as f64 * self.weights.two_letter_bonus
    }

    #[inline(always)]
    fn combined_from(&self, t: &WordTally) -> f64 {
        self.weights.word_weight * self.lexical_from(t) + self.weights.bigram_weight * bigram_from(t)
    }
}

#[inline(always)]
fn bigram_from(t: &WordTally) -> f64 {
    if t.words == 0 {
        return 0.0;
    }
    t.attested_pairs as f64 / t.words as f64
}
