pub mod loader;

use crate::error::CfResult;
use fnv::{FnvHashMap, FnvHashSet};
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

/// Read-only word set and word-pair frequency table.
///
/// Built once and shared (behind an `Arc`) by every concurrent search run.
/// Entries are stored case-folded; queries are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct LanguageModel {
    words: FnvHashSet<String>,
    bigrams: FnvHashMap<String, FnvHashMap<String, u64>>,
    bigram_total: usize,
}

#[inline(always)]
fn fold(word: &str) -> Cow<'_, str> {
    if word.chars().any(char::is_uppercase) {
        Cow::Owned(word.to_lowercase())
    } else {
        Cow::Borrowed(word)
    }
}

impl LanguageModel {
    pub fn new<W, S, B, T>(words: W, bigrams: B) -> Self
    where
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
        B: IntoIterator<Item = ((T, T), u64)>,
        T: AsRef<str>,
    {
        let mut model = Self::default();
        for w in words {
            model.insert_word(w.as_ref());
        }
        for ((first, second), count) in bigrams {
            model.insert_bigram(first.as_ref(), second.as_ref(), count);
        }
        model
    }

    /// Loads a word list and, if given, a bigram table from disk.
    pub fn load<P: AsRef<Path>>(words_path: P, bigrams_path: Option<&Path>) -> CfResult<Self> {
        let words = loader::load_word_list_from_path(words_path)?;
        let bigrams = match bigrams_path {
            Some(path) => loader::load_bigram_table_from_path(path)?,
            None => Vec::new(),
        };
        let model = Self::new(words, bigrams);
        debug!(
            "Language model ready: {} words, {} bigrams",
            model.word_count(),
            model.bigram_count()
        );
        Ok(model)
    }

    pub fn insert_word(&mut self, word: &str) {
        let word = word.trim();
        if !word.is_empty() {
            self.words.insert(fold(word).into_owned());
        }
    }

    /// Adds `count` observations of the ordered pair `(first, second)`.
    pub fn insert_bigram(&mut self, first: &str, second: &str, count: u64) {
        let seconds = self.bigrams.entry(fold(first).into_owned()).or_default();
        let second = fold(second).into_owned();
        match seconds.get_mut(&second) {
            Some(slot) => *slot += count,
            None => {
                seconds.insert(second, count);
                self.bigram_total += 1;
            }
        }
    }

    #[inline]
    pub fn is_word(&self, word: &str) -> bool {
        self.words.contains(fold(word).as_ref())
    }

    #[inline]
    pub fn is_bigram(&self, first: &str, second: &str) -> bool {
        self.bigrams
            .get(fold(first).as_ref())
            .is_some_and(|m| m.contains_key(fold(second).as_ref()))
    }

    pub fn bigram_frequency(&self, first: &str, second: &str) -> u64 {
        self.bigrams
            .get(fold(first).as_ref())
            .and_then(|m| m.get(fold(second).as_ref()))
            .copied()
            .unwrap_or(0)
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of distinct ordered pairs.
    pub fn bigram_count(&self) -> usize {
        self.bigram_total
    }
}
