use serde::Serialize;

/// Raw counts gathered in one pass over a candidate plaintext.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WordTally {
    pub words: usize,
    pub known_words: usize,
    pub two_letter_words: usize,
    pub attested_pairs: usize,
}

#[derive(Debug, Default, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    // Top-line Scores
    pub combined: f64,
    pub acceptance: f64,

    // Components
    pub lexical: f64,
    pub bigram: f64,

    // === STATISTICAL COUNTERS ===
    pub word_count: usize,
    pub known_words: usize,
    pub two_letter_words: usize,
    pub attested_pairs: usize,
}
