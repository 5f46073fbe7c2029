use crate::error::CfResult;
use fnv::FnvHashMap;
use itertools::Itertools;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

pub type BigramCounts = Vec<((String, String), u64)>;

/// One word per line; blank lines are skipped.
pub fn load_word_list<R: Read>(reader: R) -> CfResult<Vec<String>> {
    let mut words = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    debug!("Loaded {} words", words.len());
    Ok(words)
}

pub fn load_word_list_from_path<P: AsRef<Path>>(path: P) -> CfResult<Vec<String>> {
    load_word_list(File::open(path)?)
}

/// Tab-separated `first<TAB>second[<TAB>count]` rows. A missing count means 1;
/// rows with fewer than two fields or an unparsable count are skipped.
pub fn load_bigram_table<R: Read>(reader: R) -> CfResult<BigramCounts> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut pairs = Vec::new();
    let mut skipped = 0;

    for result in rdr.records() {
        let rec = result?;
        if rec.len() < 2 {
            skipped += 1;
            continue;
        }
        let first = rec[0].trim();
        let second = rec[1].trim();
        if first.is_empty() || second.is_empty() {
            skipped += 1;
            continue;
        }
        let count = match rec.get(2).map(str::trim) {
            None | Some("") => 1,
            Some(raw) => match raw.parse::<u64>() {
                Ok(v) => v,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            },
        };
        pairs.push(((first.to_string(), second.to_string()), count));
    }

    debug!("Loaded {} bigram rows ({} skipped)", pairs.len(), skipped);
    Ok(pairs)
}

pub fn load_bigram_table_from_path<P: AsRef<Path>>(path: P) -> CfResult<BigramCounts> {
    load_bigram_table(File::open(path)?)
}

/// Counts adjacent token pairs of a raw corpus (whitespace tokens, case-folded).
pub fn count_bigrams(text: &str) -> BigramCounts {
    let mut counts: FnvHashMap<(String, String), u64> = FnvHashMap::default();
    for (a, b) in text.split_whitespace().map(str::to_lowercase).tuple_windows() {
        *counts.entry((a, b)).or_default() += 1;
    }

    let mut pairs: BigramCounts = counts.into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    pairs
}
