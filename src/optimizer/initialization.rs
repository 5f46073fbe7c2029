use crate::alphabet::{Alphabet, ENGLISH_FREQUENCY_ORDER, GLYPH_COUNT};
use crate::key::{Glyph, Key};

/// Glyph occurrence counts, most frequent first. Ties keep first-seen order.
pub fn glyph_frequencies(ciphertext: &str, alphabet: &Alphabet) -> Vec<(Glyph, usize)> {
    let mut counts = [0usize; GLYPH_COUNT];
    let mut first_seen = Vec::with_capacity(GLYPH_COUNT);

    for glyph in ciphertext.chars().filter_map(|c| alphabet.glyph(c)) {
        if counts[glyph.index()] == 0 {
            first_seen.push(glyph);
        }
        counts[glyph.index()] += 1;
    }

    let mut ranked: Vec<(Glyph, usize)> = first_seen
        .into_iter()
        .map(|g| (g, counts[g.index()]))
        .collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Maps the i-th most frequent glyph to the i-th most frequent English letter.
/// Glyphs absent from the ciphertext stay unmapped.
pub fn frequency_analysis(ciphertext: &str, alphabet: &Alphabet) -> Key {
    let ranked = glyph_frequencies(ciphertext, alphabet);
    Key::from_ranking(ranked.iter().map(|&(g, _)| g), ENGLISH_FREQUENCY_ORDER)
}

/// Whitespace tokens of length one that are cipher glyphs, with their counts
/// in first-seen order.
pub fn single_glyph_tokens(ciphertext: &str, alphabet: &Alphabet) -> Vec<(Glyph, usize)> {
    let mut tokens: Vec<(Glyph, usize)> = Vec::new();
    for token in ciphertext.split_whitespace() {
        let mut chars = token.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            continue;
        };
        let Some(glyph) = alphabet.glyph(c) else {
            continue;
        };
        match tokens.iter_mut().find(|(g, _)| *g == glyph) {
            Some((_, n)) => *n += 1,
            None => tokens.push((glyph, 1)),
        }
    }
    tokens
}

/// Biases the most frequent isolated glyph towards `target` ('a' or 'i').
///
/// Whichever glyph currently deciphers to `target` trades letters with that
/// glyph. Without isolated glyphs, or without a glyph on `target`, the key is
/// returned unchanged.
pub fn adjust_for_single_letters(
    ciphertext: &str,
    mut key: Key,
    target: char,
    alphabet: &Alphabet,
) -> Key {
    let tokens = single_glyph_tokens(ciphertext, alphabet);

    // max_by_key keeps the last maximum; the earliest token must win ties.
    let mut most_frequent: Option<(Glyph, usize)> = None;
    for &(g, n) in &tokens {
        match most_frequent {
            Some((_, best)) if n <= best => {}
            _ => most_frequent = Some((g, n)),
        }
    }

    if let (Some((isolated, _)), Some(holder)) = (most_frequent, key.glyph_for(target)) {
        key.swap(holder, isolated);
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_keep_first_occurrence() {
        let alphabet = Alphabet::standard();
        let ranked = glyph_frequencies("zyx zyx yx", &alphabet);
        let symbols: Vec<(char, usize)> = ranked
            .iter()
            .map(|&(g, n)| (alphabet.symbol(g), n))
            .collect();
        assert_eq!(symbols, vec![('y', 3), ('x', 3), ('z', 2)]);
    }

    #[test]
    fn single_tokens_ignore_punctuation_and_long_tokens() {
        let alphabet = Alphabet::standard();
        let tokens = single_glyph_tokens("1 , 2, 1 33 2", &alphabet);
        let symbols: Vec<(char, usize)> = tokens
            .iter()
            .map(|&(g, n)| (alphabet.symbol(g), n))
            .collect();
        assert_eq!(symbols, vec![('1', 2), ('2', 1)]);
    }
}
