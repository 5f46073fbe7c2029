use crate::alphabet::{is_passthrough, Alphabet};
use crate::key::Key;

/// Applies `key` to `ciphertext`.
///
/// Glyphs become their mapped letter (unmapped glyphs are dropped), whitespace
/// and punctuation are copied, everything else is dropped.
pub fn apply_key(ciphertext: &str, key: &Key, alphabet: &Alphabet) -> String {
    let mut out = String::with_capacity(ciphertext.len());
    apply_key_into(ciphertext, key, alphabet, &mut out);
    out
}

/// Buffer-reusing form of [`apply_key`] for the search loop.
#[inline]
pub fn apply_key_into(ciphertext: &str, key: &Key, alphabet: &Alphabet, out: &mut String) {
    out.clear();
    for c in ciphertext.chars() {
        if let Some(glyph) = alphabet.glyph(c) {
            if let Some(letter) = key.get(glyph) {
                out.push(letter);
            }
        } else if is_passthrough(c) {
            out.push(c);
        }
    }
}

/// Inverse of [`apply_key`]: letters (case-folded) become the glyph that
/// `key` deciphers to them. Letters with no glyph are dropped.
pub fn encipher(plaintext: &str, key: &Key, alphabet: &Alphabet) -> String {
    let mut reverse = [None; 26];
    for glyph in key.mapped_glyphs() {
        if let Some(letter) = key.get(glyph) {
            reverse[(letter as u8 - b'a') as usize] = Some(alphabet.symbol(glyph));
        }
    }

    let mut out = String::with_capacity(plaintext.len());
    for c in plaintext.chars() {
        let lower = c.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            if let Some(sym) = reverse[(lower as u8 - b'a') as usize] {
                out.push(sym);
            }
        } else if is_passthrough(c) {
            out.push(c);
        }
    }
    out
}
