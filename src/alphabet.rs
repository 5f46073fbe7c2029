use crate::error::{CfResult, CipherForgeError};
use crate::key::Glyph;

/// Number of cipher glyphs (one per plaintext letter).
pub const GLYPH_COUNT: usize = 26;

/// Default cipher alphabet, ordered by glyph index.
pub const DEFAULT_GLYPHS: &str = "1234567890@#$zyxwvutsrqpon";

/// Punctuation copied through unchanged by decipherment.
pub const PUNCTUATION: &str = ",.!?;:";

/// English letters ordered by descending corpus frequency.
pub const ENGLISH_FREQUENCY_ORDER: &[u8; GLYPH_COUNT] = b"etaoinshrdlcumwfgypbvkjxqz";

const NO_GLYPH: u8 = u8::MAX;

/// Whitespace recognized by decipherment. Tabs and carriage returns are dropped.
#[inline(always)]
pub fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\n'
}

#[inline(always)]
pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(c)
}

/// Characters that survive decipherment untouched.
#[inline(always)]
pub fn is_passthrough(c: char) -> bool {
    is_whitespace(c) || is_punctuation(c)
}

/// The 26 symbols that stand in for plaintext letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [char; GLYPH_COUNT],
    ascii_index: [u8; 128],
}

impl Alphabet {
    /// Builds an alphabet from exactly 26 distinct symbols.
    pub fn new(glyphs: &str) -> CfResult<Self> {
        let chars: Vec<char> = glyphs.chars().collect();
        if chars.len() != GLYPH_COUNT {
            return Err(CipherForgeError::Validation(format!(
                "Cipher alphabet needs {} symbols, got {} in '{}'",
                GLYPH_COUNT,
                chars.len(),
                glyphs
            )));
        }

        let mut symbols = [' '; GLYPH_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            if c.is_whitespace() || is_punctuation(c) {
                return Err(CipherForgeError::Validation(format!(
                    "Cipher glyph {:?} collides with the pass-through characters",
                    c
                )));
            }
            if chars[..i].contains(&c) {
                return Err(CipherForgeError::Validation(format!(
                    "Cipher glyph {:?} appears more than once",
                    c
                )));
            }
            symbols[i] = c;
        }

        Ok(Self::from_symbols(symbols))
    }

    /// The default cipher alphabet.
    pub fn standard() -> Self {
        let mut symbols = [' '; GLYPH_COUNT];
        for (slot, c) in symbols.iter_mut().zip(DEFAULT_GLYPHS.chars()) {
            *slot = c;
        }
        Self::from_symbols(symbols)
    }

    /// `a..=z` as glyphs, so a key over it maps letters to letters.
    pub fn latin() -> Self {
        let mut symbols = [' '; GLYPH_COUNT];
        for (i, slot) in symbols.iter_mut().enumerate() {
            *slot = (b'a' + i as u8) as char;
        }
        Self::from_symbols(symbols)
    }

    fn from_symbols(symbols: [char; GLYPH_COUNT]) -> Self {
        let mut ascii_index = [NO_GLYPH; 128];
        for (i, &c) in symbols.iter().enumerate() {
            if c.is_ascii() {
                ascii_index[c as usize] = i as u8;
            }
        }
        Self {
            symbols,
            ascii_index,
        }
    }

    /// Resolves a ciphertext character to its glyph, if it is one.
    #[inline(always)]
    pub fn glyph(&self, c: char) -> Option<Glyph> {
        if c.is_ascii() {
            match self.ascii_index[c as usize] {
                NO_GLYPH => None,
                idx => Some(Glyph::new(idx)),
            }
        } else {
            self.symbols
                .iter()
                .position(|&s| s == c)
                .map(|idx| Glyph::new(idx as u8))
        }
    }

    #[inline(always)]
    pub fn symbol(&self, glyph: Glyph) -> char {
        self.symbols[glyph.index()]
    }

    pub fn contains(&self, c: char) -> bool {
        self.glyph(c).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Glyph, char)> + '_ {
        self.symbols
            .iter()
            .enumerate()
            .map(|(i, &c)| (Glyph::new(i as u8), c))
    }

    pub fn as_string(&self) -> String {
        self.symbols.iter().collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::standard()
    }
}
