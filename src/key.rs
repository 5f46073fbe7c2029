use crate::alphabet::{Alphabet, GLYPH_COUNT};
use crate::error::{CfResult, CipherForgeError};
use std::collections::BTreeMap;
use std::fmt;

/// Index of a cipher glyph within its [`Alphabet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Glyph(u8);

impl Glyph {
    #[inline(always)]
    pub(crate) fn new(index: u8) -> Self {
        debug_assert!((index as usize) < GLYPH_COUNT);
        Glyph(index)
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn from_index(index: usize) -> Option<Glyph> {
        (index < GLYPH_COUNT).then(|| Glyph(index as u8))
    }

    pub fn all() -> impl Iterator<Item = Glyph> {
        (0..GLYPH_COUNT as u8).map(Glyph)
    }
}

/// Substitution hypothesis: cipher glyph -> plaintext letter (`a..=z`).
///
/// Slots are only ever filled at construction. Afterwards [`Key::swap`] is the
/// sole mutator, so an injective key stays injective.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Key {
    slots: [Option<u8>; GLYPH_COUNT],
}

impl Key {
    /// Builds a key from explicit assignments. Letters must be `a..=z` and
    /// no letter may be assigned twice.
    pub fn from_assignments<I>(assignments: I) -> CfResult<Self>
    where
        I: IntoIterator<Item = (Glyph, char)>,
    {
        let mut slots = [None; GLYPH_COUNT];
        let mut used = [false; GLYPH_COUNT];

        for (glyph, letter) in assignments {
            if !letter.is_ascii_lowercase() {
                return Err(CipherForgeError::Validation(format!(
                    "Key letter {:?} is not in a..=z",
                    letter
                )));
            }
            let letter_idx = (letter as u8 - b'a') as usize;
            if used[letter_idx] {
                return Err(CipherForgeError::Validation(format!(
                    "Letter '{}' assigned to more than one glyph",
                    letter
                )));
            }
            if let Some(prev) = slots[glyph.index()] {
                used[(prev - b'a') as usize] = false;
            }
            used[letter_idx] = true;
            slots[glyph.index()] = Some(letter as u8);
        }

        Ok(Self { slots })
    }

    /// Pairs the `i`-th glyph with the `i`-th letter. Neither sequence may
    /// repeat an element.
    pub(crate) fn from_ranking<I>(glyphs: I, letters: &[u8]) -> Self
    where
        I: IntoIterator<Item = Glyph>,
    {
        let mut slots = [None; GLYPH_COUNT];
        for (glyph, &letter) in glyphs.into_iter().zip(letters) {
            debug_assert!(slots[glyph.index()].is_none(), "glyph ranked twice");
            debug_assert!(letter.is_ascii_lowercase());
            slots[glyph.index()] = Some(letter);
        }
        let key = Self { slots };
        debug_assert!(key.is_injective());
        key
    }

    /// The key that maps glyph `i` to the `i`-th letter of the alphabet.
    pub fn identity() -> Self {
        let mut slots = [None; GLYPH_COUNT];
        for (i, slot) in slots.iter_mut().enumerate() {
            *slot = Some(b'a' + i as u8);
        }
        Self { slots }
    }

    /// Parses a cipher order: the glyph used for `a`, then for `b`, and so on.
    pub fn from_cipher_order(alphabet: &Alphabet, order: &str) -> CfResult<Self> {
        let mut assignments = Vec::with_capacity(GLYPH_COUNT);
        for (i, c) in order.chars().enumerate() {
            if i >= GLYPH_COUNT {
                return Err(CipherForgeError::Validation(format!(
                    "Cipher order '{}' is longer than {} glyphs",
                    order, GLYPH_COUNT
                )));
            }
            let glyph = alphabet.glyph(c).ok_or_else(|| {
                CipherForgeError::Validation(format!("{:?} is not a cipher glyph", c))
            })?;
            if assignments.iter().any(|&(g, _)| g == glyph) {
                return Err(CipherForgeError::Validation(format!(
                    "Glyph {:?} used twice in cipher order",
                    c
                )));
            }
            assignments.push((glyph, (b'a' + i as u8) as char));
        }
        Self::from_assignments(assignments)
    }

    #[inline(always)]
    pub fn get(&self, glyph: Glyph) -> Option<char> {
        self.slots[glyph.index()].map(char::from)
    }

    /// The glyph currently deciphering to `letter`.
    pub fn glyph_for(&self, letter: char) -> Option<Glyph> {
        let target = u8::try_from(letter).ok()?;
        self.slots
            .iter()
            .position(|&s| s == Some(target))
            .map(|i| Glyph::new(i as u8))
    }

    /// Exchanges the letters assigned to two glyphs.
    #[inline(always)]
    pub fn swap(&mut self, a: Glyph, b: Glyph) {
        self.slots.swap(a.index(), b.index());
    }

    /// Glyphs that have a letter, in glyph order.
    pub fn mapped_glyphs(&self) -> impl Iterator<Item = Glyph> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_some())
            .map(|(i, _)| Glyph::new(i as u8))
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_injective(&self) -> bool {
        let mut seen = [false; 256];
        for letter in self.slots.iter().flatten() {
            if seen[*letter as usize] {
                return false;
            }
            seen[*letter as usize] = true;
        }
        true
    }

    /// Glyph symbol -> letter, for reporting and serialization.
    pub fn to_map(&self, alphabet: &Alphabet) -> BTreeMap<char, char> {
        alphabet
            .iter()
            .filter_map(|(g, sym)| self.get(g).map(|letter| (sym, letter)))
            .collect()
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: String = self
            .slots
            .iter()
            .map(|s| s.map(char::from).unwrap_or('_'))
            .collect();
        write!(f, "Key({})", rendered)
    }
}
