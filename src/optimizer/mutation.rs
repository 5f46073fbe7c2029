use crate::key::{Glyph, Key};
use fastrand::Rng;

/// Mapped glyphs the search may move: everything in `key` except `locked`.
pub fn swap_candidates(key: &Key, locked: &[Glyph]) -> Vec<Glyph> {
    key.mapped_glyphs()
        .filter(|g| !locked.contains(g))
        .collect()
}

/// Two distinct candidates drawn uniformly, or `None` if fewer than two exist.
#[inline(always)]
pub fn pick_pair(rng: &mut Rng, candidates: &[Glyph]) -> Option<(Glyph, Glyph)> {
    let n = candidates.len();
    if n < 2 {
        return None;
    }
    let i = rng.usize(0..n);
    let mut j = rng.usize(0..n - 1);
    if j >= i {
        j += 1;
    }
    Some((candidates[i], candidates[j]))
}

/// Copy of `key` with one random pair of candidates exchanged.
#[inline(always)]
pub fn neighbor(rng: &mut Rng, key: &Key, candidates: &[Glyph]) -> Option<Key> {
    let (a, b) = pick_pair(rng, candidates)?;
    let mut next = *key;
    next.swap(a, b);
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_are_always_distinct() {
        let mut rng = Rng::with_seed(7);
        let candidates: Vec<Glyph> = Glyph::all().take(3).collect();
        for _ in 0..1_000 {
            let (a, b) = pick_pair(&mut rng, &candidates).unwrap();
            assert_ne!(a, b);
        }
        assert!(pick_pair(&mut rng, &candidates[..1]).is_none());
    }
}
