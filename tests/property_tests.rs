use cipherforge::alphabet::is_passthrough;
use cipherforge::decipher::apply_key;
use cipherforge::optimizer::mutation;
use cipherforge::{Alphabet, Glyph, Key};
use proptest::prelude::*;

/// A partial key: the first `n` glyphs of a shuffled glyph order take the
/// first `n` letters of a shuffled letter order.
fn arb_key() -> impl Strategy<Value = Key> {
    (
        Just((0..26usize).collect::<Vec<_>>()).prop_shuffle(),
        Just((b'a'..=b'z').collect::<Vec<_>>()).prop_shuffle(),
        0..=26usize,
    )
        .prop_map(|(glyphs, letters, n)| {
            Key::from_assignments(
                glyphs
                    .into_iter()
                    .zip(letters)
                    .take(n)
                    .filter_map(|(g, l)| Glyph::from_index(g).map(|g| (g, l as char))),
            )
            .unwrap()
        })
}

fn arb_ciphertext() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            4 => proptest::sample::select(Alphabet::standard().as_string().chars().collect::<Vec<_>>()),
            1 => proptest::sample::select(vec![' ', '\n', '\t', ',', '.', '!', '?', ';', ':', 'A', '"', '-', 'b']),
        ],
        0..120,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn deciphered_text_holds_only_key_letters_and_passthrough(
        key in arb_key(),
        ciphertext in arb_ciphertext(),
    ) {
        let alphabet = Alphabet::standard();
        let image: Vec<char> = key.mapped_glyphs().filter_map(|g| key.get(g)).collect();

        let out = apply_key(&ciphertext, &key, &alphabet);
        for c in out.chars() {
            prop_assert!(is_passthrough(c) || image.contains(&c), "unexpected {:?}", c);
        }
    }

    #[test]
    fn swaps_preserve_injectivity(
        key in arb_key(),
        seed in any::<u64>(),
        steps in 1..200usize,
    ) {
        let mut rng = fastrand::Rng::with_seed(seed);
        let candidates = mutation::swap_candidates(&key, &[]);
        let mut current = key;

        for _ in 0..steps {
            match mutation::neighbor(&mut rng, &current, &candidates) {
                Some(next) => current = next,
                None => break,
            }
            prop_assert!(current.is_injective());
            prop_assert_eq!(current.len(), key.len());
        }
    }
}
