use cipherforge::decipher::{apply_key_into, encipher};
use cipherforge::language::loader::count_bigrams;
use cipherforge::optimizer::initialization::{adjust_for_single_letters, frequency_analysis};
use cipherforge::optimizer::{AnnealSchedule, Annealer};
use cipherforge::{Alphabet, Key, LanguageModel, Scorer};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::sync::Arc;

const PASSAGE: &str = "it is a truth universally acknowledged that a single man in possession of a good fortune \
must be in want of a wife. however little known the feelings or views of such a man may be on his \
first entering a neighbourhood, this truth is so well fixed in the minds of the surrounding families, \
that he is considered the rightful property of some one or other of their daughters.";

fn setup_scorer() -> Scorer {
    let words = PASSAGE
        .split_whitespace()
        .map(|w| w.trim_matches(|c| c == '.' || c == ','));
    let model = LanguageModel::new(words, count_bigrams(PASSAGE));
    Scorer::new(Arc::new(model), Default::default())
}

fn criterion_benchmark(c: &mut Criterion) {
    let scorer = setup_scorer();
    let alphabet = Alphabet::standard();
    let true_key = Key::from_cipher_order(&alphabet, "w$0nt76@xq#u2ypz3vo5r8914s").unwrap();
    let ciphertext = encipher(PASSAGE, &true_key, &alphabet);
    let seed = adjust_for_single_letters(
        &ciphertext,
        frequency_analysis(&ciphertext, &alphabet),
        'a',
        &alphabet,
    );

    c.bench_function("acceptance_score (70 words)", |b| {
        b.iter(|| scorer.acceptance_score(black_box(PASSAGE)))
    });

    let mut buffer = String::with_capacity(ciphertext.len());
    c.bench_function("apply_key + score", |b| {
        b.iter(|| {
            apply_key_into(black_box(&ciphertext), &seed, &alphabet, &mut buffer);
            scorer.acceptance_score(&buffer)
        })
    });

    let schedule = AnnealSchedule {
        max_iterations: 1_000,
        ..AnnealSchedule::default()
    };
    c.bench_function("anneal 1k iterations", |b| {
        b.iter(|| {
            Annealer::new(
                &scorer,
                &alphabet,
                &ciphertext,
                seed,
                schedule,
                fastrand::Rng::with_seed(42),
            )
            .run()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
