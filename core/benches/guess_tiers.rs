use criterion::{Criterion, criterion_group, criterion_main};
use fadele_core::{Passage, PuzzleEngine};

const SHORT: &str = "the quick brown fox jumps over the lazy dog";
const LONG: &str = "a quart jar of oil mixed with zinc oxide makes a very bright paint, \
    and the five boxing wizards jump quickly over sixty jigsaw puzzles \
    while pack my box with five dozen liquor jugs plays on repeat";

const FREQUENCY_ORDER: &str = "etaoinshrdlucmfwypvbgkjqxz";

fn guess_alphabet(passage: &str) -> PuzzleEngine {
    let mut engine = PuzzleEngine::from_text(passage).unwrap();
    for ch in FREQUENCY_ORDER.chars() {
        if engine.guess(ch).is_err() {
            break;
        }
    }
    engine
}

fn bench_guess(c: &mut Criterion) {
    let mut group = c.benchmark_group("guess");
    group.bench_function("alphabet_short_passage", |b| {
        b.iter(|| guess_alphabet(SHORT))
    });
    group.bench_function("alphabet_long_passage", |b| b.iter(|| guess_alphabet(LONG)));
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_long_passage", |b| {
        b.iter(|| Passage::from_text(LONG).unwrap())
    });
}

criterion_group!(benches, bench_guess, bench_build);
criterion_main!(benches);
