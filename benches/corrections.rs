//! Benchmarks for correction queries.
//!
//! Compares the bidirectional trie search against a full scan of the lexicon
//! with the reference distance, and measures raw automaton throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fbtrie::distance::transposition_distance;
use fbtrie::prelude::*;
use rand::prelude::*;

/// Seeded pseudo-words over a 12-letter alphabet.
fn generate_lexicon(size: usize, seed: u64) -> Vec<String> {
    const ALPHABET: &[u8] = b"aeioulnrstdm";
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|_| {
            let len = rng.gen_range(4..=12);
            (0..len)
                .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
                .collect()
        })
        .collect()
}

/// Queries derived from lexicon words by a swap and a substitution.
fn generate_typos(lexicon: &[String], count: usize) -> Vec<String> {
    lexicon
        .iter()
        .step_by((lexicon.len() / count).max(1))
        .take(count)
        .map(|word| {
            let mut letters: Vec<char> = word.chars().collect();
            let mid = letters.len() / 2;
            letters.swap(mid - 1, mid);
            letters[0] = 'x';
            letters.into_iter().collect()
        })
        .collect()
}

fn bench_fb_trie_vs_linear_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("corrections");

    for size in [1_000, 10_000, 50_000] {
        let lexicon = generate_lexicon(size, 42);
        let checker: SpellChecker = lexicon.iter().collect();
        let typos = generate_typos(&lexicon, 20);
        group.throughput(Throughput::Elements(typos.len() as u64));

        for n in [1u8, 2] {
            group.bench_with_input(
                BenchmarkId::new(format!("fb_trie_n{n}"), size),
                &typos,
                |b, typos| {
                    b.iter(|| {
                        for typo in typos {
                            black_box(checker.corrections(black_box(typo), n).unwrap());
                        }
                    })
                },
            );

            if size <= 10_000 {
                group.bench_with_input(
                    BenchmarkId::new(format!("linear_scan_n{n}"), size),
                    &typos,
                    |b, typos| {
                        b.iter(|| {
                            for typo in typos {
                                let hits = lexicon
                                    .iter()
                                    .filter(|w| transposition_distance(typo, w) <= n as usize)
                                    .count();
                                black_box(hits);
                            }
                        })
                    },
                );
            }
        }
    }

    group.finish();
}

fn bench_accepts_word(c: &mut Criterion) {
    let mut group = c.benchmark_group("accepts_word");
    let candidates = ["atlas", "atlsa", "xatlxs", "salomon", "taals", "aaaatlas"];

    for n in [1u8, 2] {
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            let mut automaton = ParametricAutomaton::new("atlas", n).unwrap();
            b.iter(|| {
                for candidate in candidates {
                    black_box(automaton.accepts_word(black_box(candidate)));
                }
            })
        });
    }

    group.finish();
}

fn bench_build_lexicon(c: &mut Criterion) {
    let lexicon = generate_lexicon(10_000, 42);
    c.bench_function("build_spell_checker_10k", |b| {
        b.iter(|| black_box(lexicon.iter().collect::<SpellChecker>()))
    });
}

criterion_group!(
    benches,
    bench_fb_trie_vs_linear_scan,
    bench_accepts_word,
    bench_build_lexicon
);
criterion_main!(benches);
