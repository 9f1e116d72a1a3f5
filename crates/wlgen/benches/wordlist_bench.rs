// Criterion benchmarks for wlgen.
//
// Compares the generation strategies on small, medium and large charsets.
// Eager generation is only measured where the full wordlist fits
// comfortably in memory; lazy strategies on large charsets are sampled to
// a fixed number of words.
//
// Run:
//   cargo bench -p wlgen
//   cargo bench -p wlgen --features batched

use std::hint::black_box;
use std::ops::ControlFlow;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use wlgen::{Charset, gen_wordlist, gen_wordlist_iter, gen_words, visit_words};

/// Words taken from lazy strategies on charsets too large to exhaust.
const SAMPLE_WORDS: usize = 100_000;

// ---------------------------------------------------------------------------
// Charsets
// ---------------------------------------------------------------------------

fn charset(positions: usize, alphabet: &str) -> Charset {
    Charset::from_slots(std::iter::repeat_n(alphabet, positions))
}

/// 3 positions of 8 characters: 512 words.
fn small() -> Charset {
    charset(3, "abcdefgh")
}

/// 5 positions of 10 digits: 100 000 words.
fn medium() -> Charset {
    charset(5, "0123456789")
}

/// 8 positions of 16 hex digits: 2^32 words, sampled.
fn large() -> Charset {
    charset(8, "0123456789abcdef")
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Generate complete wordlists with every strategy.
fn bench_full(c: &mut Criterion) {
    let mut group = c.benchmark_group("full");
    for (name, charset) in [("small", small()), ("medium", medium())] {
        let size = gen_wordlist_iter(&charset, true).map_or(0, |w| w.count());
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("list", name), &charset, |b, cs| {
            b.iter(|| black_box(gen_wordlist(cs)))
        });
        group.bench_with_input(BenchmarkId::new("iter", name), &charset, |b, cs| {
            b.iter(|| {
                for word in gen_wordlist_iter(cs, false).into_iter().flatten() {
                    black_box(word);
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("iter_clean", name), &charset, |b, cs| {
            b.iter(|| {
                for word in gen_wordlist_iter(cs, true).into_iter().flatten() {
                    black_box(word);
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("words", name), &charset, |b, cs| {
            b.iter(|| {
                for word in gen_words(cs).into_iter().flatten() {
                    black_box(word);
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("visit", name), &charset, |b, cs| {
            b.iter(|| {
                let _ = visit_words(cs, |w| {
                    black_box(w);
                    ControlFlow::Continue(())
                });
            })
        });
        #[cfg(feature = "batched")]
        group.bench_with_input(BenchmarkId::new("batch", name), &charset, |b, cs| {
            b.iter(|| {
                let words =
                    wlgen::batched::gen_wordlist_batched(cs, false, wlgen::batched::DEFAULT_BATCH_SIZE);
                for word in words.into_iter().flatten() {
                    black_box(word);
                }
            })
        });
    }
    group.finish();
}

/// Sample the first words of a charset too large to generate completely.
fn bench_sampled(c: &mut Criterion) {
    let charset = large();
    let mut group = c.benchmark_group("sampled");
    group.throughput(Throughput::Elements(SAMPLE_WORDS as u64));

    group.bench_function("iter", |b| {
        b.iter(|| {
            for word in gen_wordlist_iter(&charset, false)
                .into_iter()
                .flatten()
                .take(SAMPLE_WORDS)
            {
                black_box(word);
            }
        })
    });
    group.bench_function("words", |b| {
        b.iter(|| {
            for word in gen_words(&charset).into_iter().flatten().take(SAMPLE_WORDS) {
                black_box(word);
            }
        })
    });
    group.finish();
}

/// Latency until the first word is available.
fn bench_first_word(c: &mut Criterion) {
    let charset = medium();
    let mut group = c.benchmark_group("first_word");
    group.bench_function("list", |b| {
        b.iter(|| black_box(gen_wordlist(&charset).ok().and_then(|w| w.into_iter().next())))
    });
    group.bench_function("iter", |b| {
        b.iter(|| black_box(gen_wordlist_iter(&charset, false).ok().and_then(|mut w| w.next())))
    });
    group.bench_function("words", |b| {
        b.iter(|| black_box(gen_words(&charset).ok().and_then(|mut w| w.next())))
    });
    group.finish();
}

criterion_group!(benches, bench_full, bench_sampled, bench_first_word);
criterion_main!(benches);
