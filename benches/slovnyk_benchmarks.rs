//! Slovnyk Benchmarks
//!
//! Criterion benchmarks for the prefix dictionary core.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, SamplingMode,
    Throughput,
};
use slovnyk_lib::data_structures::{Collation, PrefixDictionary};
use std::time::Duration;

/// Deterministic pseudo-words over a small alphabet so prefixes are shared heavily.
fn generate_words(count: usize) -> Vec<String> {
    const ALPHABET: &[char] = &['а', 'б', 'в', 'г', 'ґ', 'к', 'о', 'с', 'т', 'ї'];
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let len = 3 + (state % 8) as usize;
            (0..len)
                .map(|i| ALPHABET[((state >> (i * 4)) % ALPHABET.len() as u64) as usize])
                .collect()
        })
        .collect()
}

fn bench_prefix_dictionary(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_dictionary");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [1_000, 10_000, 100_000].iter() {
        let words = generate_words(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("add", size), &words, |b, words| {
            b.iter(|| {
                let mut dict = PrefixDictionary::new();
                for word in words {
                    let _ = dict.add(black_box(word));
                }
                dict
            });
        });

        let dict: PrefixDictionary = words.iter().collect();

        group.bench_with_input(BenchmarkId::new("contains", size), &words, |b, words| {
            b.iter(|| words.iter().filter(|w| dict.contains(black_box(w))).count());
        });

        group.bench_with_input(BenchmarkId::new("delete_all", size), &words, |b, words| {
            b.iter_batched(
                || dict.clone(),
                |mut dict| {
                    for word in words {
                        dict.delete(black_box(word));
                    }
                    dict
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("query_prefix", size), &dict, |b, dict| {
            b.iter(|| dict.query(black_box("аб*")));
        });
    }

    group.finish();
}

fn bench_sorted_listing(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_words_sorted");
    let words = generate_words(50_000);

    for collation in [Collation::Ukrainian, Collation::Codepoint] {
        let mut dict = PrefixDictionary::with_collation(collation);
        dict.extend(&words);
        group.bench_function(format!("{collation:?}"), |b| {
            b.iter(|| dict.all_words_sorted());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_prefix_dictionary, bench_sorted_listing);
criterion_main!(benches);
