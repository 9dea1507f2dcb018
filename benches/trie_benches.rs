use char_trie::Trie;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random lowercase words of 3..12 chars, seeded for repeatable runs
fn generate_words(n: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n)
        .map(|_| {
            let len = rng.gen_range(3..12);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for n in [1_000usize, 10_000, 100_000].iter() {
        let words = generate_words(*n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &words, |b, words| {
            b.iter(|| {
                let mut trie = Trie::new();
                for w in words {
                    trie.insert(black_box(w));
                }
                trie
            });
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let words = generate_words(10_000);
    let trie: Trie = words.iter().collect();
    let probes = generate_words(1_000);

    c.bench_function("search", |b| {
        b.iter(|| probes.iter().filter(|p| trie.search(black_box(p))).count())
    });

    c.bench_function("starts_with", |b| {
        b.iter(|| {
            probes
                .iter()
                .filter(|p| trie.starts_with(black_box(&p[..3])))
                .count()
        })
    });
}

fn bench_delete(c: &mut Criterion) {
    let words = generate_words(10_000);
    let trie: Trie = words.iter().collect();

    c.bench_function("delete_all", |b| {
        b.iter(|| {
            let mut trie = trie.clone();
            for w in &words {
                trie.delete(black_box(w));
            }
            trie
        })
    });
}

criterion_group!(benches, bench_insert, bench_lookup, bench_delete);
criterion_main!(benches);
