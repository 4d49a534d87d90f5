use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use bset_core::BloomFilter;

fn bench_bloom(c: &mut Criterion) {
    let mut rng = rand::rng();
    let keys: Vec<String> = (0..10_000).map(|i| format!("key-{i}")).collect();
    let misses: Vec<String> = (0..10_000)
        .map(|_| format!("miss-{:016x}", rng.random::<u64>()))
        .collect();

    let mut filter = BloomFilter::new(10_000, 0.01).unwrap();
    for key in &keys {
        filter.add(key.as_bytes());
    }

    c.bench_function("add_10k", |b| {
        b.iter(|| {
            let mut f = BloomFilter::new(10_000, 0.01).unwrap();
            for key in &keys {
                f.add(black_box(key.as_bytes()));
            }
            f
        })
    });
    c.bench_function("contains_hit", |b| {
        b.iter(|| {
            keys.iter()
                .filter(|k| filter.contains(black_box(k.as_bytes())))
                .count()
        })
    });
    c.bench_function("contains_miss", |b| {
        b.iter(|| {
            misses
                .iter()
                .filter(|k| filter.contains(black_box(k.as_bytes())))
                .count()
        })
    });
    c.bench_function("count_ones", |b| b.iter(|| black_box(filter.bits_set())));
}

criterion_group!(benches, bench_bloom);
criterion_main!(benches);
