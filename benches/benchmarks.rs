use std::iter;

use criterion::Criterion;
use seenset::{check_items, BloomFilter};

// 10 bits per item and 7 hash slots give roughly a 1% false positive rate.
const BITS_PER_ITEM: usize = 10;
const HASH_COUNT: usize = 7;

fn key() -> String {
    let rng = fastrand::Rng::new();
    iter::repeat_with(|| rng.alphanumeric()).take(32).collect()
}

fn populate(bf: &mut BloomFilter<String>, n: usize) {
    for _ in 0..n {
        let item = key();
        bf.add(&item);
    }
}

fn bench_bloom_filter_add(c: &mut Criterion) {
    c.bench_function("add-1000", |b| {
        let mut bf = BloomFilter::new(1000 * BITS_PER_ITEM, HASH_COUNT).unwrap();

        b.iter(|| {
            let item = key();
            bf.add(&item);
        });
    });

    c.bench_function("add-10000", |b| {
        let mut bf = BloomFilter::new(10000 * BITS_PER_ITEM, HASH_COUNT).unwrap();

        b.iter(|| {
            let item = key();
            bf.add(&item);
        });
    });
}

fn bench_bloom_filter_contains(c: &mut Criterion) {
    c.bench_function("contains-1000", |b| {
        let n = 1000;
        let mut bf = BloomFilter::new(n * BITS_PER_ITEM, HASH_COUNT).unwrap();
        populate(&mut bf, n);

        b.iter(|| {
            let item = key();
            bf.contains(&item);
        });
    });

    c.bench_function("contains-10000", |b| {
        let n = 10000;
        let mut bf = BloomFilter::new(n * BITS_PER_ITEM, HASH_COUNT).unwrap();
        populate(&mut bf, n);

        b.iter(|| {
            let item = key();
            bf.contains(&item);
        });
    });
}

fn bench_check_items(c: &mut Criterion) {
    c.bench_function("check-items-100", |b| {
        b.iter(|| {
            let mut bf = BloomFilter::new(100 * BITS_PER_ITEM, HASH_COUNT).unwrap();
            let batch: Vec<String> = iter::repeat_with(key).take(100).collect();

            check_items(&mut bf, batch)
        });
    });
}

criterion::criterion_group!(
    benches,
    bench_bloom_filter_add,
    bench_bloom_filter_contains,
    bench_check_items
);
criterion::criterion_main!(benches);
