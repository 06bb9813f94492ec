use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

use hash_perf::bench::distinct_keys;
use hash_perf::hasher::{
    BenchKey, City128, City64, HashFamily, HashValue, Murmur2_64, Murmur3_128, Spooky128, Spooky64,
};

const SEED: u64 = 12648430;
const NUM_KEYS: u64 = 10_000;

fn hash_only<H: HashFamily>(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    keys: &[u64],
) {
    group.bench_function(H::name(), |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for key in keys {
                sum = sum.wrapping_add(key.hash_with::<H>(black_box(SEED)).fold());
            }
            sum
        })
    });
}

fn hash_plus_bucket<H: HashFamily>(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    keys: &[u64],
    num_buckets: u64,
) {
    group.bench_function(H::name(), |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for key in keys {
                let hash = key.hash_with::<H>(black_box(SEED));
                sum = sum.wrapping_add(H::bucket(hash, num_buckets));
            }
            sum
        })
    });
}

fn bench_hash_only(c: &mut Criterion) {
    let keys = distinct_keys(NUM_KEYS);
    let mut group = c.benchmark_group("hash_only");
    group.throughput(Throughput::Elements(NUM_KEYS));

    hash_only::<Murmur2_64>(&mut group, &keys);
    hash_only::<Murmur3_128>(&mut group, &keys);
    hash_only::<City64>(&mut group, &keys);
    hash_only::<City128>(&mut group, &keys);
    hash_only::<Spooky64>(&mut group, &keys);
    hash_only::<Spooky128>(&mut group, &keys);

    group.finish();
}

fn bench_hash_plus_bucket(c: &mut Criterion) {
    let keys = distinct_keys(NUM_KEYS);
    let num_buckets = NUM_KEYS / 100;
    let mut group = c.benchmark_group("hash_plus_bucket");
    group.throughput(Throughput::Elements(NUM_KEYS));

    hash_plus_bucket::<Murmur2_64>(&mut group, &keys, num_buckets);
    hash_plus_bucket::<Murmur3_128>(&mut group, &keys, num_buckets);
    hash_plus_bucket::<City64>(&mut group, &keys, num_buckets);
    hash_plus_bucket::<City128>(&mut group, &keys, num_buckets);
    hash_plus_bucket::<Spooky64>(&mut group, &keys, num_buckets);
    hash_plus_bucket::<Spooky128>(&mut group, &keys, num_buckets);

    group.finish();
}

criterion_group!(benches, bench_hash_only, bench_hash_plus_bucket);
criterion_main!(benches);
