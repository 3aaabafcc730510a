use bst_dict::Dictionary;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeMap;

const N: usize = 10_000;
// Sorted input degenerates the tree into a list, so keep that case small.
const DEGENERATE_N: usize = 1_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

fn filled_dictionary(keys: &[i64]) -> Dictionary<i64, i64> {
    keys.iter().map(|&k| (k, k)).collect()
}

// ─── Benchmarks ─────────────────────────────────────────────────────────────

fn bench_set_value_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("set_value_random");

    group.bench_function(BenchmarkId::new("Dictionary", N), |b| {
        b.iter(|| {
            let mut dict = Dictionary::new();
            for &k in &keys {
                dict.set_value(k, k);
            }
            dict
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.finish();
}

fn bench_set_value_ordered(c: &mut Criterion) {
    let keys = ordered_keys(DEGENERATE_N);
    let mut group = c.benchmark_group("set_value_ordered");

    group.bench_function(BenchmarkId::new("Dictionary", DEGENERATE_N), |b| {
        b.iter(|| filled_dictionary(&keys));
    });

    group.bench_function(BenchmarkId::new("BTreeMap", DEGENERATE_N), |b| {
        b.iter(|| keys.iter().map(|&k| (k, k)).collect::<BTreeMap<_, _>>());
    });

    group.finish();
}

fn bench_get_value_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let dict = filled_dictionary(&keys);
    let map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let mut group = c.benchmark_group("get_value_random");

    group.bench_function(BenchmarkId::new("Dictionary", N), |b| {
        b.iter(|| keys.iter().filter_map(|k| dict.get_value(k).ok()).sum::<i64>());
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| keys.iter().filter_map(|k| map.get(k)).sum::<i64>());
    });

    group.finish();
}

fn bench_remove_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("remove_random");

    group.bench_function(BenchmarkId::new("Dictionary", N), |b| {
        b.iter_batched(
            || filled_dictionary(&keys),
            |mut dict| {
                for k in &keys {
                    let _ = dict.remove(k);
                }
                dict
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter_batched(
            || keys.iter().map(|&k| (k, k)).collect::<BTreeMap<_, _>>(),
            |mut map| {
                for k in &keys {
                    map.remove(k);
                }
                map
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

fn bench_cursor_walk(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("cursor_walk");

    group.bench_function(BenchmarkId::new("Dictionary::next", N), |b| {
        let mut dict = filled_dictionary(&keys);
        b.iter(|| {
            let mut total = 0i64;
            dict.begin().unwrap();
            while let Ok(v) = dict.current_val() {
                total = total.wrapping_add(*v);
                dict.next().unwrap();
            }
            total
        });
    });

    group.bench_function(BenchmarkId::new("Dictionary::iter", N), |b| {
        let dict = filled_dictionary(&keys);
        b.iter(|| dict.values().fold(0i64, |acc, v| acc.wrapping_add(*v)));
    });

    group.bench_function(BenchmarkId::new("BTreeMap::iter", N), |b| {
        let map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
        b.iter(|| map.values().fold(0i64, |acc, v| acc.wrapping_add(*v)));
    });

    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let dict = filled_dictionary(&random_keys(DEGENERATE_N));
    let mut group = c.benchmark_group("clone");

    group.bench_function(BenchmarkId::new("Dictionary", DEGENERATE_N), |b| {
        b.iter(|| dict.clone());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_set_value_random,
    bench_set_value_ordered,
    bench_get_value_random,
    bench_remove_random,
    bench_cursor_walk,
    bench_clone,
);
criterion_main!(benches);
