use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeSet;
use goat_tree::{DEFAULT_ALPHA, ScapegoatTree};

const N: usize = 10_000;

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

fn build_tree(keys: &[i64], alpha: f64) -> ScapegoatTree<i64> {
    let mut tree = ScapegoatTree::new(alpha).unwrap();
    for &key in keys {
        tree.insert(key).unwrap();
    }
    tree
}

// ─── Insert ─────────────────────────────────────────────────────────────────

fn bench_insert(c: &mut Criterion) {
    for (name, keys) in [("ordered", ordered_keys(N)), ("random", random_keys(N))] {
        let mut group = c.benchmark_group(format!("insert_{name}"));

        for alpha in [1.1, DEFAULT_ALPHA, 2.0] {
            group.bench_function(BenchmarkId::new("ScapegoatTree", alpha), |b| {
                b.iter(|| build_tree(&keys, alpha));
            });
        }

        group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
            b.iter(|| keys.iter().copied().collect::<BTreeSet<_>>());
        });

        group.finish();
    }
}

// ─── Search ─────────────────────────────────────────────────────────────────

fn bench_search_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let tree = build_tree(&keys, DEFAULT_ALPHA);
    let set: BTreeSet<i64> = keys.iter().copied().collect();

    let mut group = c.benchmark_group("search_random");

    group.bench_function(BenchmarkId::new("ScapegoatTree", N), |b| {
        b.iter(|| keys.iter().filter(|key| tree.search(*key)).count());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| keys.iter().filter(|key| set.contains(*key)).count());
    });

    group.finish();
}

// ─── Remove ─────────────────────────────────────────────────────────────────

fn bench_remove_random(c: &mut Criterion) {
    let keys = random_keys(N);

    let mut group = c.benchmark_group("remove_random");

    group.bench_function(BenchmarkId::new("ScapegoatTree", N), |b| {
        b.iter_batched(
            || build_tree(&keys, DEFAULT_ALPHA),
            |mut tree| {
                for key in &keys {
                    tree.remove(key);
                }
                tree
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter_batched(
            || keys.iter().copied().collect::<BTreeSet<_>>(),
            |mut set| {
                for key in &keys {
                    set.remove(key);
                }
                set
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_insert, bench_search_random, bench_remove_random);
criterion_main!(benches);
