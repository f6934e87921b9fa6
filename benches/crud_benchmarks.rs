use avl_tree::AvlTreeMap;
use criterion::{BatchSize, BenchmarkGroup, BenchmarkId, Criterion, criterion_group, criterion_main};
use criterion::measurement::WallTime;
use std::collections::BTreeMap;
use std::hint::black_box;

const N: usize = 10_000;

// ─── Key sequences ──────────────────────────────────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn reverse_ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Fixed-seed LCG so every run measures the same sequence.
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

// ─── The operations under test, for both maps ───────────────────────────────

trait BenchMap: Default + FromIterator<(i64, i64)> {
    const NAME: &'static str;

    fn put(&mut self, key: i64, value: i64);
    fn lookup(&self, key: &i64) -> Option<&i64>;
    fn delete(&mut self, key: &i64) -> Option<i64>;
    fn sum_in_order(&self) -> i64;
}

impl BenchMap for AvlTreeMap<i64, i64> {
    const NAME: &'static str = "AvlTreeMap";

    fn put(&mut self, key: i64, value: i64) {
        self.insert(key, value);
    }

    fn lookup(&self, key: &i64) -> Option<&i64> {
        self.get(key)
    }

    fn delete(&mut self, key: &i64) -> Option<i64> {
        self.remove(key)
    }

    fn sum_in_order(&self) -> i64 {
        self.values().fold(0i64, |sum, &v| sum.wrapping_add(v))
    }
}

impl BenchMap for BTreeMap<i64, i64> {
    const NAME: &'static str = "BTreeMap";

    fn put(&mut self, key: i64, value: i64) {
        self.insert(key, value);
    }

    fn lookup(&self, key: &i64) -> Option<&i64> {
        self.get(key)
    }

    fn delete(&mut self, key: &i64) -> Option<i64> {
        self.remove(key)
    }

    fn sum_in_order(&self) -> i64 {
        self.values().fold(0i64, |sum, &v| sum.wrapping_add(v))
    }
}

fn build<M: BenchMap>(keys: &[i64]) -> M {
    keys.iter().map(|&k| (k, k)).collect()
}

fn insert_into<M: BenchMap>(group: &mut BenchmarkGroup<'_, WallTime>, keys: &[i64]) {
    group.bench_function(BenchmarkId::new(M::NAME, keys.len()), |b| {
        b.iter(|| {
            let mut map = M::default();
            for &k in keys {
                map.put(k, k);
            }
            map
        });
    });
}

fn get_from<M: BenchMap>(group: &mut BenchmarkGroup<'_, WallTime>, built_from: &[i64], probes: &[i64]) {
    let map: M = build(built_from);
    group.bench_function(BenchmarkId::new(M::NAME, probes.len()), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for k in probes {
                if let Some(&v) = map.lookup(k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });
}

fn remove_from<M: BenchMap>(group: &mut BenchmarkGroup<'_, WallTime>, built_from: &[i64], victims: &[i64]) {
    group.bench_function(BenchmarkId::new(M::NAME, victims.len()), |b| {
        b.iter_batched(
            || build::<M>(built_from),
            |mut map| {
                for k in victims {
                    black_box(map.delete(k));
                }
                map
            },
            BatchSize::SmallInput,
        );
    });
}

// ─── Insert ─────────────────────────────────────────────────────────────────

fn bench_map_insert(c: &mut Criterion) {
    for (name, keys) in [
        ("map_insert_ordered", ordered_keys(N)),
        ("map_insert_reverse", reverse_ordered_keys(N)),
        ("map_insert_random", random_keys(N)),
    ] {
        let mut group = c.benchmark_group(name);
        insert_into::<AvlTreeMap<i64, i64>>(&mut group, &keys);
        insert_into::<BTreeMap<i64, i64>>(&mut group, &keys);
        group.finish();
    }
}

// ─── Get ────────────────────────────────────────────────────────────────────

fn bench_map_get(c: &mut Criterion) {
    let ordered = ordered_keys(N);
    let random = random_keys(N);
    for (name, built_from, probes) in [
        ("map_get_ordered", &ordered, ordered_keys(N)),
        ("map_get_reverse", &ordered, reverse_ordered_keys(N)),
        ("map_get_random", &random, random_keys(N)),
    ] {
        let mut group = c.benchmark_group(name);
        get_from::<AvlTreeMap<i64, i64>>(&mut group, built_from, &probes);
        get_from::<BTreeMap<i64, i64>>(&mut group, built_from, &probes);
        group.finish();
    }
}

// ─── Remove ─────────────────────────────────────────────────────────────────

fn bench_map_remove(c: &mut Criterion) {
    let ordered = ordered_keys(N);
    let random = random_keys(N);
    for (name, built_from, victims) in [
        ("map_remove_ordered", &ordered, ordered_keys(N)),
        ("map_remove_reverse", &ordered, reverse_ordered_keys(N)),
        ("map_remove_random", &random, random_keys(N)),
    ] {
        let mut group = c.benchmark_group(name);
        remove_from::<AvlTreeMap<i64, i64>>(&mut group, built_from, &victims);
        remove_from::<BTreeMap<i64, i64>>(&mut group, built_from, &victims);
        group.finish();
    }
}

// ─── In-order traversal ─────────────────────────────────────────────────────

fn bench_map_iter(c: &mut Criterion) {
    let keys = random_keys(N);
    let avl_map: AvlTreeMap<i64, i64> = build(&keys);
    let bt_map: BTreeMap<i64, i64> = build(&keys);

    let mut group = c.benchmark_group("map_iter");
    group.bench_function(BenchmarkId::new(<AvlTreeMap<i64, i64> as BenchMap>::NAME, avl_map.len()), |b| {
        b.iter(|| avl_map.sum_in_order());
    });
    group.bench_function(BenchmarkId::new(<BTreeMap<i64, i64> as BenchMap>::NAME, bt_map.len()), |b| {
        b.iter(|| bt_map.sum_in_order());
    });
    group.finish();
}

criterion_group!(map_insert_benches, bench_map_insert);
criterion_group!(map_get_benches, bench_map_get);
criterion_group!(map_remove_benches, bench_map_remove);
criterion_group!(map_iter_benches, bench_map_iter);

criterion_main!(map_insert_benches, map_get_benches, map_remove_benches, map_iter_benches);
