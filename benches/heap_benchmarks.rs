use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use order_statistics::{
    OrderStatisticsTree, make_minmax_heap, make_order_statistics_tree, pop_minmax_heap, push_minmax_heap,
    quantile_ranks,
};
use std::collections::BinaryHeap;
use std::hint::black_box;

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

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

// ─── Heap Benchmarks ────────────────────────────────────────────────────────

fn bench_heap_make(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("heap_make");

    group.bench_function(BenchmarkId::new("minmax_heap", N), |b| {
        b.iter(|| {
            let mut v = keys.clone();
            make_minmax_heap(&mut v);
            v
        });
    });

    group.bench_function(BenchmarkId::new("BinaryHeap", N), |b| {
        b.iter(|| BinaryHeap::from(keys.clone()));
    });

    group.finish();
}

fn bench_heap_push(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("heap_push");

    group.bench_function(BenchmarkId::new("minmax_heap", N), |b| {
        b.iter(|| {
            let mut v = Vec::with_capacity(N);
            for &key in &keys {
                v.push(key);
                push_minmax_heap(&mut v);
            }
            v
        });
    });

    group.bench_function(BenchmarkId::new("BinaryHeap", N), |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::with_capacity(N);
            for &key in &keys {
                heap.push(key);
            }
            heap
        });
    });

    group.finish();
}

fn bench_heap_pop(c: &mut Criterion) {
    let mut heap = random_keys(N);
    make_minmax_heap(&mut heap);
    let mut group = c.benchmark_group("heap_pop");

    group.bench_function(BenchmarkId::new("minmax_heap", N), |b| {
        b.iter(|| {
            let mut v = heap.clone();
            while !v.is_empty() {
                pop_minmax_heap(&mut v);
                black_box(v.pop());
            }
        });
    });

    let binary_heap = BinaryHeap::from(random_keys(N));
    group.bench_function(BenchmarkId::new("BinaryHeap", N), |b| {
        b.iter(|| {
            let mut heap = binary_heap.clone();
            while let Some(key) = heap.pop() {
                black_box(key);
            }
        });
    });

    group.finish();
}

// ─── Order Statistics Benchmarks ────────────────────────────────────────────

fn bench_quantiles(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("quantiles");

    for q in [2, 4, 100] {
        let ranks: Vec<usize> = quantile_ranks(N, q).collect();

        group.bench_function(BenchmarkId::new("order_statistics_tree", q), |b| {
            b.iter(|| {
                let mut v = keys.clone();
                make_order_statistics_tree(&mut v, &ranks);
                ranks.iter().map(|&rank| v[rank]).sum::<i64>()
            });
        });

        group.bench_function(BenchmarkId::new("sort_unstable", q), |b| {
            b.iter(|| {
                let mut v = keys.clone();
                v.sort_unstable();
                ranks.iter().map(|&rank| v[rank]).sum::<i64>()
            });
        });
    }

    group.finish();
}

fn bench_running_statistic(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("running_statistic");

    group.bench_function(BenchmarkId::new("OrderStatisticsTree", N), |b| {
        b.iter(|| {
            let mut buffer = keys.clone();
            let ranks = [N / 4];
            let mut tree = OrderStatisticsTree::with_len(&mut buffer, N / 2, &ranks);
            for _ in N / 2..N {
                tree.push();
                black_box(tree.statistic(0));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_heap_make,
    bench_heap_push,
    bench_heap_pop,
    bench_quantiles,
    bench_running_statistic,
);
criterion_main!(benches);
