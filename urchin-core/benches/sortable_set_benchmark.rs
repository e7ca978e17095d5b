//! Benchmark for the sortable set:
//! - shared-mode throughput (add/remove/query mix) across thread counts
//! - exclusive re-sort cost across populations
//!
//! Run with: cargo bench --package urchin-core --bench sortable_set_benchmark

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use std::cmp::Ordering;
use std::sync::Arc;
use std::thread;

use urchin_core::{Orderable, RwSortableSet, SortableSet};

const OPS_PER_THREAD: usize = 10_000;

#[derive(Clone, Debug)]
struct BenchNode {
    id: u64,
    rank: i64,
}

impl Orderable for BenchNode {
    fn cmp_order(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank).then(self.id.cmp(&other.id))
    }
}

fn node(id: u64) -> BenchNode {
    BenchNode {
        id,
        rank: (id % 997) as i64,
    }
}

type BenchSet = RwSortableSet<u64, BenchNode, u64>;

/// Mixed workload: each thread churns add/remove over its own key range
/// and polls the boundaries, all in shared mode.
fn run_mixed(thread_count: usize) {
    let set = Arc::new(BenchSet::new());

    // Pre-populate with a disjoint base range
    for key in 0..1_000u64 {
        set.add(key, node(key), key);
    }

    let mut handles = vec![];
    for t in 0..thread_count as u64 {
        let set = Arc::clone(&set);
        handles.push(thread::spawn(move || {
            let base = 10_000 + t * 10_000;
            for i in 0..OPS_PER_THREAD as u64 {
                let key = base + (i % 256);
                if !set.add(key, node(key), key) {
                    set.remove(&key);
                }
                if i % 16 == 0 {
                    black_box(set.first_node());
                    black_box(set.size());
                }
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
}

fn bench_mixed_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_ops");
    for thread_count in [1, 2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::from_parameter(thread_count),
            &thread_count,
            |b, &thread_count| {
                b.iter(|| run_mixed(thread_count));
            },
        );
    }
    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    for population in [1_000u64, 10_000, 50_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(population),
            &population,
            |b, &population| {
                let set = BenchSet::new();
                for key in 0..population {
                    set.add(key, node(key), key);
                }
                b.iter(|| set.sort());
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_mixed_ops, bench_sort);
criterion_main!(benches);
