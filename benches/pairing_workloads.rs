//! Pairing Heap Workload Benchmarks
//!
//! Times the classic pairing-heap driver workloads under both pairing
//! strategies:
//!
//! - **sort**: insert n random keys, then delete-min until empty
//! - **delete_inactive**: insert ascending keys, delete back to front by handle
//! - **delete_active**: insert n, churn n/8 delete-min + insert, then delete
//!   every node by handle in insertion order
//! - **change_key_sort**: insert n, decrease every key, then sort
//! - **churn**: insert n, then n rounds of delete-min + insert, then sort
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench pairing_workloads
//!
//! # Only the windowed strategy at 2^16 elements
//! cargo bench --bench pairing_workloads -- 'windowed/65536'
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_pairing_heap::compare::IntegerOrder;
use rust_pairing_heap::config::{HeapConfig, PairingStrategy};
use rust_pairing_heap::pairing::PairingHeap;

const SIZES: [usize; 3] = [1 << 10, 1 << 14, 1 << 16];

fn strategies() -> [(&'static str, PairingStrategy); 2] {
    [
        ("windowed", PairingStrategy::Windowed),
        ("recursive", PairingStrategy::Recursive),
    ]
}

fn heap_with(pairing: PairingStrategy) -> PairingHeap<u64, usize> {
    PairingHeap::with_config(IntegerOrder, HeapConfig::default().with_pairing(pairing))
}

fn random_keys(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen::<u64>() >> 1).collect()
}

fn run_sort(pairing: PairingStrategy, keys: &[u64]) -> usize {
    let mut heap = heap_with(pairing);
    for (i, &key) in keys.iter().enumerate() {
        heap.insert(key, i);
    }
    heap.drain_sorted().count()
}

fn run_delete_inactive(pairing: PairingStrategy, n: usize) -> usize {
    let mut heap = heap_with(pairing);
    let handles: Vec<_> = (0..n).map(|i| heap.insert(i as u64, i)).collect();
    handles
        .iter()
        .rev()
        .filter(|h| heap.delete(**h).is_ok())
        .count()
}

fn run_delete_active(pairing: PairingStrategy, keys: &[u64]) -> usize {
    let mut rng = StdRng::seed_from_u64(17);
    let mut heap = heap_with(pairing);
    let mut handles: Vec<_> = keys
        .iter()
        .enumerate()
        .map(|(i, &key)| heap.insert(key, i))
        .collect();
    for _ in 0..keys.len() / 8 {
        if let Some((_, slot)) = heap.delete_min() {
            handles[slot] = heap.insert(rng.gen::<u64>() >> 1, slot);
        }
    }
    handles.iter().filter(|h| heap.delete(**h).is_ok()).count()
}

fn run_change_key_sort(pairing: PairingStrategy, keys: &[u64]) -> usize {
    let mut rng = StdRng::seed_from_u64(23);
    let mut heap = heap_with(pairing);
    let handles: Vec<_> = keys
        .iter()
        .enumerate()
        .map(|(i, &key)| heap.insert(key, i))
        .collect();
    let changed = handles
        .iter()
        .zip(keys)
        .filter(|&(&handle, &key)| {
            let lowered = key - rng.gen_range(0..=key);
            heap.change_key(handle, lowered).is_ok()
        })
        .count();
    assert_eq!(changed, keys.len());
    heap.drain_sorted().count()
}

fn run_churn(pairing: PairingStrategy, keys: &[u64]) -> usize {
    let mut rng = StdRng::seed_from_u64(29);
    let mut heap = heap_with(pairing);
    for (i, &key) in keys.iter().enumerate() {
        heap.insert(key, i);
    }
    for i in 0..keys.len() {
        heap.delete_min();
        heap.insert(rng.gen::<u64>() >> 1, i);
    }
    heap.drain_sorted().count()
}

fn benchmark_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    group.sample_size(20);
    for &n in &SIZES {
        let keys = random_keys(n, n as u64);
        for (name, pairing) in strategies() {
            group.bench_with_input(BenchmarkId::new(name, n), &keys, |b, keys| {
                b.iter(|| black_box(run_sort(pairing, keys)))
            });
        }
    }
    group.finish();
}

fn benchmark_delete_inactive(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete_inactive");
    group.sample_size(20);
    for &n in &SIZES {
        for (name, pairing) in strategies() {
            group.bench_with_input(BenchmarkId::new(name, n), &n, |b, &n| {
                b.iter(|| black_box(run_delete_inactive(pairing, n)))
            });
        }
    }
    group.finish();
}

fn benchmark_delete_active(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete_active");
    group.sample_size(20);
    for &n in &SIZES {
        let keys = random_keys(n, n as u64 + 1);
        for (name, pairing) in strategies() {
            group.bench_with_input(BenchmarkId::new(name, n), &keys, |b, keys| {
                b.iter(|| black_box(run_delete_active(pairing, keys)))
            });
        }
    }
    group.finish();
}

fn benchmark_change_key_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("change_key_sort");
    group.sample_size(20);
    for &n in &SIZES {
        let keys = random_keys(n, n as u64 + 2);
        for (name, pairing) in strategies() {
            group.bench_with_input(BenchmarkId::new(name, n), &keys, |b, keys| {
                b.iter(|| black_box(run_change_key_sort(pairing, keys)))
            });
        }
    }
    group.finish();
}

fn benchmark_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("churn");
    group.sample_size(20);
    for &n in &SIZES {
        let keys = random_keys(n, n as u64 + 3);
        for (name, pairing) in strategies() {
            group.bench_with_input(BenchmarkId::new(name, n), &keys, |b, keys| {
                b.iter(|| black_box(run_churn(pairing, keys)))
            });
        }
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_sort,
    benchmark_delete_inactive,
    benchmark_delete_active,
    benchmark_change_key_sort,
    benchmark_churn,
);

criterion_main!(benches);
