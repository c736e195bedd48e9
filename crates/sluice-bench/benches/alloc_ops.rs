//! Criterion micro-benchmarks for allocate/deallocate round trips on
//! the natural and over-aligned paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sluice_alloc::{MemoryResource, SystemResource};
use sluice_bench::{natural_alignments, over_alignments, REQUEST_SIZES};

fn roundtrip(heap: &SystemResource, bytes: usize, alignment: usize) {
    let ptr = heap.allocate(black_box(bytes), black_box(alignment));
    assert!(!ptr.is_null());
    // SAFETY: same geometry as the allocate call above.
    unsafe { heap.deallocate(black_box(ptr), bytes, alignment) };
}

/// Benchmark: the standard-allocator fast path.
fn bench_natural_roundtrip(c: &mut Criterion) {
    let heap = SystemResource;
    let alignments = natural_alignments();
    c.bench_function("alloc_natural_roundtrip", |b| {
        b.iter(|| {
            for &bytes in &REQUEST_SIZES {
                for &alignment in &alignments {
                    roundtrip(&heap, bytes, alignment);
                }
            }
        });
    });
}

/// Benchmark: the platform over-aligned path.
fn bench_over_aligned_roundtrip(c: &mut Criterion) {
    let heap = SystemResource;
    let alignments = over_alignments();
    c.bench_function("alloc_over_aligned_roundtrip", |b| {
        b.iter(|| {
            for &bytes in &REQUEST_SIZES {
                for &alignment in &alignments {
                    roundtrip(&heap, bytes, alignment);
                }
            }
        });
    });
}

/// Benchmark: the silent zero-byte rejection, the cheapest possible
/// call.
fn bench_zero_byte_request(c: &mut Criterion) {
    let heap = SystemResource;
    c.bench_function("alloc_zero_byte_request", |b| {
        b.iter(|| black_box(heap.allocate(black_box(0), black_box(64))));
    });
}

criterion_group!(
    benches,
    bench_natural_roundtrip,
    bench_over_aligned_roundtrip,
    bench_zero_byte_request
);
criterion_main!(benches);
