//! Performance benchmarks for the stored-block framing codec.
//!
//! Measures compression and decompression throughput across input sizes
//! that exercise the single-block fast path and the multi-block split loop.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use byteflate_frame::{compress, compress_to_vec, decompress};

/// Deterministic pseudo-random bytes (linear congruential generator).
fn test_data(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut seed: u64 = 0x123456789ABCDEF0;
    for _ in 0..size {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((seed >> 32) as u8);
    }
    data
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");

    for size in [1024, 65535, 1024 * 1024] {
        let input = test_data(size);
        let mut output = vec![0u8; size + size.div_ceil(65535).max(1) * 5];

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| {
                let outcome = compress(black_box(input), black_box(&mut output));
                black_box(outcome.produced)
            });
        });
    }

    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress");

    for size in [1024, 65535, 1024 * 1024] {
        let framed = compress_to_vec(&test_data(size)).unwrap();
        let mut output = vec![0u8; size];

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &framed, |b, framed| {
            b.iter(|| {
                let outcome = decompress(black_box(framed), black_box(&mut output));
                black_box(outcome.produced)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
