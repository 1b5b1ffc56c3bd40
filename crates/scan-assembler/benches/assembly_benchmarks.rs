//! Benchmarks for sample reduction and scan assembly.
//!
//! Run with: cargo bench --package scan-assembler --bench assembly_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scan_assembler::{assemble_scan, reduce_samples, MemorySource};
use scan_common::{GridPosition, ScanGeometry};
use test_utils::noisy_samples;

fn bench_reduce_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce_samples");

    for count in [256, 4096, 65536] {
        let samples = noisy_samples(500.0, 600.0, count, 7);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &samples, |b, samples| {
            b.iter(|| reduce_samples(black_box(samples)))
        });
    }

    group.finish();
}

fn bench_assemble_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble_scan");

    for (width, height, shift) in [(207, 80, 10), (512, 512, 10)] {
        let mut source = MemorySource::new();
        for x in 0..width {
            for y in 0..height {
                let seed = (x * height + y) as u32;
                source.insert(GridPosition::new(x, y), noisy_samples(300.0, 50.0, 64, seed));
            }
        }
        let geometry = ScanGeometry::new(width, height, shift).unwrap();

        group.throughput(Throughput::Elements((width * height) as u64));
        group.bench_function(BenchmarkId::from_parameter(format!("{}x{}", width, height)), |b| {
            b.iter(|| assemble_scan(geometry, &mut source))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reduce_samples, bench_assemble_scan);
criterion_main!(benches);
