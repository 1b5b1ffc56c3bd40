//! Benchmarks for the renderer crate - normalization, palettes and PPM output.
//!
//! Run with: cargo bench --package renderer --bench render_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use renderer::{create_ppm, render_grid, render_indices, BuiltinPalette, PaletteDefinition};
use scan_common::RunningExtremes;

/// Generate a raster resembling an assembled scan: a smooth surface with
/// noise and a zero band where the row shift leaves cells unfilled.
fn generate_scan_raster(width: usize, height: usize, shift: usize) -> Vec<f32> {
    let mut rng = rand::thread_rng();
    let mut data = vec![0.0f32; width * height];

    for y in shift..height {
        for x in 0..width {
            let ridge = ((x as f32 / width as f32) * std::f32::consts::PI * 3.0).sin() * 150.0;
            let slope = y as f32 / height as f32 * 300.0;
            data[y * width + x] = 400.0 + ridge + slope + rng.gen_range(-20.0..20.0);
        }
    }
    data
}

fn extremes_of(data: &[f32]) -> RunningExtremes {
    let mut extremes = RunningExtremes::new();
    for &v in data {
        extremes.observe(v);
    }
    extremes
}

// =============================================================================
// NORMALIZATION BENCHMARKS
// =============================================================================

fn bench_render_indices(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_indices");

    for (width, height) in [(207, 90), (512, 522), (1024, 1034)] {
        let data = generate_scan_raster(width, height, 10);
        let extremes = extremes_of(&data);

        group.throughput(Throughput::Elements((width * height) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &data,
            |b, data| b.iter(|| render_indices(black_box(data), width, height, &extremes)),
        );
    }

    group.finish();
}

// =============================================================================
// RENDER GRID BENCHMARKS
// =============================================================================

fn bench_render_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_grid");
    let (width, height) = (512, 522);
    let data = generate_scan_raster(width, height, 10);
    let extremes = extremes_of(&data);

    group.throughput(Throughput::Elements((width * height) as u64));
    for builtin in BuiltinPalette::ALL {
        let palette = builtin.palette();
        group.bench_function(BenchmarkId::new("builtin", builtin.name()), |b| {
            b.iter(|| render_grid(black_box(&data), width, height, &extremes, &palette))
        });
    }

    group.finish();
}

// =============================================================================
// PALETTE CONSTRUCTION BENCHMARKS
// =============================================================================

fn bench_palette_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("palette_build");

    group.bench_function("viridis", |b| {
        b.iter(|| black_box(BuiltinPalette::Viridis).palette())
    });

    let definition = PaletteDefinition::from_json(
        r##"{"name": "heat", "stops": [
            {"value": 0, "color": "#000000"},
            {"value": 0.4, "color": "#960000"},
            {"value": 0.8, "color": "#FF9600"},
            {"value": 1, "color": "#FFFFFF"}
        ]}"##,
    )
    .unwrap();
    group.bench_function("json_stops", |b| b.iter(|| black_box(&definition).to_palette()));

    group.finish();
}

// =============================================================================
// PPM ENCODING BENCHMARKS
// =============================================================================

fn bench_create_ppm(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_ppm");
    let mut rng = rand::thread_rng();

    for (width, height) in [(207, 90), (1024, 1034)] {
        let pixels: Vec<u8> = (0..width * height * 3).map(|_| rng.gen()).collect();

        group.throughput(Throughput::Bytes(pixels.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &pixels,
            |b, pixels| b.iter(|| create_ppm(black_box(pixels), width, height)),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render_indices,
    bench_render_grid,
    bench_palette_build,
    bench_create_ppm,
);
criterion_main!(benches);
