//! Conversion benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glyphcast::grid::build_grid;
use glyphcast::palette::{nearest, Rgb};
use glyphcast::ramp::GlyphRamp;
use glyphcast::retro::preprocess;
use image::{DynamicImage, RgbImage};

fn create_test_image(width: u32, height: u32) -> DynamicImage {
    let mut img = RgbImage::new(width, height);
    for x in 0..width {
        for y in 0..height {
            let r = ((x as f32 / width as f32) * 255.0) as u8;
            let g = ((y as f32 / height as f32) * 255.0) as u8;
            let b = (((x + y) as f32 / (width + height) as f32) * 255.0) as u8;
            img.put_pixel(x, y, image::Rgb([r, g, b]));
        }
    }
    DynamicImage::ImageRgb8(img)
}

fn benchmark_grid_build(c: &mut Criterion) {
    let image = create_test_image(800, 600);

    let mut group = c.benchmark_group("Grid Build");

    for width in [40, 80, 120, 160].iter() {
        group.bench_function(format!("width_{}", width), |b| {
            b.iter(|| build_grid(black_box(&image), black_box(*width), &GlyphRamp::Monochrome))
        });
    }

    group.finish();
}

fn benchmark_ramps(c: &mut Criterion) {
    let image = create_test_image(800, 600);

    let mut group = c.benchmark_group("Ramps");

    for ramp in [
        GlyphRamp::Monochrome,
        GlyphRamp::Block,
        GlyphRamp::Alphanumeric,
        GlyphRamp::Retro,
    ]
    .iter()
    {
        group.bench_function(ramp.name(), |b| {
            b.iter(|| build_grid(black_box(&image), black_box(80), ramp))
        });
    }

    group.finish();
}

fn benchmark_retro_preprocess(c: &mut Criterion) {
    let image = create_test_image(800, 600);

    let mut group = c.benchmark_group("Retro Preprocess");

    for resolution in [64, 128, 256].iter() {
        group.bench_function(format!("res_{}", resolution), |b| {
            b.iter(|| preprocess(black_box(&image), black_box(*resolution)))
        });
    }

    group.finish();
}

fn benchmark_palette_search(c: &mut Criterion) {
    let probes: Vec<Rgb> = (0..4096)
        .map(|i| Rgb::new((i * 7) as u8, (i * 13) as u8, (i * 29) as u8))
        .collect();

    c.bench_function("palette_nearest_4096", |b| {
        b.iter(|| {
            for probe in &probes {
                black_box(nearest(black_box(*probe)));
            }
        })
    });
}

criterion_group!(
    benches,
    benchmark_grid_build,
    benchmark_ramps,
    benchmark_retro_preprocess,
    benchmark_palette_search,
);

criterion_main!(benches);
