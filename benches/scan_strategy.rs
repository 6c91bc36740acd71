use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qrseek::{RasterSurface, SourceImage, SurfaceProvider, Transform};

fn flat_source(width: u32, height: u32) -> SourceImage {
    SourceImage::from_rgba(width, height, vec![128u8; (width * height * 4) as usize]).unwrap()
}

fn bench_scan_exhausted_small(c: &mut Criterion) {
    let source = flat_source(100, 100);
    c.bench_function("scan_exhausted_100x100", |b| {
        b.iter(|| qrseek::scan_image(black_box(&source)))
    });
}

fn bench_scan_exhausted_medium(c: &mut Criterion) {
    let source = flat_source(640, 480);
    c.bench_function("scan_exhausted_640x480", |b| {
        b.iter(|| qrseek::scan_image(black_box(&source)))
    });
}

fn bench_render_identity(c: &mut Criterion) {
    let source = flat_source(640, 480);
    let surface = RasterSurface::new();
    c.bench_function("render_identity_640x480", |b| {
        b.iter(|| surface.render(black_box(&source), black_box(&Transform::identity())))
    });
}

fn bench_render_contrast_boost(c: &mut Criterion) {
    let source = flat_source(640, 480);
    let surface = RasterSurface::new();
    let transform = Transform::new(1.5, 30, 150);
    c.bench_function("render_combined_640x480", |b| {
        b.iter(|| surface.render(black_box(&source), black_box(&transform)))
    });
}

criterion_group!(
    benches,
    bench_scan_exhausted_small,
    bench_scan_exhausted_medium,
    bench_render_identity,
    bench_render_contrast_boost
);
criterion_main!(benches);
