use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qr_reveal::config::{DEFAULT_ADAPTIVE_BIAS, DEFAULT_ADAPTIVE_RADIUS};
use qr_reveal::utils::binarization::{adaptive_binarize, otsu_binarize};

/// Diagonal gradient with a hard-edged block pattern on top
fn textured(width: usize, height: usize) -> Vec<u8> {
    let mut gray = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let base = ((x + y) * 96 / (width + height)) as u8 + 80;
            let block = ((x / 12) + (y / 12)) % 3 == 0;
            gray.push(if block { base / 3 } else { base });
        }
    }
    gray
}

fn bench_otsu_binarize(c: &mut Criterion) {
    for (width, height) in [(100, 100), (640, 480), (1920, 1080)] {
        let gray = textured(width, height);
        c.bench_function(&format!("otsu_binarize_{width}x{height}"), |b| {
            b.iter(|| otsu_binarize(black_box(&gray), black_box(width), black_box(height)))
        });
    }
}

fn bench_adaptive_binarize(c: &mut Criterion) {
    for (width, height) in [(640, 480), (1920, 1080)] {
        let gray = textured(width, height);
        c.bench_function(&format!("adaptive_binarize_{width}x{height}"), |b| {
            b.iter(|| {
                adaptive_binarize(
                    black_box(&gray),
                    black_box(width),
                    black_box(height),
                    black_box(DEFAULT_ADAPTIVE_RADIUS),
                    black_box(DEFAULT_ADAPTIVE_BIAS),
                )
            })
        });
    }
}

criterion_group!(benches, bench_otsu_binarize, bench_adaptive_binarize);
criterion_main!(benches);
