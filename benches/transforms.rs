use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_barscan::utils::{invert, normalize_contrast, rotate, to_grayscale};
use rust_barscan::{Orientation, PixelBuffer};

fn noise(width: usize, height: usize) -> PixelBuffer {
    let data = (0..width * height * 4)
        .map(|i| if i % 4 == 3 { 255 } else { (i * 37 % 160 + 40) as u8 })
        .collect();
    PixelBuffer::new(width, height, data).unwrap()
}

fn bench_grayscale(c: &mut Criterion) {
    for (w, h) in [(100, 100), (640, 480), (1920, 1080)] {
        let image = noise(w, h);
        c.bench_function(&format!("grayscale_{}x{}", w, h), |b| {
            b.iter(|| to_grayscale(black_box(&image)))
        });
    }
}

fn bench_contrast(c: &mut Criterion) {
    let image = to_grayscale(&noise(640, 480));
    c.bench_function("normalize_contrast_640x480", |b| {
        b.iter(|| normalize_contrast(black_box(&image)))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let image = noise(1920, 1080);
    for orientation in [Orientation::Deg90, Orientation::Deg180, Orientation::Deg270] {
        c.bench_function(&format!("rotate_{}_1920x1080", orientation.degrees()), |b| {
            b.iter(|| rotate(black_box(&image), orientation))
        });
    }
}

fn bench_invert(c: &mut Criterion) {
    let image = noise(640, 480);
    c.bench_function("invert_640x480", |b| b.iter(|| invert(black_box(&image))));
}

criterion_group!(
    benches,
    bench_grayscale,
    bench_contrast,
    bench_rotate,
    bench_invert
);
criterion_main!(benches);
