use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use simsense_3d::camera::{CameraParams, PinholeCamera};
use simsense_3d::color::pack_colors;
use simsense_3d::projection::unproject_depth;
use simsense_image::{ColorImage, DepthImage};

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");

    for (width, height) in [(320u32, 240u32), (640, 480), (1280, 720)] {
        let camera = PinholeCamera::new(CameraParams {
            width,
            height,
            focal_length: width as f64 / 2.0,
        })
        .unwrap();

        let depth = DepthImage::new(
            camera.image_size(),
            (0..width * height).map(|i| (i % 100) as f32 * 0.1).collect(),
        )
        .unwrap();

        let color = ColorImage::new(
            camera.image_size(),
            (0..width * height * 3).map(|i| (i % 256) as u8).collect(),
        )
        .unwrap();

        group.bench_with_input(
            BenchmarkId::new("unproject_depth", format!("{width}x{height}")),
            &depth,
            |b, depth| b.iter(|| unproject_depth(black_box(&camera), black_box(depth)).unwrap()),
        );

        group.bench_with_input(
            BenchmarkId::new("pack_colors", format!("{width}x{height}")),
            &color,
            |b, color| b.iter(|| pack_colors(black_box(color))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_projection);
criterion_main!(benches);
