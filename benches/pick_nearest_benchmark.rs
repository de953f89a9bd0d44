use criterion::{Criterion, criterion_group, criterion_main};
use glam::Vec2;
use hexfield::HexGrid;
use hexfield::constants::GRASS_COLOR;
use image::RgbImage;

fn bench_pick_nearest(c: &mut Criterion) {
    // 128x128 = 16,384 tiles; picking is a full linear scan.
    let img = RgbImage::from_pixel(128, 128, GRASS_COLOR);
    let grid = HexGrid::from_pixels(1920.0, 1080.0, &img);

    let center = Vec2::new(960.0, 540.0);
    let corner = Vec2::new(3.0, 3.0);

    let mut group = c.benchmark_group("pick_nearest");

    group.bench_function("center_point", |b| {
        b.iter(|| {
            let picked = grid.pick_nearest(std::hint::black_box(center));
            let _ = std::hint::black_box(picked);
        })
    });

    group.bench_function("corner_point", |b| {
        b.iter(|| {
            let picked = grid.pick_nearest(std::hint::black_box(corner));
            let _ = std::hint::black_box(picked);
        })
    });

    group.finish();
}

fn bench_neighbors(c: &mut Criterion) {
    let img = RgbImage::from_pixel(128, 128, GRASS_COLOR);
    let grid = HexGrid::from_pixels(1920.0, 1080.0, &img);
    let interior = hexfield::GridIndex::new(64, 64);

    c.bench_function("neighbors_interior", |b| {
        b.iter(|| {
            let count = grid.neighbors(std::hint::black_box(interior)).count();
            std::hint::black_box(count);
        })
    });
}

criterion_group!(benches, bench_pick_nearest, bench_neighbors);
criterion_main!(benches);
