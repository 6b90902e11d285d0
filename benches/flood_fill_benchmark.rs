// benches/flood_fill_benchmark.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use floodfill_rust::{fill_area, fill_batch, fill_border, FillRequest, PixelGrid, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIZE: usize = 512;
const SEED: u64 = 0x5eed_f111;

/// Noise over a small palette so regions have ragged, winding edges.
fn noisy_grid(rng: &mut impl Rng) -> PixelGrid<u8> {
    let pixels = (0..SIZE * SIZE)
        .map(|_| if rng.gen_bool(0.35) { 1 } else { 0 })
        .collect();
    PixelGrid::from_vec(SIZE, SIZE, pixels).unwrap()
}

/// Concentric rings of border color with single-pixel gaps.
fn maze_grid() -> PixelGrid<u8> {
    let mut grid = PixelGrid::new(SIZE, SIZE, 0u8).unwrap();
    for ring in (0..SIZE / 2).step_by(4) {
        let (lo, hi) = (ring, SIZE - 1 - ring);
        for i in lo..=hi {
            grid[(i, lo)] = 2;
            grid[(i, hi)] = 2;
            grid[(lo, i)] = 2;
            grid[(hi, i)] = 2;
        }
        let gap = if (ring / 4) % 2 == 0 { lo + 1 } else { hi - 1 };
        if gap < hi {
            grid[(gap, lo)] = 0;
        }
    }
    grid
}

fn flood_fill_benchmark_fn(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(SEED);
    let solid = PixelGrid::new(SIZE, SIZE, 0u8).unwrap();
    let noisy = noisy_grid(&mut rng);
    let maze = maze_grid();
    let center = Point::new(SIZE as i32 / 2, SIZE as i32 / 2);

    let mut group = c.benchmark_group("FloodFill");
    // group.sample_size(10); // For faster feedback during development, default is 100

    group.bench_function("area_solid_512", |b| {
        b.iter(|| {
            let mut grid = solid.clone();
            fill_area(black_box(&mut grid), black_box(Point::new(0, 0)), 7)
        })
    });

    group.bench_function("area_noise_512", |b| {
        b.iter(|| {
            let mut grid = noisy.clone();
            fill_area(black_box(&mut grid), black_box(center), 7)
        })
    });

    group.bench_function("border_maze_512", |b| {
        b.iter(|| {
            let mut grid = maze.clone();
            fill_border(black_box(&mut grid), black_box(Point::new(0, 0)), 7, 2)
        })
    });

    group.bench_function("batch_area_16x512", |b| {
        let request = FillRequest::area(center, 7);
        b.iter(|| {
            let mut grids = vec![noisy.clone(); 16];
            fill_batch(black_box(&mut grids), black_box(&request))
        })
    });
    group.finish();
}

criterion_group!(benches, flood_fill_benchmark_fn);
criterion_main!(benches);
