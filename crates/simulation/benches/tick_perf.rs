//! Benchmark: measure per-tick cost under various grid conditions.
//!
//! Target: a tick on a 256×256 grid must complete in < 4 ms to leave headroom
//! for rendering within a 10 ms frame at 100 fps.
//!
//! Benchmarks that need moving sand use `iter_batched` to re-seed the grid
//! before every iteration so we measure *active* simulation, not a settled pile.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sandbox::step::{fall, PaintRequest};
use sandbox::{Grid, SimConfig, Simulation};

/// Empty grid — baseline cost of scanning 65K cells with nothing to do.
fn bench_fall_empty(c: &mut Criterion) {
    let params = SimConfig::default().step_params();
    let grid = Grid::new(256, 256).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    c.bench_function("fall_empty_256x256", |b| {
        b.iter(|| black_box(fall(&grid, &params, &mut rng)));
    });
}

/// Sand in the top 20% of the grid, all actively falling.
fn bench_fall_sand_falling(c: &mut Criterion) {
    let params = SimConfig::default().step_params();
    let mut rng = StdRng::seed_from_u64(2);
    c.bench_function("fall_sand_falling_256x256", |b| {
        b.iter_batched(
            || {
                let mut grid = Grid::new(256, 256).unwrap();
                for y in 0..51 {
                    for x in 0..256 {
                        grid.set(x, y, 1.0 + x as f32 / 256.0, 1.0);
                    }
                }
                grid
            },
            |grid| black_box(fall(&grid, &params, &mut rng)),
            BatchSize::SmallInput,
        );
    });
}

/// Checkerboard rubble with high velocities — many long scans and diagonal slides.
fn bench_fall_rubble(c: &mut Criterion) {
    let params = SimConfig::default().step_params();
    let mut rng = StdRng::seed_from_u64(3);
    c.bench_function("fall_rubble_256x256", |b| {
        b.iter_batched(
            || {
                let mut grid = Grid::new(256, 256).unwrap();
                for y in 0..256 {
                    for x in 0..256 {
                        if (x + y) % 2 == 0 {
                            grid.set(x, y, 1.5, 8.0);
                        }
                    }
                }
                grid
            },
            |grid| black_box(fall(&grid, &params, &mut rng)),
            BatchSize::SmallInput,
        );
    });
}

/// Full Simulation::tick() with the pointer held — what the browser calls every frame.
fn bench_simulation_tick_painting(c: &mut Criterion) {
    c.bench_function("simulation_tick_painting_256x256", |b| {
        b.iter_batched(
            || {
                let config = SimConfig::default().with_size(256, 256);
                let mut sim = Simulation::with_seed(config, 4).unwrap();
                sim.press(PaintRequest::new(128, 8));
                for _ in 0..60 {
                    sim.tick();
                }
                sim
            },
            |mut sim| {
                sim.tick();
                black_box(&sim);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_fall_empty,
    bench_fall_sand_falling,
    bench_fall_rubble,
    bench_simulation_tick_painting,
);
criterion_main!(benches);
