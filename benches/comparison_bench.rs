use criterion::{criterion_group, criterion_main, Criterion};
use grid_search::{new_search, CellType, GridSolver, SearchKind, TerrainGrid};
use grid_util::point::Point;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const CELLS: [CellType; 3] = [CellType::Clear, CellType::Wood, CellType::Water];

fn random_terrain(n: usize, wall_ratio: f64, seed: u64) -> TerrainGrid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut terrain = TerrainGrid::new(n, n, CellType::Clear);
    for x in 0..n as i32 {
        for y in 0..n as i32 {
            let cell = if rng.gen_bool(wall_ratio) {
                CellType::Wall
            } else {
                CELLS[rng.gen_range(0..CELLS.len())]
            };
            terrain.set(x, y, cell);
        }
    }
    terrain.set(0, 0, CellType::Clear);
    terrain.set(n as i32 - 1, n as i32 - 1, CellType::Clear);
    terrain
}

fn random_bench(c: &mut Criterion) {
    for n in [16, 32] {
        for wall_ratio in [0.0, 0.2] {
            let terrain = random_terrain(n, wall_ratio, 0);
            let start = Point::new(0, 0);
            let goal = Point::new(n as i32 - 1, n as i32 - 1);
            for kind in SearchKind::ALL {
                let solver = new_search(kind);
                c.bench_function(
                    format!("{kind}, {n}x{n}, {wall_ratio} walls").as_str(),
                    |b| b.iter(|| black_box(solver.find_path(&terrain, start, goal))),
                );
            }
        }
    }
}

/// Cost of a single step on a half-explored search, the unit a frame-driven caller pays.
fn step_bench(c: &mut Criterion) {
    let n = 32;
    let terrain = random_terrain(n, 0.2, 1);
    let start = Point::new(0, 0);
    let goal = Point::new(n as i32 - 1, n as i32 - 1);
    for kind in SearchKind::ALL {
        let solver = new_search(kind);
        let mut warm = solver.begin(start, goal);
        for _ in 0..(n * n / 2) {
            solver.step(&terrain, &mut warm, goal);
        }
        c.bench_function(format!("{kind}, single step").as_str(), |b| {
            b.iter(|| {
                let mut state = warm.clone();
                black_box(solver.step(&terrain, &mut state, goal))
            })
        });
    }
}

criterion_group!(benches, random_bench, step_bench);
criterion_main!(benches);
