use criterion::{criterion_group, criterion_main, Criterion};
use life_viewer::{GenerationEngine, Grid, RuleSet, World};

fn bench_step(c: &mut Criterion) {
    const N: usize = 256;
    let mut grid = Grid::random(N, N, Some(42), 0.3).unwrap();
    let mut engine = GenerationEngine::new();
    c.bench_function("step_256", |b| {
        b.iter(|| engine.step(&mut grid, &RuleSet::LIFE))
    });
}

// includes the snapshot pushed into history on every generation
fn bench_world_advance(c: &mut Criterion) {
    const N: usize = 100;
    let grid = Grid::random(N, N, Some(42), 0.3).unwrap();
    c.bench_function("world_advance_100", |b| {
        b.iter_batched(
            || World::from_grid(grid.clone(), RuleSet::LIFE, 0),
            |mut world| {
                for _ in 0..64 {
                    world.advance();
                }
                world
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_step, bench_world_advance);
criterion_main!(benches);
