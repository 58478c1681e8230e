use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pmaze::{generate, solve};

const SIZE: (usize, usize) = (60, 60);

pub fn prims_generate(c: &mut Criterion) {
    c.bench_function("prims_generate", |b| {
        b.iter(|| generate(black_box(SIZE.0), black_box(SIZE.1), Some(7)).unwrap())
    });
}

pub fn dead_end_solve(c: &mut Criterion) {
    let grid = generate(SIZE.0, SIZE.1, Some(7)).unwrap();
    let start = grid.open_cells().next().unwrap();
    let end = grid.open_cells().last().unwrap();

    c.bench_function("dead_end_solve", |b| {
        b.iter(|| solve(black_box(&grid), start, end, Some(7)).unwrap())
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = prims_generate, dead_end_solve}
criterion_main!(benches);
