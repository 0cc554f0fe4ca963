// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Head-to-head comparison of the four strategies on random grids.
//!
//! Random data scores low for most masks, which is the regime where the
//! baseline filter pays off and the strategies differ most: the
//! immutable reduction bears allocation-free but plentiful combining,
//! the atomic strategy bears register contention, and fork-join bears
//! recursion overhead.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use flipgrid_model::grid::Grid;
use flipgrid_search::{solve_atomic, solve_exhaustive, solve_forkjoin, solve_immutable};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn random_grid(rows: usize, columns: usize, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    Grid::from_rows(
        (0..rows)
            .map(|_| (0..columns).map(|_| rng.gen_range(0..=1u8)).collect())
            .collect::<Vec<Vec<u8>>>(),
    )
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_4x18");
    let grid = random_grid(4, 18, 42);

    group.bench_function("exhaustive", |b| {
        b.iter(|| solve_exhaustive(black_box(&grid)).unwrap())
    });
    group.bench_function("immutable", |b| {
        b.iter(|| solve_immutable(black_box(&grid)).unwrap())
    });
    group.bench_function("atomic", |b| {
        b.iter(|| solve_atomic(black_box(&grid)).unwrap())
    });
    group.bench_function("forkjoin", |b| {
        b.iter(|| solve_forkjoin(black_box(&grid)).unwrap())
    });

    group.finish();
}

fn bench_wide_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_8x20");
    group.sample_size(10);
    let grid = random_grid(8, 20, 7);

    group.bench_function("immutable", |b| {
        b.iter(|| solve_immutable(black_box(&grid)).unwrap())
    });
    group.bench_function("atomic", |b| {
        b.iter(|| solve_atomic(black_box(&grid)).unwrap())
    });
    group.bench_function("forkjoin", |b| {
        b.iter(|| solve_forkjoin(black_box(&grid)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_strategies, bench_wide_grid);
criterion_main!(benches);
