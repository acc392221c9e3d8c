//! Benchmarks for the backtracking solver.
//!
//! Measures `solve` on puzzles of increasing sparsity and the capped
//! solution counting used for uniqueness checks. Puzzles are carved from a
//! fixed solved grid so runs are reproducible.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench backtrack
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sudoku_core::{DigitGrid, Position};
use sudoku_solver::BacktrackSolver;

const SOLVED: &str =
    "185362947793148526246795183564239871931874265827516394318427659672951438459683712";

const EMPTY_COUNTS: [u8; 3] = [10, 30, 55];

/// Clears the first `empty` cells of the fixed solved grid.
fn puzzle(empty: u8) -> DigitGrid {
    let mut grid: DigitGrid = SOLVED.parse().unwrap();
    for pos in Position::ALL.into_iter().take(usize::from(empty)) {
        grid.set(pos, None);
    }
    grid
}

fn bench_solve(c: &mut Criterion) {
    let solver = BacktrackSolver::new();
    for empty in EMPTY_COUNTS {
        let grid = puzzle(empty);
        c.bench_with_input(
            BenchmarkId::new("solve", format!("empty_{empty}")),
            &grid,
            |b, grid| {
                b.iter(|| {
                    let mut copy = hint::black_box(grid.clone());
                    solver.solve(&mut copy).unwrap()
                });
            },
        );
    }
}

fn bench_count_solutions(c: &mut Criterion) {
    let solver = BacktrackSolver::new();
    for empty in EMPTY_COUNTS {
        let grid = puzzle(empty);
        c.bench_with_input(
            BenchmarkId::new("count_solutions_cap_2", format!("empty_{empty}")),
            &grid,
            |b, grid| {
                b.iter(|| solver.count_solutions(hint::black_box(grid), 2).unwrap());
            },
        );
    }
}

criterion_group!(benches, bench_solve, bench_count_solutions);
criterion_main!(benches);
