//! Benchmarks for Sudoku puzzle generation.
//!
//! Measures the complete generation process (full-grid construction plus
//! uniqueness-checked cell removal) at an easy and a hard empty-cell
//! target.
//!
//! # Test Data
//!
//! Uses three fixed seeds to ensure reproducibility while testing multiple
//! cases:
//!
//! - **`seed_0`**: `c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1`
//! - **`seed_1`**: `a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3`
//! - **`seed_2`**: `1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef`
//!
//! Each seed produces a different puzzle, allowing measurement across
//! various cases while maintaining reproducibility.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use sudoku_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
use sudoku_solver::BacktrackSolver;

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generator_easy(c: &mut Criterion) {
    bench_difficulty(c, "generator_easy", Difficulty::Easy);
}

fn bench_generator_hard(c: &mut Criterion) {
    bench_difficulty(c, "generator_hard", Difficulty::Hard);
}

fn bench_difficulty(c: &mut Criterion, name: &str, difficulty: Difficulty) {
    let solver = BacktrackSolver::new();
    let generator = PuzzleGenerator::new(&solver);

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(BenchmarkId::new(name, format!("seed_{i}")), &seed, |b, seed| {
            b.iter_batched(
                || hint::black_box(*seed),
                |seed| generator.generate_with_seed(difficulty, seed),
                BatchSize::SmallInput,
            );
        });
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_generator_easy,
        bench_generator_hard
);
criterion_main!(benches);
