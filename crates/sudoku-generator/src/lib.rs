//! Random Sudoku puzzle generation.
//!
//! This crate builds playable puzzles in two phases: a randomized
//! backtracking search fills a complete grid, then cells are removed one
//! by one while a [`BacktrackSolver`](sudoku_solver::BacktrackSolver)
//! verifies the solution stays unique.
//!
//! Generation is driven entirely by a [`PuzzleSeed`], so any puzzle can
//! be reproduced from its seed alone.
//!
//! # Examples
//!
//! ```
//! use sudoku_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
//! use sudoku_solver::BacktrackSolver;
//!
//! let solver = BacktrackSolver::new();
//! let generator = PuzzleGenerator::new(&solver);
//! let seed = PuzzleSeed::from_phrase("doc example");
//! let puzzle = generator.generate_with_seed(Difficulty::Easy, seed)?;
//!
//! assert_eq!(puzzle.empty_cells(), Difficulty::Easy.empty_cells());
//! assert!(puzzle.solution.is_complete());
//! # Ok::<(), sudoku_generator::GeneratorError>(())
//! ```

pub use self::{
    difficulty::Difficulty,
    generator::{GeneratedPuzzle, GeneratorError, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};

mod difficulty;
mod generator;
mod seed;
