//! Sudoku game session management.
//!
//! This crate wraps a generated puzzle in a playable [`Game`]: given
//! cells are fixed, player input fills the rest, and the session can be
//! checked against the rules or auto-completed with a solver.
//!
//! # Examples
//!
//! ```
//! use sudoku_core::SolutionCheck;
//! use sudoku_game::Game;
//! use sudoku_generator::{Difficulty, PuzzleGenerator};
//! use sudoku_solver::BacktrackSolver;
//!
//! let solver = BacktrackSolver::new();
//! let generator = PuzzleGenerator::new(&solver);
//! let puzzle = generator.generate(Difficulty::Easy)?;
//! let mut game = Game::new(puzzle);
//!
//! assert_eq!(game.check_solution(), SolutionCheck::Incomplete);
//! assert!(game.auto_complete(&solver)?);
//! assert!(game.is_solved());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    cell_state::CellState,
    error::GameError,
    game::{DigitCounts, Game},
};

mod cell_state;
mod error;
mod game;
