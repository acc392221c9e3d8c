//! Backtracking Sudoku solver.
//!
//! This crate provides [`BacktrackSolver`], an exhaustive depth-first
//! search over [`DigitGrid`](sudoku_core::DigitGrid)s. It serves two roles:
//!
//! - verifying solvability and auto-completing partially filled boards
//!   ([`BacktrackSolver::solve`]), and
//! - bounded solution counting for the generator's uniqueness checks
//!   ([`BacktrackSolver::count_solutions`],
//!   [`BacktrackSolver::has_unique_solution`]).

pub use self::{backtrack::BacktrackSolver, error::SolverError};

mod backtrack;
mod error;
