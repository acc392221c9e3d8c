//! Core data structures for the Sudoku workspace.
//!
//! This crate provides the grid data model shared by solving, generation,
//! and game management:
//!
//! - [`Digit`]: type-safe Sudoku digits 1-9
//! - [`Position`]: board coordinates with row/column/box index math
//! - [`DigitSet`]: a 9-bit set of digits, used for candidate tracking and
//!   house-constraint checks
//! - [`DigitGrid`]: the 9x9 grid of optional digits, with a text format,
//!   rule validation ([`DigitGrid::is_valid`]), and solution classification
//!   ([`DigitGrid::check_solution`])
//!
//! # Examples
//!
//! ```
//! use sudoku_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(4, 4), Some(Digit::D5));
//!
//! // The placement blocks 5 across the cell's row, column, and box
//! let candidates = grid.candidates_at(Position::new(4, 5));
//! assert!(!candidates.contains(Digit::D5));
//! assert!(grid.is_valid());
//! ```

pub use self::{
    digit::Digit,
    digit_set::{DigitSet, DigitSetIter},
    grid::{DigitGrid, ParseDigitGridError, SolutionCheck},
    position::Position,
};

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;
