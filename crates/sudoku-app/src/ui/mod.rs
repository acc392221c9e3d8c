//! UI components emitting actions instead of mutating state directly.
//!
//! Each `show` function draws one part of the screen and returns the
//! [`Action`]s the user triggered. The application applies them afterwards,
//! keeping game state changes out of the draw pass.

use sudoku_core::{Digit, Position};
use sudoku_generator::Difficulty;

pub mod game_screen;
pub mod grid;
pub mod input;
pub mod keypad;
pub mod sidebar;

/// A state change requested through the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectCell(Position),
    ClearSelection,
    MoveSelection(MoveDirection),
    SetDigit(Digit),
    RemoveDigit,
    SelectDifficulty(Difficulty),
    NewGame,
    CheckSolution,
    AutoComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}
