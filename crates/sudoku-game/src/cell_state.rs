use derive_more::IsVariant;
use sudoku_core::Digit;

/// The state of a single cell in a game.
///
/// Given cells come from the generated problem and cannot be modified by
/// the player. Filled cells hold player input and can be replaced or
/// cleared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, IsVariant)]
pub enum CellState {
    /// A fixed digit from the problem grid.
    Given(Digit),
    /// A digit entered by the player.
    Filled(Digit),
    /// No digit.
    #[default]
    Empty,
}

impl CellState {
    /// Returns the digit in this cell, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_core::Digit;
    /// use sudoku_game::CellState;
    ///
    /// assert_eq!(CellState::Given(Digit::D3).as_digit(), Some(Digit::D3));
    /// assert_eq!(CellState::Filled(Digit::D7).as_digit(), Some(Digit::D7));
    /// assert_eq!(CellState::Empty.as_digit(), None);
    /// ```
    #[must_use]
    pub const fn as_digit(self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
            Self::Empty => None,
        }
    }
}
