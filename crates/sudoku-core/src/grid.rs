//! The 9x9 digit grid, its text format, and rule validation.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use derive_more::{Display, Error};

use crate::{Digit, DigitSet, Position};

/// A 9x9 grid of optional digits.
///
/// Cells hold `Option<Digit>`: `None` is an empty cell. The grid is a plain
/// value type; solving and generation work on owned copies, so the canonical
/// puzzle state of a game session is never mutated behind its back.
///
/// # Text format
///
/// [`FromStr`] reads 81 significant characters in row-major order: `1`-`9`
/// for digits, `.`, `_`, or `0` for empty cells. Whitespace is ignored, so
/// grids can be laid out one row per line in tests. [`Display`] writes the
/// grid back as a single 81-character line with `.` for empty cells.
///
/// # Examples
///
/// ```
/// use sudoku_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// grid.set(Position::new(0, 0), Some(Digit::D5));
///
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid.empty_count(), 80);
/// assert!(grid.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at the given position, or `None` if empty.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[usize::from(pos.index())]
    }

    /// Sets or clears the cell at the given position.
    pub fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[usize::from(pos.index())] = digit;
    }

    /// Returns the first empty position in row-major order, if any.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| self.get(pos).is_none())
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the digits that can legally be placed at a position: all
    /// digits not already present among the cell's house peers.
    ///
    /// The cell's own content is ignored; callers decide whether the cell is
    /// free. This is the single-placement safety test used by the solver and
    /// the generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_core::{Digit, DigitGrid, Position};
    ///
    /// let mut grid = DigitGrid::new();
    /// grid.set(Position::new(0, 0), Some(Digit::D5));
    ///
    /// // 5 is blocked along the first row, column, and box
    /// assert!(!grid.candidates_at(Position::new(8, 0)).contains(Digit::D5));
    /// assert!(!grid.candidates_at(Position::new(0, 8)).contains(Digit::D5));
    /// assert!(!grid.candidates_at(Position::new(2, 2)).contains(Digit::D5));
    /// assert!(grid.candidates_at(Position::new(8, 8)).contains(Digit::D5));
    /// ```
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        let mut candidates = DigitSet::FULL;
        for peer in pos.house_peers() {
            if let Some(digit) = self.get(peer) {
                candidates.remove(digit);
            }
        }
        candidates
    }

    /// Checks the Sudoku uniqueness constraint over all rows, columns, and
    /// 3x3 boxes.
    ///
    /// Returns `false` if any house contains the same digit twice. Empty
    /// cells never count as duplicates, so a partially filled (or fully
    /// empty) grid can be valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        for i in 0..9 {
            let mut row = DigitSet::new();
            let mut column = DigitSet::new();
            let mut boxed = DigitSet::new();
            for j in 0..9 {
                if !Self::note_digit(&mut row, self.get(Position::new(j, i))) {
                    return false;
                }
                if !Self::note_digit(&mut column, self.get(Position::new(i, j))) {
                    return false;
                }
                if !Self::note_digit(&mut boxed, self.get(Position::from_box(i, j))) {
                    return false;
                }
            }
        }
        true
    }

    /// Records a digit in `seen`, returning `false` on a duplicate.
    fn note_digit(seen: &mut DigitSet, digit: Option<Digit>) -> bool {
        let Some(digit) = digit else {
            return true;
        };
        if seen.contains(digit) {
            return false;
        }
        seen.insert(digit);
        true
    }

    /// Classifies the grid as a submitted solution.
    ///
    /// Returns [`SolutionCheck::Incomplete`] if any cell is empty, otherwise
    /// [`SolutionCheck::Valid`] or [`SolutionCheck::Invalid`] according to
    /// [`is_valid`](Self::is_valid). Pure; how the three outcomes are
    /// presented is up to the caller.
    #[must_use]
    pub fn check_solution(&self) -> SolutionCheck {
        if !self.is_complete() {
            SolutionCheck::Incomplete
        } else if self.is_valid() {
            SolutionCheck::Valid
        } else {
            SolutionCheck::Invalid
        }
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[usize::from(pos.index())]
    }
}

/// Outcome of checking a submitted solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionCheck {
    /// All 81 cells are filled and every house constraint holds.
    Valid,
    /// At least one cell is still empty.
    Incomplete,
    /// The grid is fully filled but violates a house constraint.
    Invalid,
}

/// Error parsing a [`DigitGrid`] from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseDigitGridError {
    /// A character was neither a digit nor an empty-cell marker.
    #[display("invalid character in grid: {_0:?}")]
    InvalidCharacter(#[error(not(source))] char),
    /// The string did not contain exactly 81 significant characters.
    #[display("expected 81 cells, found {_0}")]
    InvalidLength(#[error(not(source))] usize),
}

impl FromStr for DigitGrid {
    type Err = ParseDigitGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0_usize;
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let digit = match c {
                '.' | '_' | '0' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = c.to_digit(10).unwrap_or_default() as u8;
                    Some(Digit::from_value(value))
                }
                _ => return Err(ParseDigitGridError::InvalidCharacter(c)),
            };
            if count >= 81 {
                return Err(ParseDigitGridError::InvalidLength(count + 1));
            }
            #[expect(clippy::cast_possible_truncation)]
            grid.set(Position::from_index(count as u8), digit);
            count += 1;
        }
        if count != 81 {
            return Err(ParseDigitGridError::InvalidLength(count));
        }
        Ok(grid)
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => f.write_str(digit.as_str())?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SOLVED: &str =
        "185362947793148526246795183564239871931874265827516394318427659672951438459683712";

    fn solved_grid() -> DigitGrid {
        SOLVED.parse().expect("valid solved grid")
    }

    #[test]
    fn test_empty_grid_is_valid() {
        let grid = DigitGrid::new();
        assert!(grid.is_valid());
        assert_eq!(grid.empty_count(), 81);
        assert!(!grid.is_complete());
        assert_eq!(grid.first_empty(), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_solved_grid_is_valid_and_complete() {
        let grid = solved_grid();
        assert!(grid.is_valid());
        assert!(grid.is_complete());
        assert_eq!(grid.empty_count(), 0);
        assert_eq!(grid.first_empty(), None);
        assert_eq!(grid.check_solution(), SolutionCheck::Valid);
    }

    #[test]
    fn test_row_duplicate_is_invalid() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(0, 3), Some(Digit::D4));
        grid.set(Position::new(7, 3), Some(Digit::D4));
        assert!(!grid.is_valid());
    }

    #[test]
    fn test_column_duplicate_is_invalid() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(2, 0), Some(Digit::D9));
        grid.set(Position::new(2, 8), Some(Digit::D9));
        assert!(!grid.is_valid());
    }

    #[test]
    fn test_box_duplicate_is_invalid() {
        let mut grid = DigitGrid::new();
        // (3, 0) and (5, 2) share box 1 but no row or column
        grid.set(Position::new(3, 0), Some(Digit::D6));
        grid.set(Position::new(5, 2), Some(Digit::D6));
        assert!(!grid.is_valid());
    }

    #[test]
    fn test_check_solution_incomplete() {
        let mut grid = solved_grid();
        grid.set(Position::new(4, 4), None);
        assert_eq!(grid.check_solution(), SolutionCheck::Incomplete);
    }

    #[test]
    fn test_check_solution_invalid() {
        let mut grid = solved_grid();
        // Overwrite one cell with a digit already in its row
        let pos = Position::new(0, 0);
        let neighbor = grid.get(Position::new(1, 0)).unwrap();
        grid.set(pos, Some(neighbor));
        assert_eq!(grid.check_solution(), SolutionCheck::Invalid);
    }

    #[test]
    fn test_candidates_at_single_option() {
        let mut grid = solved_grid();
        let pos = Position::new(6, 2);
        let digit = grid.get(pos).unwrap();
        grid.set(pos, None);
        assert_eq!(grid.candidates_at(pos), crate::DigitSet::from_elem(digit));
    }

    #[test]
    fn test_from_str_accepts_layouts() {
        let grid: DigitGrid = "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        "
        .parse()
        .expect("valid layout");
        assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
        assert_eq!(grid.get(Position::new(2, 0)), None);
        assert_eq!(grid.get(Position::new(8, 8)), Some(Digit::D9));
        assert_eq!(grid.empty_count(), 51);
    }

    #[test]
    fn test_from_str_rejects_bad_input() {
        assert_eq!(
            "x".repeat(81).parse::<DigitGrid>(),
            Err(ParseDigitGridError::InvalidCharacter('x'))
        );
        assert_eq!(
            ".".repeat(80).parse::<DigitGrid>(),
            Err(ParseDigitGridError::InvalidLength(80))
        );
        assert_eq!(
            ".".repeat(82).parse::<DigitGrid>(),
            Err(ParseDigitGridError::InvalidLength(82))
        );
    }

    #[test]
    fn test_display_round_trip() {
        let grid = solved_grid();
        assert_eq!(grid.to_string(), SOLVED);
        assert_eq!(grid.to_string().parse::<DigitGrid>(), Ok(grid));
    }

    proptest! {
        #[test]
        fn prop_parse_display_round_trip(cells in prop::collection::vec(0_u8..=9, 81)) {
            let mut grid = DigitGrid::new();
            for (i, value) in (0_u8..).zip(&cells) {
                grid.set(Position::from_index(i), Digit::try_from_value(*value));
            }
            let text = grid.to_string();
            prop_assert_eq!(text.parse::<DigitGrid>(), Ok(grid));
        }

        #[test]
        fn prop_candidates_exclude_peer_digits(index in 0_u8..81, peer_index in 0_u8..20) {
            let mut grid = DigitGrid::new();
            let pos = Position::from_index(index);
            let peer = pos.house_peers()[usize::from(peer_index)];
            grid.set(peer, Some(Digit::D7));
            prop_assert!(!grid.candidates_at(pos).contains(Digit::D7));
        }
    }
}
