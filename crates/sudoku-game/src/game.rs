use std::ops::Index;

use sudoku_core::{Digit, DigitGrid, Position, SolutionCheck};
use sudoku_generator::GeneratedPuzzle;
use sudoku_solver::{BacktrackSolver, SolverError};

use crate::{CellState, GameError};

/// A Sudoku game session.
///
/// Manages the game state, separating given (initial) cells from player
/// input. Provides operations for filling and clearing cells, with
/// validation to prevent modification of given cells.
///
/// # Examples
///
/// ```
/// use sudoku_game::Game;
/// use sudoku_generator::{Difficulty, PuzzleGenerator};
/// use sudoku_solver::BacktrackSolver;
///
/// let solver = BacktrackSolver::new();
/// let generator = PuzzleGenerator::new(&solver);
/// let puzzle = generator.generate(Difficulty::Easy)?;
/// let game = Game::new(puzzle);
///
/// // Newly created game has empty cells to fill
/// assert!(!game.is_solved());
/// # Ok::<(), sudoku_generator::GeneratorError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    cells: [CellState; 81],
    solution: DigitGrid,
}

impl Game {
    /// Creates a new game from a generated puzzle.
    ///
    /// All cells present in the puzzle's problem grid are marked as given
    /// cells. The rest start as [`CellState::Empty`].
    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem, solution, ..
        } = puzzle;
        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = problem.get(pos) {
                cells[usize::from(pos.index())] = CellState::Given(digit);
            }
        }
        Self { cells, solution }
    }

    /// Returns the state of the cell at the given position.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        self.cells[usize::from(pos.index())]
    }

    /// Returns the stored solution grid for this puzzle.
    #[must_use]
    pub fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Places a digit at the given position.
    ///
    /// If the cell is empty, it becomes filled. If the cell is already
    /// filled, the digit is replaced. Rule conflicts are allowed while
    /// editing; [`check_solution`](Self::check_solution) reports them.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the position holds
    /// a given cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_core::{Digit, Position};
    /// use sudoku_game::{CellState, Game};
    /// use sudoku_generator::{Difficulty, PuzzleGenerator};
    /// use sudoku_solver::BacktrackSolver;
    ///
    /// let solver = BacktrackSolver::new();
    /// let generator = PuzzleGenerator::new(&solver);
    /// let puzzle = generator.generate(Difficulty::Easy)?;
    /// let mut game = Game::new(puzzle);
    ///
    /// let empty_pos = Position::ALL
    ///     .into_iter()
    ///     .find(|&pos| game.cell(pos).is_empty())
    ///     .expect("puzzle has empty cells");
    ///
    /// game.set_digit(empty_pos, Digit::D5).unwrap();
    /// assert_eq!(game.cell(empty_pos), CellState::Filled(Digit::D5));
    /// # Ok::<(), sudoku_generator::GeneratorError>(())
    /// ```
    pub fn set_digit(&mut self, pos: Position, digit: Digit) -> Result<(), GameError> {
        let cell = &mut self.cells[usize::from(pos.index())];
        if cell.is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }
        *cell = CellState::Filled(digit);
        Ok(())
    }

    /// Clears the digit at the given position.
    ///
    /// Clearing an already empty cell has no effect.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the position holds
    /// a given cell.
    pub fn remove_digit(&mut self, pos: Position) -> Result<(), GameError> {
        let cell = &mut self.cells[usize::from(pos.index())];
        if cell.is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }
        *cell = CellState::Empty;
        Ok(())
    }

    /// Returns the current board as a plain digit grid.
    ///
    /// Given and filled cells both contribute their digit; the
    /// given/filled distinction is lost.
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::ALL {
            grid.set(pos, self.cell(pos).as_digit());
        }
        grid
    }

    /// Checks the player's board against the Sudoku rules.
    ///
    /// Returns [`SolutionCheck::Incomplete`] while any cell is empty,
    /// [`SolutionCheck::Valid`] when the board is complete and satisfies
    /// the row, column, and box constraints, and
    /// [`SolutionCheck::Invalid`] otherwise.
    ///
    /// This accepts any valid completion, not just the generator's
    /// recorded solution, so puzzles with multiple solutions are handled
    /// correctly.
    #[must_use]
    pub fn check_solution(&self) -> SolutionCheck {
        self.to_digit_grid().check_solution()
    }

    /// Checks if the game is solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.check_solution() == SolutionCheck::Valid
    }

    /// Fills every empty cell from a solution of the current board.
    ///
    /// The solver runs on a copy of the board including the player's
    /// entries, so correct partial progress is extended rather than
    /// overwritten. Returns `Ok(false)` without modifying the game if the
    /// current entries make the board unsolvable.
    ///
    /// # Errors
    ///
    /// Returns an error if the solver exceeds its step limit.
    pub fn auto_complete(&mut self, solver: &BacktrackSolver) -> Result<bool, SolverError> {
        let mut grid = self.to_digit_grid();
        if !solver.solve(&mut grid)? {
            return Ok(false);
        }
        for pos in Position::ALL {
            if self.cell(pos).is_empty() {
                let digit = grid.get(pos);
                debug_assert!(digit.is_some());
                self.cells[usize::from(pos.index())] =
                    digit.map_or(CellState::Empty, CellState::Filled);
            }
        }
        Ok(true)
    }

    /// Returns the count of each decided digit (given or filled) on the
    /// board.
    #[must_use]
    pub fn decided_digit_count(&self) -> DigitCounts {
        let mut counts = DigitCounts::default();
        for pos in Position::ALL {
            if let Some(digit) = self.cell(pos).as_digit() {
                counts.0[usize::from(digit.value()) - 1] += 1;
            }
        }
        counts
    }
}

/// Per-digit counts, indexable by [`Digit`].
///
/// Returned by [`Game::decided_digit_count`]. A digit is exhausted when
/// its count reaches 9.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigitCounts([usize; 9]);

impl Index<Digit> for DigitCounts {
    type Output = usize;

    fn index(&self, digit: Digit) -> &Self::Output {
        &self.0[usize::from(digit.value()) - 1]
    }
}

#[cfg(test)]
mod tests {
    use sudoku_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};

    use super::*;

    fn test_puzzle() -> GeneratedPuzzle {
        let solver = BacktrackSolver::new();
        let generator = PuzzleGenerator::new(&solver);
        let seed = PuzzleSeed::from_phrase("game tests");
        generator
            .generate_with_seed(Difficulty::Easy, seed)
            .expect("generation cannot fail without a step limit")
    }

    #[test]
    fn new_game_preserves_puzzle_structure() {
        let puzzle = test_puzzle();
        let game = Game::new(puzzle.clone());

        for pos in Position::ALL {
            match puzzle.problem.get(pos) {
                Some(digit) => assert_eq!(game.cell(pos), CellState::Given(digit)),
                None => assert_eq!(game.cell(pos), CellState::Empty),
            }
        }
        assert_eq!(game.solution(), &puzzle.solution);
    }

    #[test]
    fn set_digit_fills_replaces_and_respects_givens() {
        let mut game = Game::new(test_puzzle());

        let empty_pos = Position::ALL
            .into_iter()
            .find(|&pos| game.cell(pos).is_empty())
            .expect("puzzle has empty cells");
        let given_pos = Position::ALL
            .into_iter()
            .find(|&pos| game.cell(pos).is_given())
            .expect("puzzle has given cells");

        game.set_digit(empty_pos, Digit::D5).unwrap();
        assert_eq!(game.cell(empty_pos), CellState::Filled(Digit::D5));

        game.set_digit(empty_pos, Digit::D7).unwrap();
        assert_eq!(game.cell(empty_pos), CellState::Filled(Digit::D7));

        assert_eq!(
            game.set_digit(given_pos, Digit::D1),
            Err(GameError::CannotModifyGivenCell)
        );
    }

    #[test]
    fn remove_digit_clears_player_input_only() {
        let mut game = Game::new(test_puzzle());

        let empty_pos = Position::ALL
            .into_iter()
            .find(|&pos| game.cell(pos).is_empty())
            .expect("puzzle has empty cells");
        let given_pos = Position::ALL
            .into_iter()
            .find(|&pos| game.cell(pos).is_given())
            .expect("puzzle has given cells");

        game.set_digit(empty_pos, Digit::D3).unwrap();
        game.remove_digit(empty_pos).unwrap();
        assert_eq!(game.cell(empty_pos), CellState::Empty);

        // Clearing an empty cell is a no-op
        game.remove_digit(empty_pos).unwrap();
        assert_eq!(game.cell(empty_pos), CellState::Empty);

        assert_eq!(
            game.remove_digit(given_pos),
            Err(GameError::CannotModifyGivenCell)
        );
    }

    #[test]
    fn check_solution_reports_all_three_outcomes() {
        let puzzle = test_puzzle();
        let mut game = Game::new(puzzle.clone());
        assert_eq!(game.check_solution(), SolutionCheck::Incomplete);

        // Fill every empty cell from the solution
        for pos in Position::ALL {
            if game.cell(pos).is_empty() {
                let digit = puzzle.solution.get(pos).expect("solution is complete");
                game.set_digit(pos, digit).unwrap();
            }
        }
        assert_eq!(game.check_solution(), SolutionCheck::Valid);
        assert!(game.is_solved());

        // Break one filled cell
        let filled_pos = Position::ALL
            .into_iter()
            .find(|&pos| game.cell(pos).is_filled())
            .expect("game has filled cells");
        let wrong = Digit::ALL
            .into_iter()
            .find(|&digit| Some(digit) != game.cell(filled_pos).as_digit())
            .expect("some digit differs");
        game.set_digit(filled_pos, wrong).unwrap();
        assert_eq!(game.check_solution(), SolutionCheck::Invalid);
        assert!(!game.is_solved());
    }

    #[test]
    fn auto_complete_solves_from_current_state() {
        let solver = BacktrackSolver::new();
        let mut game = Game::new(test_puzzle());

        assert!(game.auto_complete(&solver).unwrap());
        assert!(game.is_solved());
    }

    #[test]
    fn auto_complete_keeps_correct_player_entries() {
        let solver = BacktrackSolver::new();
        let puzzle = test_puzzle();
        let mut game = Game::new(puzzle.clone());

        let empty_pos = Position::ALL
            .into_iter()
            .find(|&pos| game.cell(pos).is_empty())
            .expect("puzzle has empty cells");
        let correct = puzzle.solution.get(empty_pos).expect("solution is complete");
        game.set_digit(empty_pos, correct).unwrap();

        assert!(game.auto_complete(&solver).unwrap());
        assert_eq!(game.cell(empty_pos), CellState::Filled(correct));
        assert!(game.is_solved());
    }

    #[test]
    fn auto_complete_leaves_unsolvable_board_untouched() {
        let solver = BacktrackSolver::new();
        let mut game = Game::new(test_puzzle());

        // Duplicate a given digit inside its own row to force a dead end
        let given_pos = Position::ALL
            .into_iter()
            .find(|&pos| game.cell(pos).is_given())
            .expect("puzzle has given cells");
        let digit = game.cell(given_pos).as_digit().unwrap();
        let clash_pos = given_pos
            .house_peers()
            .into_iter()
            .find(|&pos| game.cell(pos).is_empty())
            .expect("given has an empty peer");
        game.set_digit(clash_pos, digit).unwrap();

        let before = game.clone();
        assert!(!game.auto_complete(&solver).unwrap());
        assert_eq!(game, before);
    }

    #[test]
    fn decided_digit_count_tracks_givens_and_fills() {
        let mut game = Game::new(test_puzzle());

        let mut expected = [0usize; 9];
        for pos in Position::ALL {
            if let Some(digit) = game.cell(pos).as_digit() {
                expected[usize::from(digit.value()) - 1] += 1;
            }
        }
        let counts = game.decided_digit_count();
        for digit in Digit::ALL {
            assert_eq!(counts[digit], expected[usize::from(digit.value()) - 1]);
        }

        let empty_pos = Position::ALL
            .into_iter()
            .find(|&pos| game.cell(pos).is_empty())
            .expect("puzzle has empty cells");
        let before = game.decided_digit_count()[Digit::D5];
        game.set_digit(empty_pos, Digit::D5).unwrap();
        assert_eq!(game.decided_digit_count()[Digit::D5], before + 1);
    }

    #[test]
    fn to_digit_grid_merges_givens_and_fills() {
        let mut game = Game::new(test_puzzle());
        let empty_pos = Position::ALL
            .into_iter()
            .find(|&pos| game.cell(pos).is_empty())
            .expect("puzzle has empty cells");
        game.set_digit(empty_pos, Digit::D9).unwrap();

        let grid = game.to_digit_grid();
        for pos in Position::ALL {
            assert_eq!(grid.get(pos), game.cell(pos).as_digit());
        }
    }
}
