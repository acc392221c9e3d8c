//! Random puzzle generation.

use derive_more::{Display, Error, From};
use rand::seq::SliceRandom as _;
use rand_pcg::Pcg64;
use sudoku_core::{Digit, DigitGrid, Position};
use sudoku_solver::{BacktrackSolver, SolverError};

use crate::{Difficulty, PuzzleSeed};

/// Generates Sudoku puzzles with a unique solution.
///
/// Generation runs in two phases. Phase 1 builds a complete grid with a
/// randomized backtracking search: at each empty cell the candidate digits
/// are shuffled before recursing, so different seeds produce different
/// grids. Phase 2 visits the cells in shuffled order and clears each one,
/// keeping the removal only if the puzzle still has exactly one solution.
///
/// All randomness is drawn from a [`PuzzleSeed`], so generation is fully
/// reproducible.
///
/// # Examples
///
/// ```
/// use sudoku_generator::{Difficulty, PuzzleGenerator};
/// use sudoku_solver::BacktrackSolver;
///
/// let solver = BacktrackSolver::new();
/// let generator = PuzzleGenerator::new(&solver);
/// let puzzle = generator.generate(Difficulty::Easy)?;
/// assert_eq!(puzzle.empty_cells(), 40);
/// assert!(puzzle.solution.is_complete());
/// # Ok::<(), sudoku_generator::GeneratorError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator<'a> {
    solver: &'a BacktrackSolver,
}

/// A puzzle produced by [`PuzzleGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The playable puzzle, with cells removed.
    pub problem: DigitGrid,
    /// The complete grid the puzzle was carved from.
    pub solution: DigitGrid,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
    empty_cells: u8,
    requested_empty_cells: u8,
}

impl GeneratedPuzzle {
    /// Returns the number of empty cells in the problem grid.
    #[must_use]
    pub const fn empty_cells(&self) -> u8 {
        self.empty_cells
    }

    /// Returns the empty-cell count that was requested.
    #[must_use]
    pub const fn requested_empty_cells(&self) -> u8 {
        self.requested_empty_cells
    }

    /// Returns `true` if removal stopped short of the requested count.
    ///
    /// This happens when no further cell could be cleared without the
    /// puzzle gaining a second solution. The puzzle is still playable;
    /// it just has more givens than asked for.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.empty_cells < self.requested_empty_cells
    }
}

/// An error which can be returned when generating a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum GeneratorError {
    /// The requested empty-cell count exceeds the 81 cells of the grid.
    #[display("empty cell count {requested} is out of range 0..=81")]
    #[from(skip)]
    EmptyCellsOutOfRange {
        /// The rejected count.
        #[error(not(source))]
        requested: u8,
    },
    /// The solver gave up during a solvability check.
    ///
    /// Only possible when the generator was built with a step-limited
    /// solver.
    Solver(SolverError),
}

impl<'a> PuzzleGenerator<'a> {
    /// Creates a generator backed by the given solver.
    ///
    /// The solver performs the uniqueness checks of phase 2. A solver
    /// with a step limit makes generation fallible with
    /// [`GeneratorError::Solver`].
    #[must_use]
    pub const fn new(solver: &'a BacktrackSolver) -> Self {
        Self { solver }
    }

    /// Generates a puzzle at the given difficulty from a random seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the solver exceeds its step limit.
    pub fn generate(&self, difficulty: Difficulty) -> Result<GeneratedPuzzle, GeneratorError> {
        self.generate_with_seed(difficulty, PuzzleSeed::random())
    }

    /// Generates a puzzle at the given difficulty from a fixed seed.
    ///
    /// The same seed and difficulty always produce the same puzzle.
    ///
    /// # Errors
    ///
    /// Returns an error if the solver exceeds its step limit.
    pub fn generate_with_seed(
        &self,
        difficulty: Difficulty,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GeneratorError> {
        self.generate_with_empty_cells(difficulty.empty_cells(), seed)
    }

    /// Generates a puzzle with an explicit empty-cell target.
    ///
    /// Removal stops early when no cell can be cleared without losing
    /// solution uniqueness; [`GeneratedPuzzle::is_exhausted`] reports
    /// this outcome.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::EmptyCellsOutOfRange`] if `empty_cells`
    /// exceeds 81, or [`GeneratorError::Solver`] if the solver exceeds
    /// its step limit.
    pub fn generate_with_empty_cells(
        &self,
        empty_cells: u8,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GeneratorError> {
        if empty_cells > 81 {
            return Err(GeneratorError::EmptyCellsOutOfRange {
                requested: empty_cells,
            });
        }

        let mut rng = seed.rng();

        let mut solution = DigitGrid::new();
        let filled = fill_grid(&mut solution, &mut rng);
        debug_assert!(filled && solution.is_complete());

        let (problem, removed) = self.remove_cells(&solution, empty_cells, &mut rng)?;

        Ok(GeneratedPuzzle {
            problem,
            solution,
            seed,
            empty_cells: removed,
            requested_empty_cells: empty_cells,
        })
    }

    /// Clears up to `budget` cells while the solution stays unique.
    fn remove_cells(
        &self,
        solution: &DigitGrid,
        budget: u8,
        rng: &mut Pcg64,
    ) -> Result<(DigitGrid, u8), GeneratorError> {
        let mut problem = solution.clone();
        let mut positions = Position::ALL;
        positions.shuffle(rng);

        let mut removed = 0;
        for pos in positions {
            if removed == budget {
                break;
            }
            let digit = problem.get(pos);
            problem.set(pos, None);
            if self.solver.has_unique_solution(&problem)? {
                removed += 1;
            } else {
                problem.set(pos, digit);
            }
        }
        Ok((problem, removed))
    }
}

/// Fills every empty cell with randomized backtracking.
///
/// Candidate digits are shuffled at each cell; otherwise this is the same
/// depth-first search the solver performs. Always succeeds from an empty
/// grid.
fn fill_grid(grid: &mut DigitGrid, rng: &mut Pcg64) -> bool {
    let Some(pos) = grid.first_empty() else {
        return true;
    };
    let mut candidates: Vec<Digit> = grid.candidates_at(pos).into_iter().collect();
    candidates.shuffle(rng);
    for digit in candidates {
        grid.set(pos, Some(digit));
        if fill_grid(grid, rng) {
            return true;
        }
    }
    grid.set(pos, None);
    false
}
