//! Exhaustive depth-first backtracking search.

use sudoku_core::{Digit, DigitGrid};

use crate::SolverError;

/// A backtracking solver for 9x9 Sudoku grids.
///
/// The search is deterministic: cells are visited in row-major order and
/// candidates are tried in increasing value order, with no heuristics. The
/// same input grid therefore always produces the same completion, which
/// keeps auto-complete behavior reproducible.
///
/// The solver is stateless apart from its configuration and operates on the
/// caller's grid (or an owned copy for counting), so a single instance can
/// be reused freely across boards.
///
/// # Step budget
///
/// Backtracking is exponential in the worst case. A solver built with
/// [`with_step_limit`](Self::with_step_limit) aborts with
/// [`SolverError::StepLimitExceeded`] once that many tentative placements
/// have been made, bounding latency for interactive callers. A solver built
/// with [`new`](Self::new) searches without bound.
///
/// # Examples
///
/// ```
/// use sudoku_core::DigitGrid;
/// use sudoku_solver::BacktrackSolver;
///
/// let mut grid: DigitGrid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// let solver = BacktrackSolver::new();
/// assert!(solver.solve(&mut grid)?);
/// assert!(grid.is_complete() && grid.is_valid());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackSolver {
    step_limit: Option<u64>,
}

impl BacktrackSolver {
    /// Creates a solver without a step budget.
    #[must_use]
    pub const fn new() -> Self {
        Self { step_limit: None }
    }

    /// Creates a solver that aborts after `limit` tentative placements.
    #[must_use]
    pub const fn with_step_limit(limit: u64) -> Self {
        Self {
            step_limit: Some(limit),
        }
    }

    /// Fills every empty cell of `grid`, or reports the board unsolvable.
    ///
    /// Returns `Ok(true)` and leaves the grid completely filled when a
    /// completion exists. Returns `Ok(false)` when none does; the grid is
    /// then equal to its input state (every tentative placement has been
    /// undone), never left partially filled. A grid whose existing digits
    /// already violate a house constraint is unsolvable by definition and
    /// returns `Ok(false)` untouched. A complete valid grid returns
    /// `Ok(true)` without mutation.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::StepLimitExceeded`] if a configured step
    /// budget runs out; the grid is restored to its input state.
    pub fn solve(&self, grid: &mut DigitGrid) -> Result<bool, SolverError> {
        if !grid.is_valid() {
            return Ok(false);
        }
        let mut steps = 0;
        self.search(grid, &mut steps)
    }

    /// Counts completions of `grid`, stopping once `limit` have been found.
    ///
    /// The grid itself is not modified; the search runs on an owned copy.
    /// A grid with contradictory digits has zero completions.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::StepLimitExceeded`] if a configured step
    /// budget runs out.
    pub fn count_solutions(&self, grid: &DigitGrid, limit: usize) -> Result<usize, SolverError> {
        if limit == 0 || !grid.is_valid() {
            return Ok(0);
        }
        let mut copy = grid.clone();
        let mut steps = 0;
        let mut found = 0;
        self.count_search(&mut copy, limit, &mut found, &mut steps)?;
        Ok(found)
    }

    /// Returns `true` if `grid` has exactly one completion.
    ///
    /// Implemented as solution counting capped at two, so the cost is
    /// bounded even for boards with many completions.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::StepLimitExceeded`] if a configured step
    /// budget runs out.
    pub fn has_unique_solution(&self, grid: &DigitGrid) -> Result<bool, SolverError> {
        Ok(self.count_solutions(grid, 2)? == 1)
    }

    fn bump_steps(&self, steps: &mut u64) -> Result<(), SolverError> {
        *steps += 1;
        match self.step_limit {
            Some(limit) if *steps > limit => Err(SolverError::StepLimitExceeded { limit }),
            _ => Ok(()),
        }
    }

    fn search(&self, grid: &mut DigitGrid, steps: &mut u64) -> Result<bool, SolverError> {
        let Some(pos) = grid.first_empty() else {
            return Ok(true);
        };
        let candidates = grid.candidates_at(pos);
        for digit in Digit::ALL {
            if !candidates.contains(digit) {
                continue;
            }
            if let Err(err) = self.bump_steps(steps) {
                grid.set(pos, None);
                return Err(err);
            }
            grid.set(pos, Some(digit));
            match self.search(grid, steps) {
                Ok(true) => return Ok(true),
                Ok(false) => grid.set(pos, None),
                Err(err) => {
                    grid.set(pos, None);
                    return Err(err);
                }
            }
        }
        Ok(false)
    }

    fn count_search(
        &self,
        grid: &mut DigitGrid,
        limit: usize,
        found: &mut usize,
        steps: &mut u64,
    ) -> Result<(), SolverError> {
        let Some(pos) = grid.first_empty() else {
            *found += 1;
            return Ok(());
        };
        let candidates = grid.candidates_at(pos);
        for digit in Digit::ALL {
            if !candidates.contains(digit) {
                continue;
            }
            self.bump_steps(steps)?;
            grid.set(pos, Some(digit));
            let result = self.count_search(grid, limit, found, steps);
            grid.set(pos, None);
            result?;
            if *found >= limit {
                return Ok(());
            }
        }
        Ok(())
    }
}
