use derive_more::{Display, Error};

/// Errors reported by the solver.
///
/// An unsolvable board is *not* an error: [`BacktrackSolver::solve`] returns
/// `Ok(false)` for it, since contradictory user input is an expected outcome.
///
/// [`BacktrackSolver::solve`]: crate::BacktrackSolver::solve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SolverError {
    /// The configured step budget ran out before the search finished.
    #[display("solver exceeded its step limit of {limit}")]
    StepLimitExceeded {
        /// The exhausted budget.
        limit: u64,
    },
}
