//! Most-constrained-first backtracking search.

use log::{debug, trace};
use pencilmark_core::{Board, Cell};

/// A solved board together with search statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    board: Board,
    steps: u64,
}

impl Solution {
    /// Returns the solved board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the solution and returns the solved board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Returns the number of boards the search expanded before finding the
    /// solution.
    #[must_use]
    pub const fn steps(&self) -> u64 {
        self.steps
    }
}

/// Terminal failure outcomes of [`BacktrackSolver::solve`].
///
/// A dead end during search is not an error; it is handled internally by
/// backtracking and never surfaces here.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum SolveError {
    /// The entire search tree was exhausted without finding a solution.
    #[display("puzzle has no solution (searched {steps} boards)")]
    Unsolvable {
        /// Boards expanded before the search tree ran out.
        steps: u64,
    },
    /// The configured step budget ran out before the search finished.
    #[display("step limit of {limit} exhausted after searching {steps} boards")]
    StepLimitExceeded {
        /// The configured budget.
        limit: u64,
        /// Boards expanded when the budget ran out.
        steps: u64,
    },
}

/// Exhaustive backtracking solver over immutable board snapshots.
///
/// The solver repeatedly rederives every cell's candidates, branches on the
/// empty cell with the fewest candidates (first in row-major order on ties)
/// and tries its candidates in ascending numeric order, backtracking on
/// contradiction. The first solution found terminates the whole search.
/// Together those three rules make the search order, and therefore the
/// solution returned for a multi-solution puzzle, fully deterministic.
///
/// # Examples
///
/// ```
/// use pencilmark_core::Board;
/// use pencilmark_solver::BacktrackSolver;
///
/// let board: Board = "
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
/// let solution = BacktrackSolver::new().solve(&board)?;
/// assert!(solution.board().is_complete());
/// println!("solved after {} steps", solution.steps());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BacktrackSolver {
    step_limit: Option<u64>,
}

impl BacktrackSolver {
    /// Creates a solver with no step budget.
    #[must_use]
    pub const fn new() -> Self {
        Self { step_limit: None }
    }

    /// Creates a solver that aborts after expanding `limit` boards.
    ///
    /// The recursion depth is bounded by 81 placements, but a contradictory
    /// puzzle can still force a large number of backtracks; a budget turns
    /// that into a distinct [`SolveError::StepLimitExceeded`] outcome.
    #[must_use]
    pub const fn with_step_limit(limit: u64) -> Self {
        Self {
            step_limit: Some(limit),
        }
    }

    /// Solves the board, returning the first solution found.
    ///
    /// Boards whose filled cells already conflict are rejected up front:
    /// candidate derivation only constrains empty cells, so without this
    /// check a search could fill every cell around a duplicated pair and
    /// terminate "complete" while violating the row constraint.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Unsolvable`] if the search tree is exhausted
    /// without a solution, or [`SolveError::StepLimitExceeded`] if a step
    /// budget was configured and ran out.
    pub fn solve(&self, board: &Board) -> Result<Solution, SolveError> {
        if board.has_conflicts() {
            debug!("rejecting board: filled cells already conflict");
            return Err(SolveError::Unsolvable { steps: 0 });
        }

        let mut search = Search {
            steps: 0,
            step_limit: self.step_limit,
            out_of_budget: false,
        };
        match search.run(board) {
            Some(solved) => {
                debug!("solved after expanding {} boards", search.steps);
                Ok(Solution {
                    board: solved,
                    steps: search.steps,
                })
            }
            None => match (search.out_of_budget, self.step_limit) {
                (true, Some(limit)) => Err(SolveError::StepLimitExceeded {
                    limit,
                    steps: search.steps,
                }),
                _ => Err(SolveError::Unsolvable {
                    steps: search.steps,
                }),
            },
        }
    }
}

/// Returns the empty cell with the fewest candidates, or `None` when every
/// cell is filled.
///
/// Ties break to the first empty cell in row-major order. Expects a board
/// whose candidates have been recomputed since the last value change.
#[must_use]
pub fn most_constrained_cell(board: &Board) -> Option<&Cell> {
    board
        .cells()
        .filter(|cell| cell.is_empty())
        .min_by_key(|cell| cell.candidates().len())
}

/// Recursion state owned by a single top-level solve call.
///
/// The step counter lives here rather than in any shared place, so
/// concurrent solves can never observe each other.
#[derive(Debug)]
struct Search {
    steps: u64,
    step_limit: Option<u64>,
    out_of_budget: bool,
}

impl Search {
    /// One node of the search: recompute candidates, check the terminal
    /// states, then branch on the most constrained empty cell.
    ///
    /// Returns `None` for a dead end; the caller moves on to its next
    /// candidate. Recomputing once per node covers both the dead-end check
    /// and the selection, since the values cannot change in between and
    /// recomputation is idempotent for fixed values.
    fn run(&mut self, board: &Board) -> Option<Board> {
        let board = board.recompute_candidates();
        if !board.is_consistent() {
            return None;
        }
        if board.is_complete() {
            return Some(board);
        }

        if self.step_limit.is_some_and(|limit| self.steps >= limit) {
            self.out_of_budget = true;
            return None;
        }
        trace!("step {}\n{board}", self.steps);
        self.steps += 1;

        let choice = most_constrained_cell(&board)?;
        let (pos, candidates) = (choice.position(), choice.candidates());
        for digit in candidates {
            let trial = board.with_value(pos, digit);
            if let Some(solved) = self.run(&trial) {
                return Some(solved);
            }
            if self.out_of_budget {
                return None;
            }
        }
        None
    }
}
