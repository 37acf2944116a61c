//! Backtracking search engine for the Pencilmark sudoku solver.
//!
//! The engine combines two ideas:
//!
//! 1. **Candidate propagation** — after every tentative placement, the full
//!    candidate set of every cell is rederived from its row, column and box
//!    peers (`Board::recompute_candidates` in `pencilmark-core`).
//! 2. **Most-constrained-first backtracking** — the search always branches
//!    on the empty cell with the fewest candidates, tries its candidates in
//!    ascending order, and backtracks when some cell runs out of candidates.
//!
//! Every step operates on an immutable board snapshot owned by its recursion
//! frame, so there is no shared mutable state anywhere in the search.
//!
//! # Examples
//!
//! ```
//! use pencilmark_core::Board;
//! use pencilmark_solver::{BacktrackSolver, SolveError};
//!
//! // Two 5s in the same row: no solution can exist.
//! let board = "
//!     5__ _5_ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//! "
//! .parse::<Board>()?;
//!
//! let outcome = BacktrackSolver::new().solve(&board);
//! assert_eq!(outcome, Err(SolveError::Unsolvable { steps: 0 }));
//! # Ok::<(), pencilmark_core::ParseBoardError>(())
//! ```

pub mod search;

pub use self::search::{BacktrackSolver, Solution, SolveError, most_constrained_cell};
