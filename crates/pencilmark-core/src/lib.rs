//! Core data structures for the Pencilmark sudoku solver.
//!
//! This crate provides the board model shared by the solving components:
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: Compact sets of digits, used for per-cell candidates
//! - [`position`]: Board coordinates with derived box indices
//! - [`cell`]: A single board cell (position, value, candidates)
//! - [`board`]: The 81-cell board with peer lookup and candidate derivation
//!
//! Boards are immutable snapshots: placing a value or recomputing candidates
//! produces a new board, which is what the backtracking search engine in
//! `pencilmark-solver` builds on.
//!
//! # Examples
//!
//! ```
//! use pencilmark_core::{Board, Digit, Position};
//!
//! let board = Board::empty()
//!     .with_value(Position::new(4, 4), Digit::D5)
//!     .recompute_candidates();
//!
//! // 5 is disqualified for every peer of (4, 4)
//! let candidates = board.cell(Position::new(4, 5)).candidates();
//! assert!(!candidates.contains(Digit::D5));
//! assert_eq!(candidates.len(), 8);
//! ```

pub mod board;
pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod position;

// Re-export commonly used types
pub use self::{
    board::{Board, BoardError, ParseBoardError},
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
    position::Position,
};
