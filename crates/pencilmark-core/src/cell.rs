//! A single board cell.

use crate::{digit::Digit, digit_set::DigitSet, position::Position};

/// One of the 81 board positions, together with its placed value and the set
/// of digits still legal for it.
///
/// A cell is `Copy`, so copying a whole board is a flat array copy. The
/// candidate set starts out full at construction and only becomes meaningful
/// after [`Board::recompute_candidates`](crate::Board::recompute_candidates);
/// for a filled cell it carries no meaning at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    value: Option<Digit>,
    candidates: DigitSet,
}

impl Cell {
    pub(crate) const fn new(position: Position, value: Option<Digit>) -> Self {
        Self {
            position,
            value,
            candidates: DigitSet::FULL,
        }
    }

    /// Returns the cell's position.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns the placed digit, or `None` for an empty cell.
    #[must_use]
    pub const fn value(&self) -> Option<Digit> {
        self.value
    }

    /// Returns the digits still legal for this cell.
    ///
    /// Only meaningful for empty cells whose board has had its candidates
    /// recomputed since the last value change.
    #[must_use]
    pub const fn candidates(&self) -> DigitSet {
        self.candidates
    }

    /// Returns `true` if no digit has been placed in this cell.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    pub(crate) const fn set_value(&mut self, digit: Digit) {
        self.value = Some(digit);
    }

    pub(crate) const fn set_candidates(&mut self, candidates: DigitSet) {
        self.candidates = candidates;
    }
}
