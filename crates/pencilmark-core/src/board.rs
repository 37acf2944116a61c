//! The 81-cell sudoku board.
//!
//! A [`Board`] is an immutable snapshot of the grid: every operation that
//! changes state ([`with_value`], [`recompute_candidates`]) returns a new
//! board and leaves the original untouched. This is what makes backtracking
//! search trivially safe — each recursive frame owns its own copy and simply
//! drops it on the way back up.
//!
//! [`with_value`]: Board::with_value
//! [`recompute_candidates`]: Board::recompute_candidates

use std::{array, fmt, str::FromStr};

use crate::{cell::Cell, digit::Digit, digit_set::DigitSet, position::Position};

const SEPARATOR: &str = "----------------------------";

/// Errors raised when constructing a board from raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The input sequence did not contain exactly 81 values.
    #[display("expected 81 values, got {len}")]
    InvalidLength {
        /// Number of values actually provided.
        len: usize,
    },
    /// A value outside the range 0-9 was provided.
    #[display("value {value} at slot {index} is outside 0-9")]
    InvalidValue {
        /// Row-major slot holding the offending value.
        index: usize,
        /// The offending value.
        value: u8,
    },
}

/// Errors raised when parsing a board from a grid string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The string did not describe exactly 81 cells.
    #[display("expected 81 cells, got {len}")]
    InvalidLength {
        /// Number of cells actually described.
        len: usize,
    },
    /// The string contained a character that is neither a digit, an
    /// empty-cell marker, nor whitespace.
    #[display("unexpected character {c:?} in grid")]
    InvalidCharacter {
        /// The offending character.
        c: char,
    },
}

/// An immutable snapshot of the 9x9 grid: exactly 81 cells in row-major
/// order.
///
/// # Examples
///
/// ```
/// use pencilmark_core::{Board, Digit, Position};
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
/// assert_eq!(board.cell(Position::new(0, 0)).value(), Some(Digit::D5));
/// assert!(board.cell(Position::new(2, 0)).is_empty());
///
/// // Candidates become meaningful after recomputation.
/// let board = board.recompute_candidates();
/// assert!(!board.cell(Position::new(2, 0)).candidates().contains(Digit::D5));
/// # Ok::<(), pencilmark_core::ParseBoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; 81],
}

impl Board {
    /// Creates a board with all 81 cells empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: array::from_fn(|index| Cell::new(Position::from_index(index), None)),
        }
    }

    /// Constructs a board from a row-major sequence of exactly 81 values,
    /// where 0 marks an empty cell and 1-9 place that digit.
    ///
    /// Every cell's candidate set is initialized to the full digit set; call
    /// [`recompute_candidates`](Self::recompute_candidates) to derive the
    /// real candidates.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidLength`] if `values` does not hold
    /// exactly 81 entries, or [`BoardError::InvalidValue`] if any entry is
    /// outside 0-9.
    pub fn from_values(values: &[u8]) -> Result<Self, BoardError> {
        if values.len() != 81 {
            return Err(BoardError::InvalidLength { len: values.len() });
        }
        let mut board = Self::empty();
        for (index, &value) in values.iter().enumerate() {
            if value == 0 {
                continue;
            }
            match Digit::try_from_value(value) {
                Some(digit) => board.cells[index].set_value(digit),
                None => return Err(BoardError::InvalidValue { index, value }),
            }
        }
        Ok(board)
    }

    /// Returns the values of all 81 cells in row-major order, with 0 for
    /// empty cells.
    #[must_use]
    pub fn values(&self) -> [u8; 81] {
        array::from_fn(|index| self.cells[index].value().map_or(0, Digit::value))
    }

    /// Returns the cell at the given position.
    #[must_use]
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.index()]
    }

    /// Returns an iterator over all 81 cells in row-major order.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Returns the cells sharing the given position's row, **including** the
    /// cell at the position itself.
    pub fn row_peers(&self, pos: Position) -> impl Iterator<Item = &Cell> {
        self.cells
            .iter()
            .filter(move |cell| cell.position().y() == pos.y())
    }

    /// Returns the cells sharing the given position's column, **including**
    /// the cell at the position itself.
    pub fn col_peers(&self, pos: Position) -> impl Iterator<Item = &Cell> {
        self.cells
            .iter()
            .filter(move |cell| cell.position().x() == pos.x())
    }

    /// Returns the cells sharing the given position's 3x3 box, **including**
    /// the cell at the position itself.
    pub fn box_peers(&self, pos: Position) -> impl Iterator<Item = &Cell> {
        self.cells
            .iter()
            .filter(move |cell| cell.position().box_index() == pos.box_index())
    }

    fn peers(&self, pos: Position) -> impl Iterator<Item = &Cell> {
        self.row_peers(pos)
            .chain(self.col_peers(pos))
            .chain(self.box_peers(pos))
    }

    /// Returns a copy of the board with the digit placed at the given
    /// position.
    ///
    /// Exactly one cell's value changes; every other cell is untouched.
    /// Candidate sets are left stale and must be recomputed before the next
    /// selection decision.
    #[must_use]
    pub fn with_value(&self, pos: Position, digit: Digit) -> Self {
        let mut next = self.clone();
        next.cells[pos.index()].set_value(digit);
        next
    }

    /// Returns a copy of the board with every cell's candidate set rederived
    /// from the current values.
    ///
    /// For each cell, the digits already placed among its row, column and
    /// box peers are disqualified; the candidates are the full digit set
    /// minus the disqualified set. Values are unchanged, and the result is
    /// idempotent for fixed values.
    ///
    /// Candidates are recomputed from scratch rather than maintained
    /// incrementally; with 81 cells and a search depth bounded by 81
    /// placements, the full pass stays cheap.
    #[must_use]
    pub fn recompute_candidates(&self) -> Self {
        let mut next = self.clone();
        for cell in &mut next.cells {
            let disqualified: DigitSet = self
                .peers(cell.position())
                .filter_map(Cell::value)
                .collect();
            cell.set_candidates(DigitSet::FULL.difference(disqualified));
        }
        next
    }

    /// Returns `true` if every cell holds a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns `true` if no empty cell has run out of candidates.
    ///
    /// An empty cell with an empty candidate set is a dead end: no digit can
    /// legally complete it, so the board cannot be solved from this state.
    /// Only meaningful after [`recompute_candidates`](Self::recompute_candidates).
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        !self
            .cells
            .iter()
            .any(|cell| cell.is_empty() && cell.candidates().is_empty())
    }

    /// Returns `true` if two filled cells sharing a row, column or box hold
    /// the same digit.
    ///
    /// Candidate derivation only inspects empty cells, so a contradiction
    /// between two givens is invisible to [`is_consistent`](Self::is_consistent);
    /// this check catches it directly.
    #[must_use]
    pub fn has_conflicts(&self) -> bool {
        self.cells.iter().any(|cell| {
            cell.value().is_some_and(|digit| {
                self.peers(cell.position())
                    .any(|peer| peer.position() != cell.position() && peer.value() == Some(digit))
            })
        })
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses a grid string: digits 1-9 place values, `.`, `_` or `0` mark
    /// empty cells, and all whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::empty();
        let mut count = 0usize;
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let digit = match c {
                '.' | '_' | '0' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = c as u8 - b'0';
                    Digit::try_from_value(value)
                }
                _ => return Err(ParseBoardError::InvalidCharacter { c }),
            };
            if count < 81
                && let Some(digit) = digit
            {
                board.cells[count].set_value(digit);
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseBoardError::InvalidLength { len: count });
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Renders the board as nine pipe-delimited rows between separator
    /// lines, with `|5|` for a filled cell and `| |` for an empty one.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SEPARATOR}")?;
        for y in 0..9 {
            for x in 0..9 {
                match self.cell(Position::new(x, y)).value() {
                    Some(digit) => write!(f, "|{digit}|")?,
                    None => write!(f, "| |")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "{SEPARATOR}")
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const EASY: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";

    const SOLVED: &str = "
        534 678 912
        672 195 348
        198 342 567
        859 761 423
        426 853 791
        713 924 856
        961 537 284
        287 419 635
        345 286 179
    ";

    fn easy_board() -> Board {
        EASY.parse().unwrap()
    }

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(board.cells().len(), 81);
        assert!(board.cells().all(Cell::is_empty));
        assert!(!board.is_complete());
        assert!(board.is_consistent());
    }

    #[test]
    fn test_from_values_round_trip() {
        let mut values = [0u8; 81];
        values[0] = 5;
        values[40] = 9;
        values[80] = 1;

        let board = Board::from_values(&values).unwrap();
        assert_eq!(board.values(), values);
        assert_eq!(board.cell(Position::new(0, 0)).value(), Some(Digit::D5));
        assert_eq!(board.cell(Position::new(4, 4)).value(), Some(Digit::D9));
        assert_eq!(board.cell(Position::new(8, 8)).value(), Some(Digit::D1));
    }

    #[test]
    fn test_from_values_rejects_wrong_length() {
        assert_eq!(
            Board::from_values(&[0; 80]),
            Err(BoardError::InvalidLength { len: 80 })
        );
        assert_eq!(
            Board::from_values(&[0; 82]),
            Err(BoardError::InvalidLength { len: 82 })
        );
    }

    #[test]
    fn test_from_values_rejects_out_of_range_value() {
        let mut values = [0u8; 81];
        values[13] = 10;
        assert_eq!(
            Board::from_values(&values),
            Err(BoardError::InvalidValue {
                index: 13,
                value: 10
            })
        );
    }

    #[test]
    fn test_from_str_parses_grid() {
        let board = easy_board();
        assert_eq!(board.cell(Position::new(0, 0)).value(), Some(Digit::D5));
        assert_eq!(board.cell(Position::new(1, 0)).value(), Some(Digit::D3));
        assert!(board.cell(Position::new(2, 0)).is_empty());
        assert_eq!(board.cell(Position::new(8, 8)).value(), Some(Digit::D9));
    }

    #[test]
    fn test_from_str_empty_cell_markers_are_equivalent() {
        let dots: Board = ".".repeat(81).parse().unwrap();
        let zeros: Board = "0".repeat(81).parse().unwrap();
        let underscores: Board = "_".repeat(81).parse().unwrap();
        assert_eq!(dots, zeros);
        assert_eq!(dots, underscores);
        assert_eq!(dots, Board::empty());
    }

    #[test]
    fn test_from_str_rejects_bad_input() {
        assert_eq!(
            "x".repeat(81).parse::<Board>(),
            Err(ParseBoardError::InvalidCharacter { c: 'x' })
        );
        assert_eq!(
            ".".repeat(80).parse::<Board>(),
            Err(ParseBoardError::InvalidLength { len: 80 })
        );
        assert_eq!(
            ".".repeat(82).parse::<Board>(),
            Err(ParseBoardError::InvalidLength { len: 82 })
        );
    }

    #[test]
    fn test_peer_counts_include_self() {
        let board = Board::empty();
        let pos = Position::new(4, 4);
        assert_eq!(board.row_peers(pos).count(), 9);
        assert_eq!(board.col_peers(pos).count(), 9);
        assert_eq!(board.box_peers(pos).count(), 9);
        assert!(board.row_peers(pos).any(|cell| cell.position() == pos));
    }

    #[test]
    fn test_row_peers_share_row() {
        let board = Board::empty();
        let pos = Position::new(3, 6);
        assert!(board.row_peers(pos).all(|cell| cell.position().y() == 6));
        assert!(board.col_peers(pos).all(|cell| cell.position().x() == 3));
        assert!(
            board
                .box_peers(pos)
                .all(|cell| cell.position().box_index() == pos.box_index())
        );
    }

    #[test]
    fn test_recompute_disqualifies_peer_values() {
        let board = Board::empty()
            .with_value(Position::new(0, 0), Digit::D5)
            .recompute_candidates();

        // Same row, column and box all lose 5
        assert!(
            !board
                .cell(Position::new(8, 0))
                .candidates()
                .contains(Digit::D5)
        );
        assert!(
            !board
                .cell(Position::new(0, 8))
                .candidates()
                .contains(Digit::D5)
        );
        assert!(
            !board
                .cell(Position::new(2, 2))
                .candidates()
                .contains(Digit::D5)
        );

        // An unrelated cell keeps all nine candidates
        assert_eq!(board.cell(Position::new(4, 4)).candidates().len(), 9);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let once = easy_board().recompute_candidates();
        let twice = once.recompute_candidates();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_recompute_leaves_values_unchanged() {
        let board = easy_board();
        assert_eq!(board.recompute_candidates().values(), board.values());
    }

    #[test]
    fn test_cell_with_fully_covered_peers_has_no_candidates() {
        // Peers of (0, 0) cover all nine digits: 1-4 in the row, 5-8 in the
        // column, 9 in the box.
        let board = Board::empty()
            .with_value(Position::new(1, 0), Digit::D1)
            .with_value(Position::new(2, 0), Digit::D2)
            .with_value(Position::new(3, 0), Digit::D3)
            .with_value(Position::new(4, 0), Digit::D4)
            .with_value(Position::new(0, 1), Digit::D5)
            .with_value(Position::new(0, 2), Digit::D6)
            .with_value(Position::new(0, 3), Digit::D7)
            .with_value(Position::new(0, 4), Digit::D8)
            .with_value(Position::new(1, 1), Digit::D9)
            .recompute_candidates();

        assert!(!board.has_conflicts());
        assert!(
            board
                .cell(Position::new(0, 0))
                .candidates()
                .is_empty()
        );
        assert!(!board.is_consistent());
    }

    #[test]
    fn test_is_complete() {
        assert!(!easy_board().is_complete());
        let solved: Board = SOLVED.parse().unwrap();
        assert!(solved.is_complete());
        assert!(!solved.has_conflicts());
    }

    #[test]
    fn test_has_conflicts_detects_duplicate_givens() {
        assert!(!easy_board().has_conflicts());

        // Second 5 in row 0
        let board = easy_board().with_value(Position::new(8, 0), Digit::D5);
        assert!(board.has_conflicts());

        // Duplicate in a column
        let board = Board::empty()
            .with_value(Position::new(3, 1), Digit::D7)
            .with_value(Position::new(3, 8), Digit::D7);
        assert!(board.has_conflicts());

        // Duplicate in a box, different row and column
        let board = Board::empty()
            .with_value(Position::new(0, 0), Digit::D2)
            .with_value(Position::new(1, 1), Digit::D2);
        assert!(board.has_conflicts());
    }

    #[test]
    fn test_display_renders_pipe_delimited_rows() {
        let board = Board::empty().with_value(Position::new(0, 0), Digit::D5);
        let rendered = board.to_string();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "-".repeat(28));
        assert_eq!(lines[10], "-".repeat(28));
        assert_eq!(lines[1], format!("|5|{}", "| |".repeat(8)));
        for line in &lines[2..10] {
            assert_eq!(*line, "| |".repeat(9));
        }
    }

    proptest! {
        #[test]
        fn prop_peer_union_has_21_distinct_cells(index in 0usize..81) {
            let board = Board::empty();
            let pos = Position::from_index(index);
            let mut positions: Vec<_> = board
                .row_peers(pos)
                .chain(board.col_peers(pos))
                .chain(board.box_peers(pos))
                .map(Cell::position)
                .collect();
            positions.sort_unstable();
            positions.dedup();

            // 9 + 9 + 9 cells with the queried cell in all three groups and
            // 2 + 2 overlaps between the box and the row/column.
            prop_assert_eq!(positions.len(), 21);
            prop_assert!(positions.contains(&pos));
        }

        #[test]
        fn prop_with_value_changes_exactly_one_cell(index in 0usize..81, value in 1u8..=9) {
            let board = easy_board();
            let pos = Position::from_index(index);
            let digit = Digit::from_value(value);
            let next = board.with_value(pos, digit);

            for cell in next.cells() {
                let original = board.cell(cell.position());
                prop_assert_eq!(cell.position(), original.position());
                if cell.position() == pos {
                    prop_assert_eq!(cell.value(), Some(digit));
                } else {
                    prop_assert_eq!(cell.value(), original.value());
                }
            }
        }

        #[test]
        fn prop_recompute_is_idempotent_after_placement(index in 0usize..81, value in 1u8..=9) {
            let pos = Position::from_index(index);
            let board = Board::empty()
                .with_value(pos, Digit::from_value(value))
                .recompute_candidates();
            prop_assert_eq!(board.clone(), board.recompute_candidates());
        }
    }
}
