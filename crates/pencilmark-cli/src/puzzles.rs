//! Built-in starting boards.

use clap::ValueEnum;
use pencilmark_core::Board;

/// Built-in boards selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Puzzle {
    /// A classic easy grid, solvable with little backtracking.
    Easy,
    /// A notoriously difficult grid that forces deep backtracking.
    VeryHard,
}

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

// "AI Escargot"
const VERY_HARD: &str = "
    1__ __7 _9_
    _3_ _2_ __8
    __9 6__ 5__
    __5 3__ 9__
    _1_ _8_ __2
    6__ __4 ___
    3__ ___ _1_
    _4_ ___ __7
    __7 ___ 3__
";

impl Puzzle {
    /// Returns the starting board for this puzzle.
    pub(crate) fn board(self) -> Board {
        let grid = match self {
            Puzzle::Easy => EASY,
            Puzzle::VeryHard => VERY_HARD,
        };
        grid.parse().expect("built-in board is valid")
    }
}
