//! Command-line Sudoku solver.
//!
//! Solves a built-in board or an explicit 81-cell grid given on the command
//! line. On success the solver prints the starting grid, the number of boards
//! the search expanded, and the solved grid; an unsolvable puzzle is reported
//! explicitly on stderr with a nonzero exit status.
//!
//! Set `RUST_LOG=pencilmark_solver=trace` to watch every board the search
//! expands.

use std::process;

use clap::Parser;
use log::debug;
use pencilmark_core::{Board, ParseBoardError};
use pencilmark_solver::{BacktrackSolver, SolveError};

use crate::puzzles::Puzzle;

mod puzzles;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Built-in starting board to solve.
    #[arg(long, value_name = "NAME", default_value = "very-hard")]
    puzzle: Puzzle,

    /// Explicit grid: 81 cells, row-major, digits 1-9 with '.', '_' or '0'
    /// marking empty cells. Overrides --puzzle.
    #[arg(value_name = "GRID")]
    grid: Option<String>,

    /// Abort after expanding this many boards.
    #[arg(long, value_name = "COUNT")]
    max_steps: Option<u64>,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let board = match load_board(&args) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("invalid grid: {err}");
            process::exit(2);
        }
    };

    println!("{board}");

    let solver = match args.max_steps {
        Some(limit) => BacktrackSolver::with_step_limit(limit),
        None => BacktrackSolver::new(),
    };
    match solver.solve(&board) {
        Ok(solution) => {
            println!("GENERATION: {}", solution.steps());
            println!("{}", solution.board());
        }
        Err(err @ SolveError::Unsolvable { .. }) => {
            eprintln!("{err}");
            process::exit(1);
        }
        Err(err @ SolveError::StepLimitExceeded { .. }) => {
            eprintln!("{err}");
            process::exit(2);
        }
    }
}

fn load_board(args: &Args) -> Result<Board, ParseBoardError> {
    match &args.grid {
        Some(grid) => grid.parse(),
        None => {
            debug!("using built-in puzzle {:?}", args.puzzle);
            Ok(args.puzzle.board())
        }
    }
}
