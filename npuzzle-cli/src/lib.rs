//! Command-line front end for the N-puzzle solver.
//!
//! Collects a board (argument, preference file, random scramble, or an
//! interactive prompt), runs one or all search strategies against it, and
//! prints each strategy's solution renderings and wall time.

mod prefs;
mod runner;

use std::path::PathBuf;

use clap::Parser;
use npuzzle_search::Kind;

pub use prefs::Prefs;
pub use runner::run;

/// Solve sliding-tile puzzles with a choice of search strategies.
#[derive(Debug, Parser)]
#[command(name = "npuzzle", version, about)]
pub struct Args {
    /// Board pieces in row-major order separated by dashes, with one token
    /// left blank (a space) for the empty slot, e.g. "1-2-3-4-5-6-7- -8".
    pub board: Option<String>,

    /// Strategy to run (AS, B, BFS, D, DD, I or a full name); omit to run
    /// every strategy and compare.
    #[arg(short, long)]
    pub algorithm: Option<Kind>,

    /// Ignore the board argument and generate a random solvable n-by-n
    /// scramble instead.
    #[arg(long, value_name = "N", conflicts_with = "board")]
    pub scramble: Option<usize>,

    /// Depth bound for the depth-bounded strategy.
    #[arg(long, default_value_t = npuzzle_search::DEFAULT_BOUND)]
    pub bound: u32,

    /// Wall-clock budget in milliseconds for iterative deepening.
    #[arg(long, value_name = "MS")]
    pub budget_ms: Option<u64>,

    /// Cancel any strategy still searching after this many milliseconds.
    #[arg(long, value_name = "MS")]
    pub cancel_after_ms: Option<u64>,

    /// JSON preference file to read defaults from and record this run in.
    #[arg(long, value_name = "PATH")]
    pub prefs: Option<PathBuf>,
}
