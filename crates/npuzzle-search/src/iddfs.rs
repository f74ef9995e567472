//! Iterative-deepening depth-first search.

use std::time::{Duration, Instant};

use npuzzle_core::Board;

use crate::ddfs::Ddfs;
use crate::outcome::SearchOutcome;
use crate::strategy::{Strategy, Termination};

/// First bound tried when none is configured.
pub const DEFAULT_INITIAL_BOUND: u32 = 20;
/// Bound growth between attempts.
pub const DEFAULT_INCREMENT: u32 = 5;
/// Wall-clock budget across all attempts.
pub const DEFAULT_BUDGET: Duration = Duration::from_secs(60);

/// Iterative deepening: repeated depth-bounded runs with a growing bound.
///
/// Each attempt is an independent [`Ddfs`] run with its own fresh visited
/// set; nothing carries over between bounds. The wall-clock budget is
/// measured from the first attempt and checked between attempts only — a
/// running attempt is never interrupted by the budget, only by a
/// termination request, which both stops the inner run and keeps another
/// attempt from starting.
#[derive(Debug)]
pub struct Iddfs {
    ddfs: Ddfs,
    term: Termination,
    initial_bound: u32,
    increment: u32,
    budget: Duration,
}

impl Default for Iddfs {
    fn default() -> Self {
        Self::with_schedule(DEFAULT_INITIAL_BOUND, DEFAULT_INCREMENT, DEFAULT_BUDGET)
    }
}

impl Iddfs {
    pub fn new() -> Self {
        Self::default()
    }

    /// A deepening schedule: start at `initial_bound`, grow by `increment`,
    /// give up once `budget` has elapsed.
    pub fn with_schedule(initial_bound: u32, increment: u32, budget: Duration) -> Self {
        Self {
            ddfs: Ddfs::new(),
            term: Termination::new(),
            initial_bound,
            increment,
            budget,
        }
    }
}

impl Strategy for Iddfs {
    fn search(&self, root: Board) -> SearchOutcome {
        self.term.begin();
        let start = Instant::now();
        let mut bound = self.initial_bound;
        let mut outcome = SearchOutcome::failure();

        loop {
            if self.term.observed() {
                break;
            }
            log::debug!("deepening attempt with bound {bound}");
            outcome = self.ddfs.search_bounded(root.clone(), bound);
            if outcome.found() {
                break;
            }
            bound += self.increment;
            if start.elapsed() >= self.budget {
                log::warn!(
                    "no solution within the {:?} budget (last bound {})",
                    self.budget,
                    bound - self.increment
                );
                break;
            }
        }

        self.term.finish();
        outcome
    }

    fn request_termination(&self) {
        // Stop the attempt in flight and the attempt loop itself.
        self.ddfs.request_termination();
        self.term.request();
    }
}
