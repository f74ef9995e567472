//! The strategy abstraction: the [`Strategy`] trait, the cooperative
//! [`Termination`] token, and the [`Kind`] selector enum.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use npuzzle_core::Board;
use thiserror::Error;

use crate::astar::AStar;
use crate::best_first::BestFirst;
use crate::bfs::Bfs;
use crate::ddfs::Ddfs;
use crate::dfs::Dfs;
use crate::iddfs::Iddfs;
use crate::outcome::SearchOutcome;

// ---------------------------------------------------------------------------
// Termination
// ---------------------------------------------------------------------------

/// Cooperative cancellation token shared by a strategy and its driver.
///
/// A request is only accepted while a search is running, and the strategy
/// observes it once per frontier pop — an in-flight expansion always
/// completes. The token clears itself both when observed and when a search
/// finishes, so a strategy instance is immediately reusable. A request that
/// lands after the final frontier pop of a run therefore has no effect.
///
/// Callers who must distinguish "cancelled" from "search space exhausted"
/// track the request on their side; the outcome value is the same
/// not-found for both.
#[derive(Clone, Debug, Default)]
pub struct Termination {
    searching: Arc<AtomicBool>,
    requested: Arc<AtomicBool>,
}

impl Termination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the owning strategy to stop. No-op while no search is running.
    pub fn request(&self) {
        if self.searching.load(Ordering::Relaxed) {
            self.requested.store(true, Ordering::Relaxed);
        }
    }

    /// Whether a request is pending and not yet observed.
    #[inline]
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Relaxed)
    }

    /// Mark the start of a search run. Any request that raced the end of
    /// a previous run is discarded so it cannot cancel this one.
    pub(crate) fn begin(&self) {
        self.searching.store(true, Ordering::Relaxed);
        self.requested.store(false, Ordering::Relaxed);
    }

    /// Mark the end of a search run, discarding any unobserved request.
    pub(crate) fn finish(&self) {
        self.searching.store(false, Ordering::Relaxed);
        self.requested.store(false, Ordering::Relaxed);
    }

    /// Consume a pending request, if any. Called once per frontier pop.
    #[inline]
    pub(crate) fn observed(&self) -> bool {
        self.requested.swap(false, Ordering::Relaxed)
    }
}

// ---------------------------------------------------------------------------
// Strategy trait
// ---------------------------------------------------------------------------

/// A search strategy over sliding-puzzle positions.
///
/// `search` runs to completion, exhaustion, or an observed termination
/// request; finding no solution is a normal outcome, never an error. An
/// instance may be reused for any number of sequential searches, but must
/// not be driven by two callers at once — only the termination token is
/// safe to touch from another thread while a search runs.
pub trait Strategy: Send + Sync {
    /// Explore from `root` and report whether a goal was reached, with the
    /// root-to-goal path when it was.
    fn search(&self, root: Board) -> SearchOutcome;

    /// Cooperatively stop an in-flight search. Safe to call from any
    /// thread; observed between frontier pops, after which the search
    /// returns a not-found outcome and the strategy is reusable.
    fn request_termination(&self);
}

// ---------------------------------------------------------------------------
// Kind
// ---------------------------------------------------------------------------

/// The closed set of available strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    AStar,
    BestFirst,
    Bfs,
    Dfs,
    Ddfs,
    Iddfs,
}

impl Kind {
    /// Every strategy, in selection-menu order.
    pub const ALL: [Kind; 6] = [
        Kind::AStar,
        Kind::BestFirst,
        Kind::Bfs,
        Kind::Dfs,
        Kind::Ddfs,
        Kind::Iddfs,
    ];

    /// A fresh, default-configured instance of this strategy.
    pub fn strategy(self) -> Box<dyn Strategy> {
        match self {
            Kind::AStar => Box::new(AStar::new()),
            Kind::BestFirst => Box::new(BestFirst::new()),
            Kind::Bfs => Box::new(Bfs::new()),
            Kind::Dfs => Box::new(Dfs::new()),
            Kind::Ddfs => Box::new(Ddfs::new()),
            Kind::Iddfs => Box::new(Iddfs::new()),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::AStar => "A*",
            Kind::BestFirst => "Best-First",
            Kind::Bfs => "BFS",
            Kind::Dfs => "DFS",
            Kind::Ddfs => "DDFS",
            Kind::Iddfs => "IDDFS",
        };
        f.write_str(name)
    }
}

/// A strategy token that matches no known [`Kind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search strategy {0:?}")]
pub struct UnknownStrategy(pub String);

impl FromStr for Kind {
    type Err = UnknownStrategy;

    /// Accepts both the single-letter menu tokens (`AS`, `B`, `BFS`, `D`,
    /// `DD`, `I`) and full names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "as" | "a*" | "astar" | "a-star" => Ok(Kind::AStar),
            "b" | "best" | "bestfirst" | "best-first" => Ok(Kind::BestFirst),
            "bfs" | "breadth-first" => Ok(Kind::Bfs),
            "d" | "dfs" | "depth-first" => Ok(Kind::Dfs),
            "dd" | "ddfs" | "depth-bounded-dfs" => Ok(Kind::Ddfs),
            "i" | "iddfs" | "iterative-deepening-dfs" => Ok(Kind::Iddfs),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::{Duration, Instant};

    #[test]
    fn kind_parses_menu_tokens_and_names() {
        assert_eq!("AS".parse::<Kind>().unwrap(), Kind::AStar);
        assert_eq!("a*".parse::<Kind>().unwrap(), Kind::AStar);
        assert_eq!("best-first".parse::<Kind>().unwrap(), Kind::BestFirst);
        assert_eq!("BFS".parse::<Kind>().unwrap(), Kind::Bfs);
        assert_eq!("d".parse::<Kind>().unwrap(), Kind::Dfs);
        assert_eq!("DD".parse::<Kind>().unwrap(), Kind::Ddfs);
        assert_eq!("i".parse::<Kind>().unwrap(), Kind::Iddfs);
        assert!("quantum".parse::<Kind>().is_err());
    }

    #[test]
    fn every_kind_builds_a_working_strategy() {
        let board: Board = "1-2-3-4-5-6-7- -8".parse().unwrap();
        for kind in Kind::ALL {
            let outcome = kind.strategy().search(board.clone());
            assert!(outcome.found(), "{kind} failed the one-move board");
            assert_eq!(outcome.moves(), vec![8], "{kind} slid the wrong piece");
        }
    }

    #[test]
    fn request_while_idle_is_ignored() {
        let dfs = Dfs::new();
        dfs.request_termination();
        // The stale request must not poison the next run.
        let outcome = dfs.search("1-2-3-4-5-6-7- -8".parse().unwrap());
        assert!(outcome.found());
    }

    #[test]
    fn termination_stops_a_running_search() {
        // Unsolvable 4x4: exhausting its component would take effectively
        // forever, so only the termination request can end the run.
        let board: Board = "2-1-3-4-5-6-7-8-9-10-11-12-13-14-15-16".parse().unwrap();
        assert!(!board.is_solvable());

        let dfs = Arc::new(Dfs::new());
        let worker = {
            let dfs = Arc::clone(&dfs);
            thread::spawn(move || dfs.search(board))
        };

        let deadline = Instant::now() + Duration::from_secs(10);
        while !worker.is_finished() {
            dfs.request_termination();
            thread::sleep(Duration::from_millis(5));
            assert!(
                Instant::now() < deadline,
                "search did not honor the termination request"
            );
        }
        assert!(!worker.join().unwrap().found());

        // The flag auto-reset: the same instance solves a board afterwards.
        let outcome = dfs.search("1-2-3-4-5-6-7- -8".parse().unwrap());
        assert!(outcome.found());
    }
}
