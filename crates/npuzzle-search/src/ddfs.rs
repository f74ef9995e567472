//! Depth-bounded depth-first search.

use std::collections::HashSet;
use std::sync::Arc;

use npuzzle_core::Board;

use crate::outcome::SearchOutcome;
use crate::strategy::{Strategy, Termination};

/// Depth bound applied when none is configured.
pub const DEFAULT_BOUND: u32 = 10;

/// Depth-first search cut off at a maximum depth.
///
/// A popped board is expanded only while its level is strictly below the
/// bound; boards sitting at the bound are leaves, though they were still
/// goal-checked when generated. Not-found therefore means "no solution
/// within the bound" — a goal deeper than the bound is simply never seen.
#[derive(Debug)]
pub struct Ddfs {
    bound: u32,
    term: Termination,
}

impl Default for Ddfs {
    fn default() -> Self {
        Self::with_bound(DEFAULT_BOUND)
    }
}

impl Ddfs {
    pub fn new() -> Self {
        Self::default()
    }

    /// A bounded search cut off below `bound` moves.
    pub fn with_bound(bound: u32) -> Self {
        Self {
            bound,
            term: Termination::new(),
        }
    }

    /// The configured depth bound.
    #[inline]
    pub fn bound(&self) -> u32 {
        self.bound
    }

    /// One bounded run with an explicit bound; the iterative-deepening
    /// wrapper drives this with its growing schedule. Every run builds a
    /// fresh visited set — a board rejected under a shallow bound may be
    /// legitimately reachable under a deeper one.
    pub(crate) fn search_bounded(&self, root: Board, bound: u32) -> SearchOutcome {
        self.term.begin();
        let outcome = self.find(root, bound);
        self.term.finish();
        outcome
    }

    fn find(&self, root: Board, bound: u32) -> SearchOutcome {
        let root = Arc::new(root);
        if root.is_goal() {
            return SearchOutcome::success(root);
        }

        let mut seen: HashSet<Vec<u16>> = HashSet::new();
        seen.insert(root.tiles().to_vec());
        let mut stack = vec![root];

        loop {
            if self.term.observed() {
                return SearchOutcome::failure();
            }
            let Some(curr) = stack.pop() else {
                break;
            };
            if curr.level() >= bound {
                continue;
            }
            for child in Board::successors(&curr) {
                if child.is_goal() {
                    return SearchOutcome::success(child);
                }
                if seen.insert(child.tiles().to_vec()) {
                    stack.push(child);
                }
            }
        }
        SearchOutcome::failure()
    }
}

impl Strategy for Ddfs {
    fn search(&self, root: Board) -> SearchOutcome {
        self.search_bounded(root, self.bound)
    }

    fn request_termination(&self) {
        self.term.request();
    }
}
