//! Depth-first search.

use std::collections::HashSet;
use std::sync::Arc;

use npuzzle_core::Board;

use crate::outcome::SearchOutcome;
use crate::strategy::{Strategy, Termination};

/// Depth-first search: LIFO frontier, goal test at generation.
///
/// No depth bound — on positions with deep or unbounded exploration this
/// will chew through memory and time, so it suits small boards or serves
/// as the building block the bounded variants are derived from. Found
/// paths carry no optimality guarantee.
#[derive(Debug, Default)]
pub struct Dfs {
    term: Termination,
}

impl Dfs {
    pub fn new() -> Self {
        Self::default()
    }

    fn find(&self, root: Board) -> SearchOutcome {
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

impl Strategy for Dfs {
    fn search(&self, root: Board) -> SearchOutcome {
        self.term.begin();
        let outcome = self.find(root);
        self.term.finish();
        outcome
    }

    fn request_termination(&self) {
        self.term.request();
    }
}
