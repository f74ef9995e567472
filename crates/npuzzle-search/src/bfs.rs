//! Breadth-first search.

use std::collections::HashSet;
use std::sync::Arc;

use npuzzle_core::Board;

use crate::frontier::{Fifo, Frontier};
use crate::outcome::SearchOutcome;
use crate::strategy::{Strategy, Termination};

/// Breadth-first search: FIFO frontier, goal test at generation.
///
/// Checking each child as it is generated (instead of when it is popped)
/// returns as soon as a goal exists in the frontier rather than a full
/// queue round-trip later, and with FIFO ordering still yields a
/// shortest path in move count. This is the ordering baseline the other
/// frontier-driven strategies are defined against.
#[derive(Debug, Default)]
pub struct Bfs {
    term: Termination,
}

impl Bfs {
    pub fn new() -> Self {
        Self::default()
    }

    /// The expand/dedup loop over an arbitrary frontier discipline.
    ///
    /// With a FIFO this is plain BFS; Best-First reuses it with a ranked
    /// frontier. The goal test stays at generation time either way — a
    /// priority frontier that needs the test at removal (A*) has its own
    /// loop.
    pub(crate) fn search_frontier<F: Frontier>(
        &self,
        root: Board,
        mut frontier: F,
    ) -> SearchOutcome {
        self.term.begin();
        let outcome = self.find(root, &mut frontier);
        self.term.finish();
        outcome
    }

    fn find<F: Frontier>(&self, root: Board, frontier: &mut F) -> SearchOutcome {
        let root = Arc::new(root);
        if root.is_goal() {
            return SearchOutcome::success(root);
        }

        let mut seen: HashSet<Vec<u16>> = HashSet::new();
        seen.insert(root.tiles().to_vec());
        frontier.push(root);

        loop {
            if self.term.observed() {
                return SearchOutcome::failure();
            }
            let Some(curr) = frontier.pop() else {
                break;
            };
            for child in Board::successors(&curr) {
                if child.is_goal() {
                    return SearchOutcome::success(child);
                }
                if seen.insert(child.tiles().to_vec()) {
                    frontier.push(child);
                }
            }
        }
        SearchOutcome::failure()
    }
}

impl Strategy for Bfs {
    fn search(&self, root: Board) -> SearchOutcome {
        self.search_frontier(root, Fifo::new())
    }

    fn request_termination(&self) {
        self.term.request();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_one_move_solution() {
        let outcome = Bfs::new().search("1-2-3-4-5-6-7- -8".parse().unwrap());
        assert!(outcome.found());
        assert_eq!(outcome.moves(), vec![8]);
        assert_eq!(outcome.path().len(), 2);
    }

    #[test]
    fn solved_root_returns_before_the_loop() {
        let outcome = Bfs::new().search(Board::solved(4));
        assert!(outcome.found());
        assert_eq!(outcome.path().len(), 1);
    }

    #[test]
    fn finds_a_shortest_path() {
        // Three moves from solved; BFS must not return a longer path.
        let outcome = Bfs::new().search("1-2-3- -4-6-7-5-8".parse().unwrap());
        assert!(outcome.found());
        assert_eq!(outcome.move_count(), 3);
        assert_eq!(outcome.moves(), vec![4, 5, 8]);
    }

    #[test]
    fn exhausts_an_unsolvable_component() {
        // 2x2 with two pieces swapped: the reachable component is small
        // and contains no goal.
        let outcome = Bfs::new().search("2-1-3-4".parse().unwrap());
        assert!(!outcome.found());
        assert!(outcome.path().is_empty());
    }
}
