//! Greedy best-first search.

use npuzzle_core::Board;

use crate::bfs::Bfs;
use crate::frontier::MinHeap;
use crate::outcome::SearchOutcome;
use crate::strategy::{Strategy, Termination};

/// Best-first search: the BFS loop with a frontier ranked by H-value.
///
/// Always expands whichever board looks closest to solved, which tends to
/// reach *a* goal quickly at the price of path quality — no optimality
/// guarantee. Everything but the frontier ordering is delegated to the
/// wrapped [`Bfs`], including termination handling.
#[derive(Debug, Default)]
pub struct BestFirst {
    bfs: Bfs,
}

impl BestFirst {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Strategy for BestFirst {
    fn search(&self, root: Board) -> SearchOutcome {
        self.bfs.search_frontier(root, MinHeap::new(Board::heuristic))
    }

    fn request_termination(&self) {
        self.bfs.request_termination();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_one_move_solution() {
        let outcome = BestFirst::new().search("1-2-3-4-5-6-7- -8".parse().unwrap());
        assert!(outcome.found());
        assert_eq!(outcome.moves(), vec![8]);
    }

    #[test]
    fn solved_root_needs_no_moves() {
        let outcome = BestFirst::new().search(Board::solved(3));
        assert!(outcome.found());
        assert_eq!(outcome.path().len(), 1);
    }

    #[test]
    fn solves_a_scramble() {
        let outcome = BestFirst::new().search("2- -3-1-4-6-7-5-8".parse().unwrap());
        assert!(outcome.found());
        // Greedy ordering promises a solution, not a shortest one.
        assert!(outcome.move_count() >= 5);
    }

    #[test]
    fn exhausts_an_unsolvable_component() {
        let outcome = BestFirst::new().search("2-1-3-4".parse().unwrap());
        assert!(!outcome.found());
    }
}
