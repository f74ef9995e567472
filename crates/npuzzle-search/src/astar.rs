//! A* search.

use std::collections::HashSet;
use std::sync::Arc;

use npuzzle_core::Board;

use crate::frontier::{Frontier, MinHeap};
use crate::outcome::SearchOutcome;
use crate::strategy::{Strategy, Termination};

/// A*: frontier ranked by F-value (path cost plus heuristic), goal test
/// at *removal* from the frontier.
///
/// The late goal test is load-bearing: under a priority order, the first
/// time a layout is generated is not necessarily the cheapest way to
/// reach it, so a board may only be declared the answer once it is the
/// cheapest thing left to expand. With the admissible, consistent
/// Manhattan heuristic this returns a minimum-move solution. The BFS/DFS
/// family tests at generation instead — moving either test to the other
/// family breaks optimality or early exit.
#[derive(Debug, Default)]
pub struct AStar {
    term: Termination,
}

impl AStar {
    pub fn new() -> Self {
        Self::default()
    }

    fn find(&self, root: Board) -> SearchOutcome {
        let mut frontier = MinHeap::new(Board::total_cost);
        let mut seen: HashSet<Vec<u16>> = HashSet::new();

        let root = Arc::new(root);
        seen.insert(root.tiles().to_vec());
        frontier.push(root);

        loop {
            if self.term.observed() {
                return SearchOutcome::failure();
            }
            let Some(curr) = frontier.pop() else {
                break;
            };
            if curr.is_goal() {
                return SearchOutcome::success(curr);
            }
            for child in Board::successors(&curr) {
                if seen.insert(child.tiles().to_vec()) {
                    frontier.push(child);
                }
            }
        }
        SearchOutcome::failure()
    }
}

impl Strategy for AStar {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Kind;

    fn five_move_board() -> Board {
        "2- -3-1-4-6-7-5-8".parse().unwrap()
    }

    #[test]
    fn finds_the_one_move_solution() {
        let outcome = AStar::new().search("1-2-3-4-5-6-7- -8".parse().unwrap());
        assert!(outcome.found());
        assert_eq!(outcome.moves(), vec![8]);
    }

    #[test]
    fn solved_root_needs_no_moves() {
        let outcome = AStar::new().search(Board::solved(3));
        assert!(outcome.found());
        assert_eq!(outcome.path().len(), 1);
        assert!(outcome.moves().is_empty());
    }

    #[test]
    fn returns_a_minimum_move_solution() {
        let outcome = AStar::new().search(five_move_board());
        assert!(outcome.found());
        assert_eq!(outcome.move_count(), 5);
    }

    #[test]
    fn never_longer_than_any_other_strategy() {
        let astar = AStar::new().search(five_move_board());
        assert!(astar.found());
        for kind in Kind::ALL {
            let other = kind.strategy().search(five_move_board());
            assert!(other.found(), "{kind} should solve the scramble");
            assert!(
                astar.move_count() <= other.move_count(),
                "{kind} beat A* on move count"
            );
        }
    }

    #[test]
    fn matches_bfs_on_move_count() {
        let astar = AStar::new().search(five_move_board());
        let bfs = crate::bfs::Bfs::new().search(five_move_board());
        // Both are optimal in move count; the routes may differ.
        assert_eq!(astar.move_count(), bfs.move_count());
    }

    #[test]
    fn exhausts_an_unsolvable_component() {
        let outcome = AStar::new().search("2-1-3-4".parse().unwrap());
        assert!(!outcome.found());
    }
}
