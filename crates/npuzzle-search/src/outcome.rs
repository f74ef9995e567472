//! Search results: [`SearchOutcome`] and path reconstruction.

use std::fmt::Write as _;
use std::sync::Arc;

use npuzzle_core::Board;

/// What a search produced: a found/not-found flag and, on success, the
/// ordered boards from the root to the goal.
///
/// The path is rebuilt exactly once, by walking parent handles back from
/// the goal and reversing. A not-found outcome carries an empty path; it
/// covers both search-space exhaustion and an observed termination
/// request — the caller tells those apart by tracking its own request.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    found: bool,
    path: Vec<Arc<Board>>,
}

impl SearchOutcome {
    /// A successful outcome ending in `goal`.
    pub fn success(goal: Arc<Board>) -> Self {
        let mut path = Vec::with_capacity(goal.level() as usize + 1);
        let mut curr = Some(goal);
        while let Some(board) = curr {
            curr = board.parent().map(Arc::clone);
            path.push(board);
        }
        path.reverse();
        Self { found: true, path }
    }

    /// A not-found outcome.
    pub fn failure() -> Self {
        Self::default()
    }

    /// Whether a goal was reached.
    #[inline]
    pub fn found(&self) -> bool {
        self.found
    }

    /// The boards from root to goal; empty unless [`found`](Self::found).
    #[inline]
    pub fn path(&self) -> &[Arc<Board>] {
        &self.path
    }

    /// The pieces slid at each step, in order. The root contributes
    /// nothing — it was not reached by a move — so a solved root yields an
    /// empty list.
    pub fn moves(&self) -> Vec<u16> {
        self.path.iter().filter_map(|b| b.moved_piece()).collect()
    }

    /// Number of moves in the found path.
    #[inline]
    pub fn move_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// The condensed rendering: slid pieces joined with commas, e.g.
    /// `"8, 12, 5"`.
    pub fn condensed_path(&self) -> String {
        let mut s = String::new();
        for (i, piece) in self.moves().iter().enumerate() {
            if i > 0 {
                s.push_str(", ");
            }
            let _ = write!(s, "{piece}");
        }
        s
    }

    /// The step-numbered rendering: every board on the path drawn in full.
    pub fn full_path(&self) -> String {
        let mut s = String::new();
        for board in &self.path {
            let _ = write!(s, "\nStep #{}:\n{board}", board.level() + 1);
        }
        s
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SearchOutcome {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let boards: Vec<&Board> = self.path.iter().map(|b| &**b).collect();
        let mut st = serializer.serialize_struct("SearchOutcome", 2)?;
        st.serialize_field("found", &self.found)?;
        st.serialize_field("path", &boards)?;
        st.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SearchOutcome {
    /// Boards serialize without their path metadata, so the chain is
    /// rebuilt here by replaying each step as a successor of the previous
    /// board. A path that is not a legal move sequence is rejected.
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        #[derive(serde::Deserialize)]
        struct Raw {
            found: bool,
            path: Vec<Board>,
        }

        let raw = Raw::deserialize(deserializer)?;
        let mut boards = raw.path.into_iter();
        let (true, Some(root)) = (raw.found, boards.next()) else {
            return Ok(SearchOutcome::failure());
        };

        let mut curr = Arc::new(root);
        let mut path = vec![Arc::clone(&curr)];
        for (i, step) in boards.enumerate() {
            let next = Board::successors(&curr)
                .into_iter()
                .find(|b| **b == step)
                .ok_or_else(|| {
                    D::Error::custom(format!("path step {} is not one legal move apart", i + 1))
                })?;
            path.push(Arc::clone(&next));
            curr = next;
        }
        Ok(SearchOutcome { found: true, path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::Bfs;
    use crate::strategy::Strategy;

    fn three_move_board() -> Board {
        "1-2-3- -4-6-7-5-8".parse().unwrap()
    }

    #[test]
    fn failure_is_empty() {
        let outcome = SearchOutcome::failure();
        assert!(!outcome.found());
        assert!(outcome.path().is_empty());
        assert!(outcome.moves().is_empty());
        assert_eq!(outcome.move_count(), 0);
        assert_eq!(outcome.condensed_path(), "");
    }

    #[test]
    fn path_runs_root_to_goal_through_parent_links() {
        let outcome = Bfs::new().search(three_move_board());
        assert!(outcome.found());
        let path = outcome.path();

        assert!(path[0].parent().is_none());
        assert!(path.last().unwrap().is_goal());
        for pair in path.windows(2) {
            assert!(Arc::ptr_eq(pair[1].parent().unwrap(), &pair[0]));
            assert_eq!(pair[1].level(), pair[0].level() + 1);
        }
    }

    #[test]
    fn replaying_the_moves_reproduces_the_goal() {
        let outcome = Bfs::new().search(three_move_board());
        assert!(outcome.found());

        let mut curr = Arc::new(three_move_board());
        for piece in outcome.moves() {
            curr = Board::successors(&curr)
                .into_iter()
                .find(|b| b.moved_piece() == Some(piece))
                .expect("recorded move must be legal");
        }
        assert_eq!(&*curr, &**outcome.path().last().unwrap());
        assert!(curr.is_goal());
    }

    #[test]
    fn renderings_cover_every_step() {
        let outcome = Bfs::new().search("1-2-3-4-5-6-7- -8".parse().unwrap());
        assert_eq!(outcome.condensed_path(), "8");
        let full = outcome.full_path();
        assert!(full.contains("Step #1:"));
        assert!(full.contains("Step #2:"));
        assert!(!full.contains("Step #3:"));
    }

    #[test]
    fn solved_root_has_single_entry_path_and_no_moves() {
        let outcome = Bfs::new().search(Board::solved(3));
        assert!(outcome.found());
        assert_eq!(outcome.path().len(), 1);
        assert!(outcome.moves().is_empty());
        assert_eq!(outcome.condensed_path(), "");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::bfs::Bfs;
    use crate::strategy::Strategy;

    #[test]
    fn outcome_round_trip_relinks_the_path() {
        let outcome = Bfs::new().search("1-2-3- -4-6-7-5-8".parse().unwrap());
        let json = serde_json::to_string(&outcome).unwrap();
        let back: SearchOutcome = serde_json::from_str(&json).unwrap();

        assert!(back.found());
        assert_eq!(back.moves(), outcome.moves());
        for pair in back.path().windows(2) {
            assert!(Arc::ptr_eq(pair[1].parent().unwrap(), &pair[0]));
        }
    }

    #[test]
    fn failure_round_trip() {
        let json = serde_json::to_string(&SearchOutcome::failure()).unwrap();
        let back: SearchOutcome = serde_json::from_str(&json).unwrap();
        assert!(!back.found());
        assert!(back.path().is_empty());
    }

    #[test]
    fn illegal_paths_are_rejected() {
        // Root and "goal" two moves apart: not a legal single step.
        let json = r#"{"found":true,"path":["1-2-3- -4-6-7-5-8","1-2-3-4-5-6-7-8-9"]}"#;
        assert!(serde_json::from_str::<SearchOutcome>(json).is_err());
    }
}
