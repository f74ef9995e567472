//! The [`Board`] type — one arrangement of numbered tiles on an `n×n` grid.
//!
//! A board holds pieces `1..=n*n` in row-major order, where the largest
//! number stands for the blank slot. Boards are immutable after
//! construction: sliding a tile produces a *new* board whose `parent`
//! handle points back at the old one, which is how a solution path is
//! reconstructed after a search.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::InvalidBoard;

/// The four blank-slide directions in fixed evaluation order:
/// up, right, down, left. Expansion order is part of the contract —
/// successor ordering must be reproducible.
const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// An `n×n` sliding-puzzle position.
///
/// Equality and hashing consider the tile layout only: two boards with the
/// same arrangement are the same position no matter how they were reached.
/// The move depth, the piece slid to get here, and the parent handle are
/// path metadata and never part of identity.
#[derive(Clone)]
pub struct Board {
    n: usize,
    /// Row-major pieces, `1..=n*n`; `n*n` is the blank.
    tiles: Vec<u16>,
    /// Flat index of the blank slot.
    blank: usize,
    /// Moves from the root position.
    level: u32,
    /// The piece the parent slid to reach this board. `None` for a root.
    moved: Option<u16>,
    /// The position this one was derived from. Shared, not owned: the
    /// frontier, visited set, or path holder keeps ancestors alive.
    parent: Option<Arc<Board>>,
}

impl Board {
    /// Build a root board from rows of pieces.
    ///
    /// Fails if the grid is not square, a value falls outside `1..=n*n`,
    /// or a value repeats.
    pub fn from_grid(rows: &[Vec<u16>]) -> Result<Self, InvalidBoard> {
        let n = rows.len();
        let mut tiles = Vec::with_capacity(n * n);
        for row in rows {
            if row.len() != n {
                return Err(InvalidBoard::NotSquare {
                    rows: n,
                    row_len: row.len(),
                });
            }
            tiles.extend_from_slice(row);
        }
        Self::from_tiles(tiles)
    }

    /// Build a root board from a flat row-major piece vector.
    pub fn from_tiles(tiles: Vec<u16>) -> Result<Self, InvalidBoard> {
        let len = tiles.len();
        let n = len.isqrt();
        if n == 0 || n * n != len || len > u16::MAX as usize {
            return Err(InvalidBoard::BadLength(len));
        }

        let max = (n * n) as u16;
        let mut seen = vec![false; len];
        for &t in &tiles {
            if t == 0 || t > max {
                return Err(InvalidBoard::OutOfRange(t));
            }
            if seen[(t - 1) as usize] {
                return Err(InvalidBoard::Duplicate(t));
            }
            seen[(t - 1) as usize] = true;
        }

        // The permutation check above guarantees the blank exists.
        let blank = tiles.iter().position(|&t| t == max).unwrap_or(0);
        Ok(Self {
            n,
            tiles,
            blank,
            level: 0,
            moved: None,
            parent: None,
        })
    }

    /// The goal position: pieces in row-major order, blank last.
    pub fn solved(n: usize) -> Self {
        assert!(n > 0, "board size must be positive");
        let tiles: Vec<u16> = (1..=(n * n) as u16).collect();
        let blank = n * n - 1;
        Self {
            n,
            tiles,
            blank,
            level: 0,
            moved: None,
            parent: None,
        }
    }

    /// A random *solvable* position, reshuffled until the parity test
    /// passes.
    pub fn scrambled<R: Rng>(n: usize, rng: &mut R) -> Self {
        assert!(n > 1, "cannot scramble a board smaller than 2x2");
        let mut tiles: Vec<u16> = (1..=(n * n) as u16).collect();
        loop {
            tiles.shuffle(rng);
            let blank = tiles
                .iter()
                .position(|&t| t as usize == n * n)
                .unwrap_or(0);
            if solvable(&tiles, n, blank / n) {
                return Self {
                    n,
                    tiles,
                    blank,
                    level: 0,
                    moved: None,
                    parent: None,
                };
            }
        }
    }

    /// Number of rows/columns.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Row-major pieces, `1..=n*n` with `n*n` for the blank. This slice is
    /// the board's identity: visited sets key on it.
    #[inline]
    pub fn tiles(&self) -> &[u16] {
        &self.tiles
    }

    /// Moves taken from the root to reach this board (the G-value).
    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// The piece slid to reach this board, if it is not a root.
    #[inline]
    pub fn moved_piece(&self) -> Option<u16> {
        self.moved
    }

    /// The board this one was derived from, if any.
    #[inline]
    pub fn parent(&self) -> Option<&Arc<Board>> {
        self.parent.as_ref()
    }

    /// The number representing the blank slot (`n*n`).
    #[inline]
    pub fn blank_piece(&self) -> u16 {
        (self.n * self.n) as u16
    }

    /// All positions reachable in one move from `this`, in up/right/down/
    /// left order.
    ///
    /// Between 2 (blank in a corner) and 4 (blank in the interior) boards
    /// are returned; slides off the edge are simply skipped. Each child is
    /// one level deeper, records the piece that was slid, and keeps a
    /// handle to `this` — which is why the function takes the shared
    /// handle rather than a plain reference.
    pub fn successors(this: &Arc<Self>) -> Vec<Arc<Board>> {
        let n = this.n as i32;
        let row = (this.blank / this.n) as i32;
        let col = (this.blank % this.n) as i32;

        let mut out = Vec::with_capacity(4);
        for (dr, dc) in DIRECTIONS {
            let (r, c) = (row + dr, col + dc);
            if r < 0 || c < 0 || r >= n || c >= n {
                continue;
            }
            let swap = (r * n + c) as usize;
            let mut tiles = this.tiles.clone();
            tiles.swap(this.blank, swap);
            out.push(Arc::new(Board {
                n: this.n,
                tiles,
                blank: swap,
                level: this.level + 1,
                moved: Some(this.tiles[swap]),
                parent: Some(Arc::clone(this)),
            }));
        }
        out
    }

    /// Whether this board is the goal position.
    #[inline]
    pub fn is_goal(&self) -> bool {
        self.heuristic() == 0
    }

    /// The H-value: summed Manhattan distance of every piece from its goal
    /// cell (piece `k` belongs at row `(k-1)/n`, column `(k-1) % n`). The
    /// blank is not counted, which keeps the estimate a true lower bound on
    /// the remaining move count.
    pub fn heuristic(&self) -> u32 {
        let n = self.n;
        let blank = self.blank_piece();
        let mut sum = 0u32;
        for (i, &t) in self.tiles.iter().enumerate() {
            if t == blank {
                continue;
            }
            let goal = (t - 1) as usize;
            sum += ((i / n).abs_diff(goal / n) + (i % n).abs_diff(goal % n)) as u32;
        }
        sum
    }

    /// The G-value: the cost already paid, one per move.
    #[inline]
    pub fn path_cost(&self) -> u32 {
        self.level
    }

    /// The F-value: `path_cost() + heuristic()`.
    #[inline]
    pub fn total_cost(&self) -> u32 {
        self.path_cost() + self.heuristic()
    }

    /// Whether any sequence of moves can solve this position, by the
    /// classic inversion-parity argument.
    pub fn is_solvable(&self) -> bool {
        solvable(&self.tiles, self.n, self.blank / self.n)
    }

    /// The board's canonical string form: pieces joined with dashes in
    /// row-major order, e.g. `"1-2-3-4"` for a solved 2×2 board.
    pub fn id(&self) -> String {
        let mut s = String::with_capacity(self.tiles.len() * 3);
        for (i, t) in self.tiles.iter().enumerate() {
            if i > 0 {
                s.push('-');
            }
            s.push_str(&t.to_string());
        }
        s
    }
}

/// Inversion-parity solvability test on a flat layout.
///
/// Odd boards are solvable iff the inversion count is even; even boards
/// iff the inversion count plus the blank's row index (from the top) is
/// odd. Inversions are counted over the numbered pieces only.
fn solvable(tiles: &[u16], n: usize, blank_row: usize) -> bool {
    let blank = (n * n) as u16;
    let mut inversions = 0usize;
    for (i, &a) in tiles.iter().enumerate() {
        if a == blank {
            continue;
        }
        inversions += tiles[i + 1..]
            .iter()
            .filter(|&&b| b != blank && b < a)
            .count();
    }
    if n % 2 == 1 {
        inversions % 2 == 0
    } else {
        (inversions + blank_row) % 2 == 1
    }
}

// --- trait impls ---

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tiles.hash(state);
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("id", &self.id())
            .field("level", &self.level)
            .field("moved", &self.moved)
            .finish()
    }
}

impl fmt::Display for Board {
    /// Bordered grid rendering; the blank slot shows as a space:
    ///
    /// ```text
    /// -------------
    /// | 1 | 2 | 3 |
    /// -------------
    /// | 4 | 5 | 6 |
    /// -------------
    /// | 7 | 8 |   |
    /// -------------
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let blank = self.blank_piece();
        let cell_w = blank.to_string().len();
        let rule = "-".repeat((cell_w + 3) * self.n + 1);

        writeln!(f, "{rule}")?;
        for row in self.tiles.chunks(self.n) {
            for &piece in row {
                let s = if piece == blank {
                    String::from(" ")
                } else {
                    piece.to_string()
                };
                // Center the piece, odd padding spilling right.
                let pad = cell_w - s.len();
                let left = pad / 2;
                write!(
                    f,
                    "|{}{s}{}",
                    " ".repeat(left + 1),
                    " ".repeat(pad - left + 1)
                )?;
            }
            writeln!(f, "|")?;
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = InvalidBoard;

    /// Parse the dash-separated row-major form. A blank or empty token
    /// stands for the blank slot and is canonicalized to `n*n`, so both
    /// `"1-2-3- "` and `"1-2-3-4"` describe the solved 2×2 board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: Vec<&str> = s.split('-').collect();
        if raw.len() > u16::MAX as usize {
            return Err(InvalidBoard::BadLength(raw.len()));
        }
        let blank = raw.len() as u16;

        let mut tiles = Vec::with_capacity(raw.len());
        for tok in raw {
            let tok = tok.trim();
            if tok.is_empty() {
                tiles.push(blank);
            } else {
                let piece: u16 = tok
                    .parse()
                    .map_err(|_| InvalidBoard::BadToken(tok.to_string()))?;
                tiles.push(piece);
            }
        }
        Self::from_tiles(tiles)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Board {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.id())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Path metadata (level/moved/parent) is not serialized; a
        // deserialized board is a fresh root.
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn board_round_trip() {
        let b: Board = "1-2-3-4-5-6-7-9-8".parse().unwrap();
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, "\"1-2-3-4-5-6-7-9-8\"");
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
        // Path metadata is not carried: a deserialized board is a root.
        assert_eq!(back.level(), 0);
        assert!(back.parent().is_none());
    }
}
