//! Board construction errors.

use thiserror::Error;

/// Why a board could not be constructed.
///
/// All variants are construction-time failures: the input must be corrected
/// and re-submitted. A search that finds no solution is *not* an error and
/// is reported through the search outcome instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidBoard {
    /// A row's length differs from the number of rows.
    #[error("board must be square: {rows} rows but found a row of {row_len} cells")]
    NotSquare { rows: usize, row_len: usize },

    /// The flat cell count is not a positive perfect square.
    #[error("{0} cells do not form a square board")]
    BadLength(usize),

    /// A cell value outside `1..=n*n`.
    #[error("piece {0} is out of range for this board")]
    OutOfRange(u16),

    /// The same value appears in two cells.
    #[error("piece {0} appears more than once")]
    Duplicate(u16),

    /// A token in a board string could not be read as a piece number.
    #[error("unreadable piece token {0:?}")]
    BadToken(String),
}
