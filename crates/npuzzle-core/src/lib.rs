//! **npuzzle-core** — N-puzzle board state.
//!
//! This crate provides the board abstraction the search crate operates on:
//! construction and validation (grid, flat, or dash-separated string form),
//! successor generation, the Manhattan-distance heuristic and G/F costs,
//! layout-only identity for visited sets, solvability analysis, and the
//! human-readable grid rendering.
//!
//! Search algorithms live in `npuzzle-search`; this crate knows nothing
//! about frontiers or strategies.

pub mod board;
pub mod error;

pub use board::Board;
pub use error::InvalidBoard;
