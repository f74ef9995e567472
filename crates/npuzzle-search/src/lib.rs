//! **npuzzle-search** — pluggable search strategies for the N-puzzle.
//!
//! Six strategies explore the position graph defined by
//! [`npuzzle_core::Board`], all behind one [`Strategy`] trait:
//!
//! | Strategy | Frontier | Goal test | Optimal path? |
//! |---|---|---|---|
//! | [`Bfs`] | FIFO | at generation | yes (move count) |
//! | [`Dfs`] | LIFO | at generation | no |
//! | [`Ddfs`] | LIFO, depth-bounded | at generation | no |
//! | [`Iddfs`] | repeated [`Ddfs`] | at generation | no |
//! | [`BestFirst`] | min-heap on H | at generation | no |
//! | [`AStar`] | min-heap on F | at removal | yes (move count) |
//!
//! Every strategy shares one deduplication rule (a generated layout
//! already in the run's visited set is dropped) and one cancellation
//! model: a cooperative [`Termination`] request, observed between
//! frontier pops, that resets itself so instances can be reused. A search
//! that finds nothing returns a normal not-found [`SearchOutcome`] —
//! never an error.

mod astar;
mod best_first;
mod bfs;
mod ddfs;
mod dfs;
mod frontier;
mod iddfs;
mod outcome;
mod strategy;

pub use astar::AStar;
pub use best_first::BestFirst;
pub use bfs::Bfs;
pub use ddfs::{DEFAULT_BOUND, Ddfs};
pub use dfs::Dfs;
pub use iddfs::{DEFAULT_BUDGET, DEFAULT_INCREMENT, DEFAULT_INITIAL_BOUND, Iddfs};
pub use outcome::SearchOutcome;
pub use strategy::{Kind, Strategy, Termination, UnknownStrategy};
