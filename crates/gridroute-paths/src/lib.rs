//! Search strategies over traffic-weighted grids with tunnels.
//!
//! Six strategies share one successor model and one tie-break order
//! (`Up`, `Down`, `Left`, `Right`, then tunnels in list order):
//!
//! | Strategy | Frontier | Cost-optimal |
//! |---|---|---|
//! | [`Bfs`] | FIFO queue | no (fewest moves) |
//! | [`Dfs`] | stack | no |
//! | [`IterativeDeepening`] | depth-limited stack | no (fewest moves) |
//! | [`UniformCost`] | min-heap on `g` | yes |
//! | [`AStar`] | min-heap on `g + h` | yes |
//! | [`Greedy`] | min-heap on `h` | no |
//!
//! Every strategy implements [`SearchStrategy`]; [`Strategy`] is the closed,
//! parseable enumeration used to pick one by name. A search either succeeds
//! with a [`Route`] or exhausts the reachable space, which is reported as
//! [`SearchOutcome::Failure`] rather than an error.

mod astar;
mod best_first;
mod bfs;
mod config;
mod dfs;
mod error;
mod frontier;
mod greedy;
mod heuristic;
mod iddfs;
mod neighbors;
mod outcome;
mod strategy;
mod traits;
mod tree;
mod ucs;

pub use astar::AStar;
pub use bfs::Bfs;
pub use config::SearchConfig;
pub use dfs::Dfs;
pub use error::SearchError;
pub use greedy::Greedy;
pub use heuristic::Heuristic;
pub use iddfs::IterativeDeepening;
pub use neighbors::{Successor, Successors, successors};
pub use outcome::{Route, SearchOutcome};
pub use strategy::Strategy;
pub use traits::SearchStrategy;
pub use ucs::UniformCost;
