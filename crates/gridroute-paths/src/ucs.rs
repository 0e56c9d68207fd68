use gridroute_core::{GridModel, Position};

use crate::best_first::{Priority, best_first};
use crate::outcome::SearchOutcome;
use crate::traits::SearchStrategy;

/// Uniform-cost search (Dijkstra with an early goal exit).
///
/// The first pop of a cell carries its minimal cost, so the returned route
/// is the cheapest one.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCost;

impl SearchStrategy for UniformCost {
    fn name(&self) -> String {
        "UCS".to_string()
    }

    fn run(&self, grid: &GridModel, start: Position, goal: Position) -> SearchOutcome {
        best_first(grid, start, goal, Priority::Cost)
    }
}
