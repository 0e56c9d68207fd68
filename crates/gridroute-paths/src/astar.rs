use gridroute_core::{GridModel, Position};

use crate::best_first::{Priority, best_first};
use crate::error::SearchError;
use crate::heuristic::Heuristic;
use crate::outcome::SearchOutcome;
use crate::traits::SearchStrategy;

/// A* search ordered by `g + h`.
///
/// Both heuristics are admissible and consistent, so A* settles cells in
/// the same cost order as uniform-cost search and returns the same optimal
/// cost, usually after fewer expansions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AStar {
    pub heuristic: Heuristic,
}

impl AStar {
    pub fn new(heuristic: Heuristic) -> Self {
        Self { heuristic }
    }

    /// Build from a numeric heuristic selector (`1` or `2`).
    pub fn from_id(id: u8) -> Result<Self, SearchError> {
        Ok(Self::new(Heuristic::try_from(id)?))
    }
}

impl SearchStrategy for AStar {
    fn name(&self) -> String {
        format!("A*({})", self.heuristic)
    }

    fn run(&self, grid: &GridModel, start: Position, goal: Position) -> SearchOutcome {
        best_first(grid, start, goal, Priority::CostPlusEstimate(self.heuristic))
    }
}
