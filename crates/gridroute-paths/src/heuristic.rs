//! Admissible cost-to-goal estimates for informed search.

use std::fmt;
use std::str::FromStr;

use gridroute_core::{GridModel, Position};

use crate::error::SearchError;

/// Which lower bound an informed strategy uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// Manhattan distance to the goal, ignoring tunnels.
    H1,
    /// Manhattan distance, or the cheapest route through a single tunnel
    /// (walk to one endpoint, pay the tunnel, walk from the other endpoint),
    /// whichever is lower.
    H2,
}

impl Heuristic {
    /// Estimate the remaining cost from `p` to `goal`.
    ///
    /// Never exceeds the true cost: steps cost at least 1 per unit of
    /// Manhattan distance and a tunnel costs exactly its Manhattan span.
    pub fn estimate(self, grid: &GridModel, p: Position, goal: Position) -> i32 {
        let direct = p.manhattan(goal);
        match self {
            Heuristic::H1 => direct,
            Heuristic::H2 => grid.tunnels().iter().fold(direct, |best, t| {
                let via_a = p.manhattan(t.a) + t.cost() + t.b.manhattan(goal);
                let via_b = p.manhattan(t.b) + t.cost() + t.a.manhattan(goal);
                best.min(via_a).min(via_b)
            }),
        }
    }

    /// Numeric selector used by strategy tokens (`ASTAR1`, `GREEDY2`, ...).
    pub const fn id(self) -> u8 {
        match self {
            Heuristic::H1 => 1,
            Heuristic::H2 => 2,
        }
    }
}

impl TryFrom<u8> for Heuristic {
    type Error = SearchError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Heuristic::H1),
            2 => Ok(Heuristic::H2),
            _ => Err(SearchError::InvalidHeuristic(id.to_string())),
        }
    }
}

impl FromStr for Heuristic {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h1" | "1" => Ok(Heuristic::H1),
            "h2" | "2" => Ok(Heuristic::H2),
            _ => Err(SearchError::InvalidHeuristic(s.to_string())),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "h{}", self.id())
    }
}

/// Lazily filled per-cell heuristic values for one goal.
///
/// Lives for exactly one search invocation; a new goal needs a new cache.
pub(crate) struct HeuristicCache<'g> {
    grid: &'g GridModel,
    heuristic: Heuristic,
    goal: Position,
    values: Vec<Option<i32>>,
}

impl<'g> HeuristicCache<'g> {
    pub(crate) fn new(grid: &'g GridModel, heuristic: Heuristic, goal: Position) -> Self {
        Self {
            grid,
            heuristic,
            goal,
            values: vec![None; grid.len()],
        }
    }

    pub(crate) fn get(&mut self, p: Position) -> i32 {
        let (grid, heuristic, goal) = (self.grid, self.heuristic, self.goal);
        match grid.idx(p) {
            Some(i) => *self.values[i].get_or_insert_with(|| heuristic.estimate(grid, p, goal)),
            None => heuristic.estimate(grid, p, goal),
        }
    }
}
