use std::fmt;

use gridroute_core::Position;

/// Input errors that stop a search before it starts.
///
/// An unreachable goal is not an error; see
/// [`SearchOutcome::Failure`](crate::SearchOutcome::Failure).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Unrecognised strategy token.
    InvalidStrategyName(String),
    /// Unrecognised heuristic selector for A* or greedy search.
    InvalidHeuristic(String),
    /// Start cell is off the grid.
    InvalidStart(Position),
    /// Goal cell is off the grid.
    InvalidGoal(Position),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStrategyName(s) => write!(f, "invalid strategy: {s}"),
            Self::InvalidHeuristic(s) => write!(f, "invalid heuristic selector: {s}"),
            Self::InvalidStart(p) => write!(f, "start position {p} is off the grid"),
            Self::InvalidGoal(p) => write!(f, "goal position {p} is off the grid"),
        }
    }
}

impl std::error::Error for SearchError {}
