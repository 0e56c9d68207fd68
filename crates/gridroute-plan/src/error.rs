use std::fmt;

use gridroute_core::ParseError;
use gridroute_paths::SearchError;

/// Errors raised while setting up or running a plan.
///
/// An unreachable destination is not an error; it shows up as a failed
/// [`DestinationPlan`](crate::DestinationPlan).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Malformed layout or traffic string.
    Parse(ParseError),
    /// The search refused to start.
    Search(SearchError),
    /// A pinned store index past the end of the store list.
    InvalidStore { index: usize, count: usize },
    /// A goal string that is not an `r,c` pair.
    InvalidPosition { input: String },
    /// Generator ranges that cannot produce a grid.
    InvalidConfig(String),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "parse error: {e}"),
            Self::Search(e) => write!(f, "search error: {e}"),
            Self::InvalidStore { index, count } => {
                write!(f, "store index {index} out of range ({count} stores)")
            }
            Self::InvalidPosition { input } => write!(f, "invalid position: {input:?}"),
            Self::InvalidConfig(msg) => write!(f, "invalid generator config: {msg}"),
        }
    }
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for PlanError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<SearchError> for PlanError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridroute_core::Position;
    use std::error::Error;

    #[test]
    fn wraps_sources() {
        let e: PlanError = SearchError::InvalidGoal(Position::new(9, 9)).into();
        assert_eq!(e.to_string(), "search error: goal position 9,9 is off the grid");
        assert!(e.source().is_some());

        let e = PlanError::InvalidStore { index: 3, count: 2 };
        assert_eq!(e.to_string(), "store index 3 out of range (2 stores)");
        assert!(e.source().is_none());
    }
}
