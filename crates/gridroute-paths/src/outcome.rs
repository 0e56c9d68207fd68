use std::fmt;

use gridroute_core::{Action, Position};

/// A successful search result.
///
/// `cost` is always the sum of the step costs along `actions`, accumulated
/// in `i64` so that long routes over large traffic costs cannot wrap. `path`
/// lists every visited cell from `start` to the goal (so it is one longer
/// than `actions`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub start: Position,
    pub actions: Vec<Action>,
    pub path: Vec<Position>,
    pub cost: i64,
    pub expanded: usize,
}

impl Route {
    /// The final cell of the route.
    pub fn end(&self) -> Position {
        self.path.last().copied().unwrap_or(self.start)
    }

    /// Comma-separated action names, e.g. `right,down,tunnel`.
    pub fn plan(&self) -> String {
        self.actions
            .iter()
            .map(|a| a.name())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Result of one (strategy, start, goal) invocation.
///
/// Exhausting the search space is a normal outcome, reported as
/// [`Failure`](SearchOutcome::Failure) with the work done.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    Success(Route),
    Failure { expanded: usize },
}

impl SearchOutcome {
    /// Number of expanded states.
    pub fn expanded(&self) -> usize {
        match self {
            SearchOutcome::Success(r) => r.expanded,
            SearchOutcome::Failure { expanded } => *expanded,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SearchOutcome::Success(_))
    }

    pub fn route(&self) -> Option<&Route> {
        match self {
            SearchOutcome::Success(r) => Some(r),
            SearchOutcome::Failure { .. } => None,
        }
    }

    pub fn into_route(self) -> Option<Route> {
        match self {
            SearchOutcome::Success(r) => Some(r),
            SearchOutcome::Failure { .. } => None,
        }
    }

    /// Total path cost, if the search succeeded.
    pub fn cost(&self) -> Option<i64> {
        self.route().map(|r| r.cost)
    }

    /// Result line using an aggregated expansion count instead of this
    /// outcome's own.
    pub fn line_with_expanded(&self, expanded: usize) -> String {
        ResultLine { outcome: self, expanded }.to_string()
    }
}

/// Result line: `r,c;action,...;cost;expanded` or `FAIL;0;expanded`.
impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = ResultLine { outcome: self, expanded: self.expanded() };
        fmt::Display::fmt(&line, f)
    }
}

/// An outcome paired with the expansion count to print.
struct ResultLine<'a> {
    outcome: &'a SearchOutcome,
    expanded: usize,
}

impl fmt::Display for ResultLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expanded = self.expanded;
        match self.outcome {
            SearchOutcome::Success(r) => {
                write!(f, "{};{};{};{}", r.start, r.plan(), r.cost, expanded)
            }
            SearchOutcome::Failure { .. } => write!(f, "FAIL;0;{expanded}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Route {
        Route {
            start: Position::new(1, 2),
            actions: vec![Action::Right, Action::Tunnel(0), Action::Up],
            path: vec![
                Position::new(1, 2),
                Position::new(1, 3),
                Position::new(4, 0),
                Position::new(3, 0),
            ],
            cost: 12,
            expanded: 9,
        }
    }

    #[test]
    fn success_line() {
        let o = SearchOutcome::Success(sample());
        assert_eq!(o.to_string(), "1,2;right,tunnel,up;12;9");
        assert_eq!(o.line_with_expanded(30), "1,2;right,tunnel,up;12;30");
        assert_eq!(o.cost(), Some(12));
        assert_eq!(o.route().unwrap().end(), Position::new(3, 0));
    }

    #[test]
    fn failure_line() {
        let o = SearchOutcome::Failure { expanded: 4 };
        assert_eq!(o.to_string(), "FAIL;0;4");
        assert!(!o.is_success());
        assert_eq!(o.cost(), None);
        assert_eq!(o.expanded(), 4);
    }

    #[test]
    fn empty_route_line() {
        let o = SearchOutcome::Success(Route {
            start: Position::new(0, 0),
            actions: Vec::new(),
            path: vec![Position::new(0, 0)],
            cost: 0,
            expanded: 1,
        });
        assert_eq!(o.to_string(), "0,0;;0;1");
    }
}
