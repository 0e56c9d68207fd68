use gridroute_core::{GridModel, Position};

use crate::error::SearchError;
use crate::outcome::SearchOutcome;

/// A search strategy: find a route from `start` to `goal` on a grid.
///
/// Implementations are stateless between calls; all per-search bookkeeping
/// lives inside one [`run`](Self::run) invocation, so one strategy value may
/// serve many searches (and many threads) at once.
pub trait SearchStrategy: Send + Sync {
    /// Short display name, e.g. `"A*(h2)"`.
    fn name(&self) -> String;

    /// Run the search. Both positions are known to be on the grid.
    fn run(&self, grid: &GridModel, start: Position, goal: Position) -> SearchOutcome;

    /// Validate the endpoints, then [`run`](Self::run).
    fn search(
        &self,
        grid: &GridModel,
        start: Position,
        goal: Position,
    ) -> Result<SearchOutcome, SearchError> {
        if !grid.contains(start) {
            return Err(SearchError::InvalidStart(start));
        }
        if !grid.contains(goal) {
            return Err(SearchError::InvalidGoal(goal));
        }
        let outcome = self.run(grid, start, goal);
        log::trace!(
            "{}: {start} -> {goal}: {} after {} expansions",
            self.name(),
            if outcome.is_success() { "found" } else { "exhausted" },
            outcome.expanded()
        );
        Ok(outcome)
    }
}
