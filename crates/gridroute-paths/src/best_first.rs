use gridroute_core::{GridModel, Position};

use crate::frontier::PriorityFrontier;
use crate::heuristic::{Heuristic, HeuristicCache};
use crate::neighbors::Successors;
use crate::outcome::SearchOutcome;
use crate::tree::{CellSet, SearchTree};

/// Ordering key of a best-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Priority {
    /// Accumulated cost `g` (uniform-cost).
    Cost,
    /// `g + h` (A*).
    CostPlusEstimate(Heuristic),
    /// `h` alone (greedy).
    Estimate(Heuristic),
}

impl Priority {
    fn heuristic(self) -> Option<Heuristic> {
        match self {
            Priority::Cost => None,
            Priority::CostPlusEstimate(h) | Priority::Estimate(h) => Some(h),
        }
    }
}

/// Shared engine for uniform-cost, A* and greedy search.
///
/// Lazy deletion: a cell may be queued several times; only its first pop is
/// accepted and counted as an expansion, later pops are discarded. The goal
/// test happens on pop.
pub(crate) fn best_first(
    grid: &GridModel,
    start: Position,
    goal: Position,
    priority: Priority,
) -> SearchOutcome {
    let mut tree = SearchTree::new(start);
    let mut explored = CellSet::new(grid);
    let mut succ = Successors::new();
    let mut cache = priority
        .heuristic()
        .map(|h| HeuristicCache::new(grid, h, goal));
    let mut rank = |p: Position, g: i64| -> i64 {
        let h = cache.as_mut().map_or(0, |c| i64::from(c.get(p)));
        match priority {
            Priority::Cost => g,
            Priority::CostPlusEstimate(_) => g + h,
            Priority::Estimate(_) => h,
        }
    };

    let mut open = PriorityFrontier::new();
    open.push(SearchTree::ROOT, rank(start, 0));
    let mut expanded = 0;

    while let Some(ci) = open.pop() {
        let cp = tree.node(ci).pos;
        if !explored.insert(cp) {
            continue;
        }
        expanded += 1;

        if cp == goal {
            return SearchOutcome::Success(tree.route(ci, expanded));
        }

        for s in succ.of(grid, cp) {
            if explored.contains(s.to) {
                continue;
            }
            let ni = tree.push(ci, s);
            open.push(ni, rank(s.to, tree.node(ni).g));
        }
    }

    SearchOutcome::Failure { expanded }
}
