use gridroute_core::{GridModel, Position};

use crate::best_first::{Priority, best_first};
use crate::error::SearchError;
use crate::heuristic::Heuristic;
use crate::outcome::SearchOutcome;
use crate::traits::SearchStrategy;

/// Greedy best-first search ordered by the estimate alone.
///
/// Accumulated cost is tracked for the result but never used for ordering,
/// so the route found may be far from the cheapest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Greedy {
    pub heuristic: Heuristic,
}

impl Greedy {
    pub fn new(heuristic: Heuristic) -> Self {
        Self { heuristic }
    }

    /// Build from a numeric heuristic selector (`1` or `2`).
    pub fn from_id(id: u8) -> Result<Self, SearchError> {
        Ok(Self::new(Heuristic::try_from(id)?))
    }
}

impl SearchStrategy for Greedy {
    fn name(&self) -> String {
        format!("Greedy({})", self.heuristic)
    }

    fn run(&self, grid: &GridModel, start: Position, goal: Position) -> SearchOutcome {
        best_first(grid, start, goal, Priority::Estimate(self.heuristic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ucs::UniformCost;
    use gridroute_core::Action;

    #[test]
    fn heads_straight_for_goal() {
        // Straight across costs 9 + 9; around the bottom costs 4.
        let mut b = GridModel::builder(2, 3).unwrap();
        b.fill(1);
        b.edge(Position::new(0, 0), Position::new(0, 1), 9).unwrap();
        b.edge(Position::new(0, 1), Position::new(0, 2), 9).unwrap();
        let g = b.build();
        let (start, goal) = (Position::new(0, 0), Position::new(0, 2));

        let r = Greedy::new(Heuristic::H1)
            .run(&g, start, goal)
            .into_route()
            .unwrap();
        assert_eq!(r.actions, vec![Action::Right, Action::Right]);
        assert_eq!(r.cost, 18);
        assert_eq!(r.expanded, 3);

        let best = UniformCost.run(&g, start, goal).cost().unwrap();
        assert!(r.cost > best);
    }

    #[test]
    fn unreachable_goal() {
        let mut b = GridModel::builder(1, 3).unwrap();
        b.edge(Position::new(0, 0), Position::new(0, 1), 1).unwrap();
        let g = b.build();
        let o = Greedy::new(Heuristic::H2).run(&g, Position::new(0, 0), Position::new(0, 2));
        assert_eq!(o, SearchOutcome::Failure { expanded: 2 });
    }
}
