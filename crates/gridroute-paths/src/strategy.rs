use std::fmt;
use std::str::FromStr;

use gridroute_core::{GridModel, Position};

use crate::astar::AStar;
use crate::bfs::Bfs;
use crate::config::SearchConfig;
use crate::dfs::Dfs;
use crate::error::SearchError;
use crate::greedy::Greedy;
use crate::heuristic::Heuristic;
use crate::iddfs::IterativeDeepening;
use crate::outcome::SearchOutcome;
use crate::traits::SearchStrategy;
use crate::ucs::UniformCost;

/// The closed set of selectable strategies.
///
/// Parses from the tokens `BFS`, `DFS`, `UCS`, `ASTAR1`, `ASTAR2`,
/// `GREEDY1`, `GREEDY2` and `ITERATIVEDEEPENING` (aliases `ID`, `IDS`),
/// case-insensitively. Displays as the canonical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    Bfs,
    Dfs,
    Ucs,
    AStar(Heuristic),
    Greedy(Heuristic),
    IterativeDeepening,
}

impl Strategy {
    /// Every variant, in the order they are usually listed.
    pub const ALL: [Strategy; 8] = [
        Strategy::Bfs,
        Strategy::Dfs,
        Strategy::Ucs,
        Strategy::AStar(Heuristic::H1),
        Strategy::AStar(Heuristic::H2),
        Strategy::Greedy(Heuristic::H1),
        Strategy::Greedy(Heuristic::H2),
        Strategy::IterativeDeepening,
    ];

    /// Build the searcher for this strategy.
    pub fn searcher(self, config: &SearchConfig) -> Box<dyn SearchStrategy> {
        match self {
            Strategy::Bfs => Box::new(Bfs),
            Strategy::Dfs => Box::new(Dfs),
            Strategy::Ucs => Box::new(UniformCost),
            Strategy::AStar(h) => Box::new(AStar::new(h)),
            Strategy::Greedy(h) => Box::new(Greedy::new(h)),
            Strategy::IterativeDeepening => Box::new(IterativeDeepening::new(config)),
        }
    }

    /// Validate the endpoints and run one search.
    pub fn search(
        self,
        grid: &GridModel,
        start: Position,
        goal: Position,
        config: &SearchConfig,
    ) -> Result<SearchOutcome, SearchError> {
        self.searcher(config).search(grid, start, goal)
    }

    /// Whether the strategy always returns a cheapest route.
    pub fn is_cost_optimal(self) -> bool {
        matches!(self, Strategy::Ucs | Strategy::AStar(_))
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_uppercase();
        match token.as_str() {
            "BFS" => return Ok(Strategy::Bfs),
            "DFS" => return Ok(Strategy::Dfs),
            "UCS" => return Ok(Strategy::Ucs),
            "ITERATIVEDEEPENING" | "ID" | "IDS" => return Ok(Strategy::IterativeDeepening),
            _ => {}
        }
        // ASTAR<n> / GREEDY<n>: a recognised family with a bad selector is a
        // heuristic error, not an unknown name.
        let informed = |rest: &str| -> Result<Heuristic, SearchError> {
            let id: u8 = rest
                .parse()
                .map_err(|_| SearchError::InvalidHeuristic(rest.to_string()))?;
            Heuristic::try_from(id)
        };
        if let Some(rest) = token.strip_prefix("ASTAR").filter(|r| !r.is_empty()) {
            return informed(rest).map(Strategy::AStar);
        }
        if let Some(rest) = token.strip_prefix("GREEDY").filter(|r| !r.is_empty()) {
            return informed(rest).map(Strategy::Greedy);
        }
        Err(SearchError::InvalidStrategyName(s.to_string()))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Bfs => write!(f, "BFS"),
            Strategy::Dfs => write!(f, "DFS"),
            Strategy::Ucs => write!(f, "UCS"),
            Strategy::AStar(h) => write!(f, "ASTAR{}", h.id()),
            Strategy::Greedy(h) => write!(f, "GREEDY{}", h.id()),
            Strategy::IterativeDeepening => write!(f, "ITERATIVEDEEPENING"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridroute_core::Action;
    use rand::rngs::StdRng;
    use rand::{Rng, RngExt, SeedableRng};

    fn pair_grid(cost: i32) -> GridModel {
        let mut b = GridModel::builder(1, 2).unwrap();
        b.edge(Position::new(0, 0), Position::new(0, 1), cost).unwrap();
        b.store(Position::new(0, 0)).unwrap();
        b.destination(Position::new(0, 1)).unwrap();
        b.build()
    }

    fn random_grid<R: Rng>(rng: &mut R) -> GridModel {
        let rows = rng.random_range(2..=4);
        let cols = rng.random_range(2..=4);
        let mut b = GridModel::builder(rows, cols).unwrap();
        for r in 0..rows {
            for c in 0..cols {
                let p = Position::new(r, c);
                if c + 1 < cols {
                    b.edge(p, p.shift(0, 1), rng.random_range(0..=4)).unwrap();
                }
                if r + 1 < rows {
                    b.edge(p, p.shift(1, 0), rng.random_range(0..=4)).unwrap();
                }
            }
        }
        for _ in 0..rng.random_range(0..=2) {
            let a = Position::new(rng.random_range(0..rows), rng.random_range(0..cols));
            let z = Position::new(rng.random_range(0..rows), rng.random_range(0..cols));
            if a.manhattan(z) > 1 {
                b.tunnel(a, z).unwrap();
            }
        }
        b.build()
    }

    fn all_cells(g: &GridModel) -> impl Iterator<Item = Position> + '_ {
        (0..g.len()).map(|i| g.point(i))
    }

    #[test]
    fn tokens() {
        for s in Strategy::ALL {
            assert_eq!(s.to_string().parse::<Strategy>().unwrap(), s);
        }
        assert_eq!(
            "astar2".parse::<Strategy>().unwrap(),
            Strategy::AStar(Heuristic::H2)
        );
        assert_eq!(
            " ids ".parse::<Strategy>().unwrap(),
            Strategy::IterativeDeepening
        );
        assert_eq!("ID".parse::<Strategy>().unwrap(), Strategy::IterativeDeepening);
        assert_eq!(
            "DIJKSTRA".parse::<Strategy>(),
            Err(SearchError::InvalidStrategyName("DIJKSTRA".to_string()))
        );
        assert_eq!(
            "ASTAR".parse::<Strategy>(),
            Err(SearchError::InvalidStrategyName("ASTAR".to_string()))
        );
        assert_eq!(
            "GREEDY3".parse::<Strategy>(),
            Err(SearchError::InvalidHeuristic("3".to_string()))
        );
    }

    #[test]
    fn off_grid_endpoints_are_rejected() {
        let g = pair_grid(1);
        let cfg = SearchConfig::default();
        for s in Strategy::ALL {
            assert_eq!(
                s.search(&g, Position::new(0, 2), Position::new(0, 1), &cfg),
                Err(SearchError::InvalidStart(Position::new(0, 2)))
            );
            assert_eq!(
                s.search(&g, Position::new(0, 0), Position::new(-1, 0), &cfg),
                Err(SearchError::InvalidGoal(Position::new(-1, 0)))
            );
        }
    }

    #[test]
    fn two_cells_one_step() {
        let g = pair_grid(1);
        let cfg = SearchConfig::default();
        for s in Strategy::ALL {
            let o = s
                .search(&g, Position::new(0, 0), Position::new(0, 1), &cfg)
                .unwrap();
            let r = o.route().unwrap_or_else(|| panic!("{s} failed"));
            assert_eq!(r.actions, vec![Action::Right], "{s}");
            assert_eq!(r.cost, 1, "{s}");
            assert_eq!(r.expanded, 2, "{s}");
        }
    }

    #[test]
    fn route_cost_does_not_wrap_past_i32() {
        let g = GridModel::parse(
            "1;3;1;1;0,2;0,0;",
            "0,0,0,1,2147483647;0,1,0,2,2147483647;",
        )
        .unwrap();
        let (start, goal) = (Position::new(0, 0), Position::new(0, 2));
        let cfg = SearchConfig::default();
        for s in Strategy::ALL {
            let o = s.search(&g, start, goal, &cfg).unwrap();
            let r = o.route().unwrap_or_else(|| panic!("{s} failed"));
            assert_eq!(r.cost, 2 * i64::from(i32::MAX), "{s}");
            assert_eq!(g.replay(start, &r.actions).unwrap().1, r.cost, "{s}");
            assert!(o.to_string().starts_with("0,0;right,right;4294967294;"), "{s}");
        }
    }

    #[test]
    fn straight_row_of_twos() {
        let mut b = GridModel::builder(1, 3).unwrap();
        b.fill(2);
        let g = b.build();
        let cfg = SearchConfig::default();
        let optimal = [
            Strategy::Ucs,
            Strategy::AStar(Heuristic::H1),
            Strategy::AStar(Heuristic::H2),
        ];
        for s in optimal {
            let r = s
                .search(&g, Position::new(0, 0), Position::new(0, 2), &cfg)
                .unwrap()
                .into_route()
                .unwrap();
            assert_eq!(r.actions, vec![Action::Right, Action::Right], "{s}");
            assert_eq!(r.cost, 4, "{s}");
        }
    }

    #[test]
    fn blocked_pair_fails_everywhere() {
        let g = pair_grid(0);
        let cfg = SearchConfig::default();
        for s in Strategy::ALL {
            let o = s
                .search(&g, Position::new(0, 0), Position::new(0, 1), &cfg)
                .unwrap();
            assert_eq!(o, SearchOutcome::Failure { expanded: 1 }, "{s}");
        }
    }

    #[test]
    fn tunnel_shortcut() {
        // Walking the 3x3 border costs 5 per step; the corner-to-corner
        // tunnel costs its Manhattan span of 4.
        let mut b = GridModel::builder(3, 3).unwrap();
        b.fill(5);
        b.tunnel(Position::new(0, 0), Position::new(2, 2)).unwrap();
        let g = b.build();
        let (start, goal) = (Position::new(0, 0), Position::new(2, 2));
        let cfg = SearchConfig::default();
        let optimal = [
            Strategy::Ucs,
            Strategy::AStar(Heuristic::H1),
            Strategy::AStar(Heuristic::H2),
        ];
        for s in optimal {
            let r = s.search(&g, start, goal, &cfg).unwrap().into_route().unwrap();
            assert_eq!(r.actions, vec![Action::Tunnel(0)], "{s}");
            assert_eq!(r.cost, 4, "{s}");
        }
        let t = g.tunnels()[0];
        let via_tunnel = start.manhattan(t.a) + t.cost() + t.b.manhattan(goal);
        assert_eq!(Heuristic::H2.estimate(&g, start, goal), via_tunnel);
        // A tunnel costs its Manhattan span, so h1 is already exact here.
        assert_eq!(
            Heuristic::H2.estimate(&g, start, goal),
            Heuristic::H1.estimate(&g, start, goal)
        );
    }

    #[test]
    fn random_grids_agree_on_optimal_cost() {
        for seed in 0..40 {
            let mut rng = StdRng::seed_from_u64(seed);
            let g = random_grid(&mut rng);
            let cfg = SearchConfig {
                max_depth: g.len(),
            };
            let start = g.point(rng.random_range(0..g.len()));
            let goal = g.point(rng.random_range(0..g.len()));

            let optimal = Strategy::Ucs.search(&g, start, goal, &cfg).unwrap().cost();
            for s in Strategy::ALL {
                let o = s.search(&g, start, goal, &cfg).unwrap();
                assert_eq!(o.is_success(), optimal.is_some(), "seed {seed} {s}");
                let Some(r) = o.route() else { continue };
                let best = optimal.unwrap();
                if s.is_cost_optimal() {
                    assert_eq!(r.cost, best, "seed {seed} {s}");
                } else {
                    assert!(r.cost >= best, "seed {seed} {s}");
                }

                // Reported cost and path replay exactly.
                let (path, total) = g.replay(start, &r.actions).unwrap();
                assert_eq!(total, r.cost, "seed {seed} {s}");
                assert_eq!(path, r.path, "seed {seed} {s}");
                assert_eq!(r.end(), goal);

                // No cell is visited twice.
                let mut cells = path.clone();
                cells.sort();
                cells.dedup();
                assert_eq!(cells.len(), path.len(), "seed {seed} {s}");
            }
        }
    }

    #[test]
    fn heuristics_are_admissible_and_ordered() {
        for seed in 100..120 {
            let mut rng = StdRng::seed_from_u64(seed);
            let g = random_grid(&mut rng);
            for goal in all_cells(&g) {
                for p in all_cells(&g) {
                    let h1 = Heuristic::H1.estimate(&g, p, goal);
                    let h2 = Heuristic::H2.estimate(&g, p, goal);
                    assert!(h1 <= h2, "seed {seed}: h1 {h1} > h2 {h2} at {p} -> {goal}");
                    if let Some(true_cost) = UniformCost.run(&g, p, goal).cost() {
                        assert!(
                            i64::from(h2) <= true_cost,
                            "seed {seed}: h2 {h2} > {true_cost} at {p} -> {goal}"
                        );
                    }
                }
            }
        }
    }
}
