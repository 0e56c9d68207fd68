use gridroute_core::{Action, GridModel, Position};

use crate::config::SearchConfig;
use crate::neighbors::{Successor, successors};
use crate::outcome::{Route, SearchOutcome};
use crate::traits::SearchStrategy;
use crate::tree::CellSet;

/// Iterative deepening depth-first search.
///
/// Runs a depth-limited DFS for limits `0..=max_depth` and stops at the
/// first limit that reaches the goal. Within one iteration the visited set
/// only covers the current path, so a cell may be reached again through a
/// different branch. The expansion count is summed over all iterations.
#[derive(Debug, Clone, Copy)]
pub struct IterativeDeepening {
    pub max_depth: usize,
}

impl Default for IterativeDeepening {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}

impl IterativeDeepening {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            max_depth: config.max_depth,
        }
    }
}

/// Result of one depth-limited pass.
enum Limited {
    Found(Route),
    /// Some branch was cut at the limit; a deeper pass may succeed.
    Cutoff,
    /// Every simple path was explored without hitting the limit.
    Exhausted,
}

/// One cell on the current path, with its pending successors.
struct Frame {
    pos: Position,
    via: Option<Action>,
    cost: i64,
    succs: Vec<Successor>,
    next: usize,
}

impl SearchStrategy for IterativeDeepening {
    fn name(&self) -> String {
        "IterativeDeepening".to_string()
    }

    fn run(&self, grid: &GridModel, start: Position, goal: Position) -> SearchOutcome {
        let mut on_path = CellSet::new(grid);
        let mut expanded = 0;

        for limit in 0..=self.max_depth {
            let pass = depth_limited(grid, start, goal, limit, &mut on_path, &mut expanded);
            log::trace!("iterative deepening: limit {limit}, {expanded} expansions so far");
            match pass {
                Limited::Found(mut route) => {
                    route.expanded = expanded;
                    return SearchOutcome::Success(route);
                }
                Limited::Exhausted => break,
                Limited::Cutoff => {}
            }
        }

        SearchOutcome::Failure { expanded }
    }
}

/// State of one depth-limited pass.
struct Pass<'a> {
    grid: &'a GridModel,
    goal: Position,
    limit: usize,
    stack: Vec<Frame>,
    on_path: &'a mut CellSet,
    expanded: &'a mut usize,
    cutoff: bool,
}

/// Depth-limited DFS driven by an explicit stack of frames.
///
/// A cell counts as expanded when it is recognised as the goal or when its
/// successors are generated. Cells at the depth limit are goal-tested but
/// not expanded.
fn depth_limited(
    grid: &GridModel,
    start: Position,
    goal: Position,
    limit: usize,
    on_path: &mut CellSet,
    expanded: &mut usize,
) -> Limited {
    let mut pass = Pass {
        grid,
        goal,
        limit,
        stack: Vec::new(),
        on_path,
        expanded,
        cutoff: false,
    };

    let root = Frame {
        pos: start,
        via: None,
        cost: 0,
        succs: Vec::new(),
        next: 0,
    };
    if let Some(found) = pass.enter(root) {
        return Limited::Found(found);
    }

    while let Some(top) = pass.stack.last_mut() {
        let Some(&s) = top.succs.get(top.next) else {
            // Backtrack.
            pass.on_path.remove(top.pos);
            pass.stack.pop();
            continue;
        };
        top.next += 1;
        if pass.on_path.contains(s.to) {
            continue;
        }
        let child = Frame {
            pos: s.to,
            via: Some(s.action),
            cost: top.cost + i64::from(s.cost),
            succs: Vec::new(),
            next: 0,
        };
        if let Some(found) = pass.enter(child) {
            return Limited::Found(found);
        }
    }

    if pass.cutoff {
        Limited::Cutoff
    } else {
        Limited::Exhausted
    }
}

impl Pass<'_> {
    /// Goal-test `frame` at depth `stack.len()`; push it for expansion if it
    /// is below the limit.
    fn enter(&mut self, mut frame: Frame) -> Option<Route> {
        if frame.pos == self.goal {
            *self.expanded += 1;
            let mut actions: Vec<Action> = self.stack.iter().filter_map(|f| f.via).collect();
            let mut path: Vec<Position> = self.stack.iter().map(|f| f.pos).collect();
            actions.extend(frame.via);
            path.push(frame.pos);
            // The stack is abandoned on success; unmark it so the set is
            // clean for the caller.
            for f in self.stack.drain(..) {
                self.on_path.remove(f.pos);
            }
            return Some(Route {
                start: path[0],
                actions,
                path,
                cost: frame.cost,
                expanded: *self.expanded,
            });
        }
        if self.stack.len() >= self.limit {
            self.cutoff = true;
            return None;
        }
        *self.expanded += 1;
        frame.succs = successors(self.grid, frame.pos);
        self.on_path.insert(frame.pos);
        self.stack.push(frame);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid(rows: i32, cols: i32) -> GridModel {
        let mut b = GridModel::builder(rows, cols).unwrap();
        b.fill(1);
        b.build()
    }

    #[test]
    fn finds_shallowest_goal() {
        let g = open_grid(3, 3);
        let r = IterativeDeepening::default()
            .run(&g, Position::new(0, 0), Position::new(2, 2))
            .into_route()
            .unwrap();
        assert_eq!(r.actions.len(), 4);
        assert_eq!(
            r.actions,
            vec![Action::Down, Action::Down, Action::Right, Action::Right]
        );
        assert_eq!(r.cost, 4);
    }

    #[test]
    fn depth_ceiling_gives_failure() {
        let g = open_grid(1, 6);
        let ids = IterativeDeepening::new(&SearchConfig { max_depth: 3 });
        let o = ids.run(&g, Position::new(0, 0), Position::new(0, 5));
        assert!(!o.is_success());
        // Limits 1, 2 and 3 expand 1, 2 and 3 cells along the row.
        assert_eq!(o.expanded(), 6);

        let deeper = IterativeDeepening::new(&SearchConfig { max_depth: 5 });
        let r = deeper
            .run(&g, Position::new(0, 0), Position::new(0, 5))
            .into_route()
            .unwrap();
        assert_eq!(r.actions.len(), 5);
    }

    #[test]
    fn stops_early_when_exhausted() {
        // A single isolated cell can never reach the goal; the second pass
        // sees no cutoff and stops instead of running to max_depth.
        let g = GridModel::builder(1, 2).unwrap().build();
        let o = IterativeDeepening::default().run(&g, Position::new(0, 0), Position::new(0, 1));
        assert_eq!(o, SearchOutcome::Failure { expanded: 1 });
    }

    #[test]
    fn path_scoped_visits_allow_revisits() {
        // A 2x2 cycle next to an unreachable column. Each pass may expand
        // (1,1) once per branch; the limit-4 pass walks both directions
        // round the cycle without a cutoff and ends the search.
        let mut b = GridModel::builder(2, 3).unwrap();
        b.fill(1);
        b.edge(Position::new(0, 1), Position::new(0, 2), 0).unwrap();
        b.edge(Position::new(1, 1), Position::new(1, 2), 0).unwrap();
        let g = b.build();
        let o = IterativeDeepening::default().run(&g, Position::new(0, 0), Position::new(0, 2));
        // Per-limit expansions: 0, 1, 3, 5, 7.
        assert_eq!(o, SearchOutcome::Failure { expanded: 16 });
    }

    #[test]
    fn start_is_goal() {
        let g = open_grid(2, 2);
        let r = IterativeDeepening::default()
            .run(&g, Position::new(1, 1), Position::new(1, 1))
            .into_route()
            .unwrap();
        assert!(r.actions.is_empty());
        assert_eq!(r.expanded, 1);
    }
}
