use gridroute_core::{GridModel, Position};

use crate::neighbors::Successors;
use crate::outcome::SearchOutcome;
use crate::traits::SearchStrategy;
use crate::tree::{CellSet, SearchTree};

/// Depth-first graph search.
///
/// Stack frontier with a permanent explored set: once a cell is popped it is
/// never expanded again, even from another branch. Successors are pushed in
/// reverse canonical order so they pop in canonical order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dfs;

impl SearchStrategy for Dfs {
    fn name(&self) -> String {
        "DFS".to_string()
    }

    fn run(&self, grid: &GridModel, start: Position, goal: Position) -> SearchOutcome {
        let mut tree = SearchTree::new(start);
        let mut explored = CellSet::new(grid);
        let mut succ = Successors::new();
        let mut stack: Vec<usize> = vec![SearchTree::ROOT];
        let mut expanded = 0;

        while let Some(ci) = stack.pop() {
            let cp = tree.node(ci).pos;
            if !explored.insert(cp) {
                continue;
            }
            expanded += 1;

            if cp == goal {
                return SearchOutcome::Success(tree.route(ci, expanded));
            }

            for s in succ.of(grid, cp).iter().rev() {
                if explored.contains(s.to) {
                    continue;
                }
                stack.push(tree.push(ci, s));
            }
        }

        SearchOutcome::Failure { expanded }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridroute_core::Action;

    fn open_grid(rows: i32, cols: i32) -> GridModel {
        let mut b = GridModel::builder(rows, cols).unwrap();
        b.fill(1);
        b.build()
    }

    #[test]
    fn dives_in_canonical_order() {
        // From the top-left corner Down is tried before Right, so DFS runs
        // down the first column before crossing.
        let g = open_grid(3, 2);
        let r = Dfs
            .run(&g, Position::new(0, 0), Position::new(0, 1))
            .into_route()
            .unwrap();
        assert_eq!(
            r.actions,
            vec![Action::Down, Action::Down, Action::Right, Action::Up, Action::Up]
        );
        assert_eq!(r.cost, 5);
        assert_eq!(r.expanded, 6);
    }

    #[test]
    fn never_revisits() {
        let g = open_grid(4, 4);
        let r = Dfs
            .run(&g, Position::new(0, 0), Position::new(3, 3))
            .into_route()
            .unwrap();
        let mut seen = r.path.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), r.path.len());
        assert!(r.expanded <= g.len());
    }

    #[test]
    fn exhausts_component() {
        // Two 1x2 islands: nothing crosses the blocked middle edge.
        let mut b = GridModel::builder(1, 4).unwrap();
        b.edge(Position::new(0, 0), Position::new(0, 1), 1).unwrap();
        b.edge(Position::new(0, 2), Position::new(0, 3), 1).unwrap();
        let g = b.build();
        let o = Dfs.run(&g, Position::new(0, 0), Position::new(0, 3));
        assert_eq!(o, SearchOutcome::Failure { expanded: 2 });
    }
}
