use std::collections::VecDeque;

use gridroute_core::{GridModel, Position};

use crate::neighbors::Successors;
use crate::outcome::SearchOutcome;
use crate::traits::SearchStrategy;
use crate::tree::{CellSet, SearchTree};

/// Breadth-first search.
///
/// FIFO frontier; a cell is marked explored when dequeued, not when
/// enqueued, so it may sit in the queue several times. Finds the route with
/// the fewest moves, which is not necessarily the cheapest.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bfs;

impl SearchStrategy for Bfs {
    fn name(&self) -> String {
        "BFS".to_string()
    }

    fn run(&self, grid: &GridModel, start: Position, goal: Position) -> SearchOutcome {
        let mut tree = SearchTree::new(start);
        let mut explored = CellSet::new(grid);
        let mut succ = Successors::new();
        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(SearchTree::ROOT);
        let mut expanded = 0;

        while let Some(ci) = queue.pop_front() {
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
                queue.push_back(tree.push(ci, s));
            }
        }

        SearchOutcome::Failure { expanded }
    }
}
