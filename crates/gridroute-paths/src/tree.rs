use gridroute_core::{Action, GridModel, Position};

use crate::neighbors::Successor;
use crate::outcome::Route;

// ---------------------------------------------------------------------------
// Search tree arena shared by the frontier-based strategies
// ---------------------------------------------------------------------------

/// Sentinel parent of the root node.
const NO_PARENT: usize = usize::MAX;

#[derive(Clone, Debug)]
pub(crate) struct TreeNode {
    pub(crate) pos: Position,
    pub(crate) action: Option<Action>,
    pub(crate) parent: usize,
    pub(crate) g: i64,
}

/// Arena of generated nodes. Frontiers hold indices into it, and a route is
/// rebuilt by walking parent links back to the root.
pub(crate) struct SearchTree {
    nodes: Vec<TreeNode>,
}

impl SearchTree {
    /// Create a tree whose root (index 0) is `start`.
    pub(crate) fn new(start: Position) -> Self {
        Self {
            nodes: vec![TreeNode {
                pos: start,
                action: None,
                parent: NO_PARENT,
                g: 0,
            }],
        }
    }

    pub(crate) const ROOT: usize = 0;

    #[inline]
    pub(crate) fn node(&self, idx: usize) -> &TreeNode {
        &self.nodes[idx]
    }

    /// Add a child of `parent` reached through `succ`; returns its index.
    pub(crate) fn push(&mut self, parent: usize, succ: &Successor) -> usize {
        let g = self.nodes[parent].g + i64::from(succ.cost);
        self.nodes.push(TreeNode {
            pos: succ.to,
            action: Some(succ.action),
            parent,
            g,
        });
        self.nodes.len() - 1
    }

    /// Rebuild the route ending at `idx`.
    pub(crate) fn route(&self, idx: usize, expanded: usize) -> Route {
        let mut actions = Vec::new();
        let mut path = Vec::new();
        let mut ci = idx;
        while ci != NO_PARENT {
            let n = &self.nodes[ci];
            path.push(n.pos);
            if let Some(a) = n.action {
                actions.push(a);
            }
            ci = n.parent;
        }
        actions.reverse();
        path.reverse();
        Route {
            start: path[0],
            actions,
            path,
            cost: self.nodes[idx].g,
            expanded,
        }
    }
}

// ---------------------------------------------------------------------------
// Per-invocation set of grid cells
// ---------------------------------------------------------------------------

/// Dense set of grid cells, used for explored sets and path-scoped visited
/// sets. Only in-grid positions are ever inserted.
pub(crate) struct CellSet {
    cols: i32,
    bits: Vec<bool>,
}

impl CellSet {
    pub(crate) fn new(grid: &GridModel) -> Self {
        Self {
            cols: grid.cols(),
            bits: vec![false; grid.len()],
        }
    }

    #[inline]
    fn index(&self, p: Position) -> usize {
        (p.row * self.cols + p.col) as usize
    }

    #[inline]
    pub(crate) fn contains(&self, p: Position) -> bool {
        self.bits[self.index(p)]
    }

    /// Insert `p`; returns `false` if it was already present.
    #[inline]
    pub(crate) fn insert(&mut self, p: Position) -> bool {
        let i = self.index(p);
        !std::mem::replace(&mut self.bits[i], true)
    }

    #[inline]
    pub(crate) fn remove(&mut self, p: Position) {
        let i = self.index(p);
        self.bits[i] = false;
    }
}
