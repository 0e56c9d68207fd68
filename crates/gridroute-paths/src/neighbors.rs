use gridroute_core::{Action, GridModel, Position};

/// One legal transition out of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Successor {
    pub action: Action,
    pub to: Position,
    pub cost: i32,
}

/// Cached successor computation helper.
///
/// Enumerates the legal moves out of a cell in canonical order: the four
/// directions (`Up`, `Down`, `Left`, `Right`) where the edge exists, then one
/// `Tunnel` per tunnel touching the cell, in tunnel order.
pub struct Successors {
    buf: Vec<Successor>,
}

impl Default for Successors {
    fn default() -> Self {
        Self::new()
    }
}

impl Successors {
    /// Create a new `Successors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the successors of `p`. The slice is valid until the next call.
    pub fn of(&mut self, grid: &GridModel, p: Position) -> &[Successor] {
        self.buf.clear();
        fill(grid, p, &mut self.buf);
        &self.buf
    }
}

/// Owned successor list of `p` in canonical order.
pub fn successors(grid: &GridModel, p: Position) -> Vec<Successor> {
    let mut buf = Vec::with_capacity(8);
    fill(grid, p, &mut buf);
    buf
}

fn fill(grid: &GridModel, p: Position, buf: &mut Vec<Successor>) {
    let tunnels = (0..grid.tunnels().len()).map(Action::Tunnel);
    for action in Action::DIRECTIONS.into_iter().chain(tunnels) {
        if let Some((to, cost)) = grid.step(p, action) {
            buf.push(Successor { action, to, cost });
        }
    }
}
