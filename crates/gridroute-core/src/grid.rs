//! The immutable delivery grid.
//!
//! A [`GridModel`] holds the dimensions, the per-edge traffic costs, the
//! tunnels, and the store and destination cells of one planning session. It
//! is assembled through a [`GridBuilder`] (directly, or by the wire decoder in
//! [`codec`](crate::codec)) and never changes afterwards, so any number of
//! searches may borrow it at once.

use std::fmt;

use crate::error::ParseError;
use crate::geom::{Action, Position};

// ---------------------------------------------------------------------------
// Tunnel
// ---------------------------------------------------------------------------

/// An unordered pair of cells joined by a shortcut edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tunnel {
    pub a: Position,
    pub b: Position,
}

impl Tunnel {
    /// Create a new tunnel between `a` and `b`.
    pub const fn new(a: Position, b: Position) -> Self {
        Self { a, b }
    }

    /// Traversal cost: the Manhattan distance between the endpoints.
    #[inline]
    pub const fn cost(&self) -> i32 {
        self.a.manhattan(self.b)
    }

    /// The far endpoint when entering at `from`, if `from` is an endpoint.
    #[inline]
    pub fn exit(&self, from: Position) -> Option<Position> {
        if from == self.a {
            Some(self.b)
        } else if from == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// GridModel
// ---------------------------------------------------------------------------

/// Immutable snapshot of a delivery grid.
///
/// Each cell stores the cost of its right edge and of its down edge; the
/// reverse traversals (left, up) reuse the neighbour's stored cost. A cost of
/// `0` means the edge does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridModel {
    rows: i32,
    cols: i32,
    right: Vec<i32>,
    down: Vec<i32>,
    tunnels: Vec<Tunnel>,
    stores: Vec<Position>,
    destinations: Vec<Position>,
}

impl GridModel {
    /// Largest accepted cell count.
    pub const MAX_CELLS: usize = 1 << 20;

    /// Start building a grid of the given size.
    pub fn builder(rows: i32, cols: i32) -> Result<GridBuilder, ParseError> {
        GridBuilder::new(rows, cols)
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.right.len()
    }

    /// Always false: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        p.row >= 0 && p.row < self.rows && p.col >= 0 && p.col < self.cols
    }

    /// Row-major flat index of `p`, or `None` if off the grid.
    #[inline]
    pub fn idx(&self, p: Position) -> Option<usize> {
        self.contains(p).then(|| (p.row * self.cols + p.col) as usize)
    }

    /// Position of a flat index.
    #[inline]
    pub fn point(&self, idx: usize) -> Position {
        let cols = self.cols as usize;
        Position::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Stored cost of the edge from `p` to its right neighbour (0 if absent).
    #[inline]
    pub fn right_cost(&self, p: Position) -> i32 {
        self.idx(p).map_or(0, |i| self.right[i])
    }

    /// Stored cost of the edge from `p` to the cell below it (0 if absent).
    #[inline]
    pub fn down_cost(&self, p: Position) -> i32 {
        self.idx(p).map_or(0, |i| self.down[i])
    }

    pub fn tunnels(&self) -> &[Tunnel] {
        &self.tunnels
    }

    pub fn stores(&self) -> &[Position] {
        &self.stores
    }

    pub fn destinations(&self) -> &[Position] {
        &self.destinations
    }

    /// Apply `action` at `from`.
    ///
    /// Returns the target cell and the step cost, or `None` if the move
    /// leaves the grid, crosses a missing edge, or names a tunnel that does
    /// not touch `from`.
    pub fn step(&self, from: Position, action: Action) -> Option<(Position, i32)> {
        if !self.contains(from) {
            return None;
        }
        let (to, cost) = match action {
            Action::Up => {
                let to = from.shift(-1, 0);
                (to, self.down_cost(to))
            }
            Action::Down => (from.shift(1, 0), self.down_cost(from)),
            Action::Left => {
                let to = from.shift(0, -1);
                (to, self.right_cost(to))
            }
            Action::Right => (from.shift(0, 1), self.right_cost(from)),
            Action::Tunnel(i) => {
                let t = self.tunnels.get(i)?;
                return t.exit(from).map(|to| (to, t.cost()));
            }
        };
        (self.contains(to) && cost > 0).then_some((to, cost))
    }

    /// Re-apply `actions` from `start`.
    ///
    /// Returns every visited cell (starting with `start`) and the summed
    /// step cost, or `None` as soon as one action is illegal.
    pub fn replay(&self, start: Position, actions: &[Action]) -> Option<(Vec<Position>, i64)> {
        let mut path = Vec::with_capacity(actions.len() + 1);
        path.push(start);
        let mut cur = start;
        let mut total = 0;
        for &a in actions {
            let (to, cost) = self.step(cur, a)?;
            total += i64::from(cost);
            path.push(to);
            cur = to;
        }
        Some((path, total))
    }

    fn glyph(&self, p: Position) -> char {
        if self.stores.contains(&p) {
            'S'
        } else if self.destinations.contains(&p) {
            'D'
        } else if self.tunnels.iter().any(|t| t.a == p || t.b == p) {
            'T'
        } else {
            '.'
        }
    }
}

/// ASCII map: each cell glyph is followed by its right-edge cost, and each
/// row by a line of down-edge costs. Missing edges print as `X`.
impl fmt::Display for GridModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edge = |cost: i32| {
            if cost > 0 {
                cost.to_string()
            } else {
                "X".to_string()
            }
        };
        for r in 0..self.rows {
            for c in 0..self.cols {
                let p = Position::new(r, c);
                write!(f, "{}", self.glyph(p))?;
                if c + 1 < self.cols {
                    write!(f, "-{}>", edge(self.right_cost(p)))?;
                }
            }
            writeln!(f)?;
            if r + 1 == self.rows {
                break;
            }
            for c in 0..self.cols {
                write!(f, "{:<4}", edge(self.down_cost(Position::new(r, c))))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridBuilder
// ---------------------------------------------------------------------------

/// Validating builder for [`GridModel`].
///
/// All edges start absent (cost 0).
#[derive(Debug, Clone)]
pub struct GridBuilder {
    grid: GridModel,
}

impl GridBuilder {
    /// Create a builder for a `rows` x `cols` grid with no edges.
    ///
    /// Both dimensions must be positive and the cell count at most
    /// [`GridModel::MAX_CELLS`].
    pub fn new(rows: i32, cols: i32) -> Result<Self, ParseError> {
        let len = (rows > 0 && cols > 0)
            .then(|| rows.checked_mul(cols))
            .flatten()
            .map(|n| n as usize)
            .filter(|&n| n <= GridModel::MAX_CELLS)
            .ok_or(ParseError::InvalidDimensions { rows, cols })?;
        Ok(Self {
            grid: GridModel {
                rows,
                cols,
                right: vec![0; len],
                down: vec![0; len],
                tunnels: Vec::new(),
                stores: Vec::new(),
                destinations: Vec::new(),
            },
        })
    }

    fn checked(&self, field: &'static str, p: Position) -> Result<usize, ParseError> {
        self.grid
            .idx(p)
            .ok_or(ParseError::OutOfBounds { field, pos: p })
    }

    /// Set every in-grid edge to `cost`.
    pub fn fill(&mut self, cost: i32) -> &mut Self {
        for i in 0..self.grid.len() {
            let p = self.grid.point(i);
            if p.col + 1 < self.grid.cols {
                self.grid.right[i] = cost;
            }
            if p.row + 1 < self.grid.rows {
                self.grid.down[i] = cost;
            }
        }
        self
    }

    /// Set the cost of the edge joining two neighbouring cells, in either
    /// order. A cost of 0 removes the edge.
    pub fn edge(&mut self, a: Position, b: Position, cost: i32) -> Result<&mut Self, ParseError> {
        let entry = || format!("{a},{b},{cost}");
        self.checked("traffic", a)?;
        self.checked("traffic", b)?;
        if cost < 0 {
            return Err(ParseError::NegativeCost { entry: entry() });
        }
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let i = self.checked("traffic", lo)?;
        if hi == lo.shift(0, 1) {
            self.grid.right[i] = cost;
        } else if hi == lo.shift(1, 0) {
            self.grid.down[i] = cost;
        } else {
            return Err(ParseError::NotAdjacent { entry: entry() });
        }
        Ok(self)
    }

    /// Add a tunnel between two distinct in-grid cells.
    pub fn tunnel(&mut self, a: Position, b: Position) -> Result<&mut Self, ParseError> {
        self.checked("tunnel", a)?;
        self.checked("tunnel", b)?;
        if a == b {
            return Err(ParseError::DegenerateTunnel { pos: a });
        }
        self.grid.tunnels.push(Tunnel::new(a, b));
        Ok(self)
    }

    /// Add a store cell.
    pub fn store(&mut self, p: Position) -> Result<&mut Self, ParseError> {
        self.checked("store", p)?;
        self.grid.stores.push(p);
        Ok(self)
    }

    /// Add a destination cell.
    pub fn destination(&mut self, p: Position) -> Result<&mut Self, ParseError> {
        self.checked("destination", p)?;
        self.grid.destinations.push(p);
        Ok(self)
    }

    /// Finish building.
    pub fn build(&self) -> GridModel {
        self.grid.clone()
    }
}
