//! Seeded random grid generation.
//!
//! Produces a [`GridModel`] with random dimensions, tunnels, stores,
//! destinations, blocked edges and traffic costs. Tunnel endpoints, stores
//! and destinations all occupy distinct cells.

use gridroute_core::{GridModel, Position};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

use crate::error::PlanError;

/// Ranges used by [`GridGen`]. All ranges are inclusive.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GenConfig {
    pub rows: (i32, i32),
    pub cols: (i32, i32),
    pub tunnels: (usize, usize),
    pub stores: (usize, usize),
    pub destinations: (usize, usize),
    /// Traffic cost of an open edge.
    pub cost: (i32, i32),
    /// Upper bound on the obstacle count as a fraction of the cell count.
    pub obstacle_fraction: f64,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            rows: (5, 10),
            cols: (5, 10),
            tunnels: (1, 3),
            stores: (1, 3),
            destinations: (1, 10),
            cost: (1, 4),
            obstacle_fraction: 0.25,
        }
    }
}

impl GenConfig {
    /// Check that every range is well formed, that the largest grid fits
    /// within [`GridModel::MAX_CELLS`], and that the smallest grid has room
    /// for the largest number of marked cells.
    pub fn validate(&self) -> Result<(), PlanError> {
        let bad = |msg: &str| Err(PlanError::InvalidConfig(msg.to_string()));
        if self.rows.0 < 1 || self.rows.0 > self.rows.1 {
            return bad("rows");
        }
        if self.cols.0 < 1 || self.cols.0 > self.cols.1 {
            return bad("cols");
        }
        if self.tunnels.0 > self.tunnels.1 {
            return bad("tunnels");
        }
        if self.stores.0 > self.stores.1 {
            return bad("stores");
        }
        if self.destinations.0 > self.destinations.1 {
            return bad("destinations");
        }
        if self.cost.0 < 1 || self.cost.0 > self.cost.1 {
            return bad("cost");
        }
        if !(0.0..=1.0).contains(&self.obstacle_fraction) {
            return bad("obstacle_fraction");
        }
        let cells = |rows: i32, cols: i32| {
            rows.checked_mul(cols)
                .map(|n| n as usize)
                .filter(|&n| n <= GridModel::MAX_CELLS)
        };
        let Some(smallest) = cells(self.rows.0, self.cols.0) else {
            return bad("smallest grid is too large");
        };
        if cells(self.rows.1, self.cols.1).is_none() {
            return bad("largest grid is too large");
        }
        let marked = self
            .tunnels
            .1
            .checked_mul(2)
            .and_then(|n| n.checked_add(self.stores.1))
            .and_then(|n| n.checked_add(self.destinations.1));
        if marked.is_none_or(|m| m > smallest) {
            return bad("too many marked cells for the smallest grid");
        }
        Ok(())
    }
}

/// Random grid generator.
pub struct GridGen<R: Rng> {
    pub rng: R,
    config: GenConfig,
}

impl GridGen<StdRng> {
    /// Generator with a fixed seed; the same seed yields the same grids.
    pub fn seeded(config: GenConfig, seed: u64) -> Result<Self, PlanError> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GridGen<R> {
    pub fn new(config: GenConfig, rng: R) -> Result<Self, PlanError> {
        config.validate()?;
        Ok(Self { rng, config })
    }

    pub fn config(&self) -> &GenConfig {
        &self.config
    }

    /// Generate one grid.
    pub fn generate(&mut self) -> Result<GridModel, PlanError> {
        let cfg = &self.config;
        let rng = &mut self.rng;
        let rows = rng.random_range(cfg.rows.0..=cfg.rows.1);
        let cols = rng.random_range(cfg.cols.0..=cfg.cols.1);
        let n_tunnels = rng.random_range(cfg.tunnels.0..=cfg.tunnels.1);
        let n_stores = rng.random_range(cfg.stores.0..=cfg.stores.1);
        let n_dests = rng.random_range(cfg.destinations.0..=cfg.destinations.1);

        let mut b = GridModel::builder(rows, cols)?;
        let len = (rows * cols) as usize;

        // Marked cells are drawn without replacement.
        let mut free: Vec<Position> = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| Position::new(r, c)))
            .collect();
        for _ in 0..n_tunnels {
            let a = take(rng, &mut free);
            let z = take(rng, &mut free);
            b.tunnel(a, z)?;
        }
        for _ in 0..n_stores {
            b.store(take(rng, &mut free))?;
        }
        for _ in 0..n_dests {
            b.destination(take(rng, &mut free))?;
        }

        let upper = ((len as f64 * cfg.obstacle_fraction) as usize).max(2);
        let n_obstacles = rng.random_range(1..upper);
        let mut right_open = vec![true; len];
        let mut down_open = vec![true; len];
        for _ in 0..n_obstacles {
            let r = rng.random_range(0..rows);
            let c = rng.random_range(0..cols);
            let i = (r * cols + c) as usize;
            if r == rows - 1 {
                right_open[i] = false;
            } else if c == cols - 1 {
                down_open[i] = false;
            } else if rng.random_range(0..2) == 0 {
                right_open[i] = false;
            } else {
                down_open[i] = false;
            }
        }

        for r in 0..rows {
            for c in 0..cols {
                let p = Position::new(r, c);
                let i = (r * cols + c) as usize;
                if c + 1 < cols && right_open[i] {
                    b.edge(p, p.shift(0, 1), rng.random_range(cfg.cost.0..=cfg.cost.1))?;
                }
                if r + 1 < rows && down_open[i] {
                    b.edge(p, p.shift(1, 0), rng.random_range(cfg.cost.0..=cfg.cost.1))?;
                }
            }
        }

        log::debug!(
            "generated {rows}x{cols} grid: {n_tunnels} tunnels, {n_stores} stores, \
             {n_dests} destinations, {n_obstacles} obstacles"
        );
        Ok(b.build())
    }
}

fn take<R: Rng>(rng: &mut R, free: &mut Vec<Position>) -> Position {
    let i = rng.random_range(0..free.len());
    free.swap_remove(i)
}
