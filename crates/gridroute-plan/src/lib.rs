//! **gridroute-plan**: multi-source delivery planning.
//!
//! A [`Planner`] runs one [`Strategy`](gridroute_paths::Strategy) from every
//! store of a [`GridModel`](gridroute_core::GridModel) to each destination
//! and keeps the cheapest route per destination. Results render to the
//! `start;actions;cost;expanded` wire lines via `Display`.
//!
//! [`GridGen`] produces seeded random grids for experiments and tests.

pub mod error;
pub mod gridgen;
pub mod planner;
pub mod report;

pub use error::PlanError;
pub use gridgen::{GenConfig, GridGen};
pub use planner::Planner;
pub use report::{DeliveryPlan, DestinationPlan, StoreAttempt};
