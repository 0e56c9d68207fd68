//! **gridroute-core**: the shared data model for delivery-route planning.
//!
//! This crate provides the foundational types used across the *gridroute*
//! workspace: grid positions and moves, the immutable traffic-weighted
//! [`GridModel`] with its tunnels, stores and destinations, and the codec for
//! the layout/traffic wire strings.

pub mod codec;
pub mod error;
pub mod geom;
pub mod grid;

pub use error::ParseError;
pub use geom::{Action, Position};
pub use grid::{GridBuilder, GridModel, Tunnel};
