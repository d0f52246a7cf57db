//! Spatial data structures for the tiled output
//!
//! This module contains:
//! - Grid shape and cell iteration
//! - Plane points and angle helpers

/// Plane points and polar helpers
pub mod geometry;
/// Grid shape and per-cell offsets
pub mod grid;

pub use geometry::Point;
pub use grid::{Cell, GridShape};
