//! Random sampling utilities for the drawing rules

/// Seeded random sources, distributions and the clamp-scale sampler
pub mod sampling;

pub use sampling::{Distribution, Orientation, RandomSource, Sampler};
