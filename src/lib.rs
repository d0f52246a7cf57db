//! Procedural line art after the 1965 plotter rules of Georg Nees
//!
//! One of five rules is drawn into every cell of an `n_x` by `n_y` grid. All
//! coordinates come from a single seeded stream, clamped into the padded cell
//! area, so a seed and a parameter set always produce the same image.

#![forbid(unsafe_code)]

/// Generation driver owning the surface and the random stream
pub mod algorithm;
/// Drawing surface abstraction and the in-memory canvas
pub mod canvas;
/// Input/output operations and error handling
pub mod io;
/// Random sources and the clamp-scale sampler
pub mod math;
/// The five drawing rules
pub mod rules;
/// Grid cells and plane geometry
pub mod spatial;

pub use io::error::{GenerationError, Result};
