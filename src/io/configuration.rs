//! Generation constants, runtime defaults and the validated configuration record

use crate::io::error::{Result, invalid_parameter};
use crate::math::sampling::Distribution;
use crate::spatial::grid::GridShape;

// Default values for configurable parameters
/// Default rule index
pub const DEFAULT_RULE: i64 = 0;

/// Default cell width in pixels
pub const DEFAULT_WIDTH: u32 = 64;

/// Default cell height in pixels
pub const DEFAULT_HEIGHT: u32 = 64;

/// Default grid repetition along each axis
pub const DEFAULT_GRID: (usize, usize) = (16, 16);

/// Default padding as a fraction of the cell size
pub const DEFAULT_PADDING: f64 = 0.1;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 2106;

/// Default stroke width (the default line width of the vector backend)
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

// Bounds runaway rejection loops for degenerate step lengths
/// Maximum draws a single rejection loop may take
pub const MAX_REJECTION_ATTEMPTS: usize = 1_000_000;

// Sampling constants
/// Mean of the normal distribution
pub const NORMAL_MEAN: f64 = 0.5;
/// Standard deviation of the normal distribution
pub const NORMAL_STD_DEV: f64 = 0.5 / 3.0;
/// Mixed into the seed to derive the orientation stream
pub const ORIENTATION_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Surface colors
/// Background fill
pub const BACKGROUND_COLOR: &str = "white";
/// Stroke color
pub const STROKE_COLOR: &str = "black";

/// Validated, immutable settings shared by every cell of a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Configuration {
    /// Grid repetition
    pub grid: GridShape,
    /// Cell width
    pub width: f64,
    /// Cell height
    pub height: f64,
    /// Fraction of each cell edge excluded from sampling, in `[0, 0.5)`
    pub padding: f64,
    /// Seed of the random source
    pub seed: u64,
    /// Distribution of raw draws
    pub distribution: Distribution,
    /// Stroke width of every mark
    pub stroke_width: f64,
    /// Cap on draws per rejection loop
    pub max_rejection_attempts: usize,
}

impl Configuration {
    /// Create and validate a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either grid dimension is zero
    /// - Width or height is not a positive finite number
    /// - Padding is outside `[0, 0.5)`
    pub fn new(
        grid: GridShape,
        width: f64,
        height: f64,
        padding: f64,
        seed: u64,
        distribution: Distribution,
    ) -> Result<Self> {
        if grid.columns == 0 || grid.rows == 0 {
            return Err(invalid_parameter(
                "n",
                &grid,
                &"grid dimensions must be positive",
            ));
        }
        validate_length("width", width)?;
        validate_length("height", height)?;
        if !(0.0..0.5).contains(&padding) {
            return Err(invalid_parameter(
                "padding",
                &padding,
                &"padding must lie in [0, 0.5)",
            ));
        }

        Ok(Self {
            grid,
            width,
            height,
            padding,
            seed,
            distribution,
            stroke_width: DEFAULT_STROKE_WIDTH,
            max_rejection_attempts: MAX_REJECTION_ATTEMPTS,
        })
    }

    /// Override the stroke width
    ///
    /// # Errors
    ///
    /// Returns an error if the width is not a positive finite number
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Result<Self> {
        validate_length("stroke_width", stroke_width)?;
        self.stroke_width = stroke_width;
        Ok(self)
    }

    /// Override the rejection sampling cap
    ///
    /// # Errors
    ///
    /// Returns an error if the cap is zero
    pub fn with_max_rejection_attempts(mut self, attempts: usize) -> Result<Self> {
        if attempts == 0 {
            return Err(invalid_parameter(
                "max_rejection_attempts",
                &attempts,
                &"at least one draw is required",
            ));
        }
        self.max_rejection_attempts = attempts;
        Ok(self)
    }

    /// Full surface width (`width * n_x`)
    pub const fn surface_width(&self) -> f64 {
        self.width * self.grid.columns as f64
    }

    /// Full surface height (`height * n_y`)
    pub const fn surface_height(&self) -> f64 {
        self.height * self.grid.rows as f64
    }
}

fn validate_length(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid_parameter(
            parameter,
            &value,
            &"must be a positive finite number",
        ))
    }
}
