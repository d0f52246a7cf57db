//! Rule 2 ("achsenparalleler irrweg"): bounded axis-aligned random walk,
//! or bounded random rectangles
//!
//! Each new coordinate is redrawn until it lies within `l` times the axis
//! length of its reference value. Very small `l` makes acceptance rare; the
//! sampler's retry cap turns a would-be hang into `SamplingExhausted`.

use std::fmt;
use std::str::FromStr;

use crate::canvas::Surface;
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::io::parameters::RuleParameters;
use crate::math::sampling::Sampler;
use crate::rules::{CellRule, sample_point};
use crate::spatial::geometry::Point;
use crate::spatial::grid::Cell;

/// Default number of steps or rectangles per cell
pub const DEFAULT_STEPS: usize = 2048;

/// Default maximum step as a fraction of the axis length
pub const DEFAULT_STEP_LENGTH: f64 = 0.1;

/// What the walk draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkMode {
    /// One open polyline of short axis-aligned hops
    #[default]
    Line,
    /// Independent small rectangles
    Rectangle,
}

impl fmt::Display for WalkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line => f.write_str("line"),
            Self::Rectangle => f.write_str("rectangle"),
        }
    }
}

impl FromStr for WalkMode {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "line" => Ok(Self::Line),
            "rectangle" => Ok(Self::Rectangle),
            other => Err(GenerationError::UnimplementedOption {
                parameter: "mode",
                value: other.to_string(),
            }),
        }
    }
}

/// Bounded walk or rectangles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkRule {
    /// Steps (line) or rectangles (rectangle) per cell (`p`)
    pub steps: usize,
    /// Maximum delta as a fraction of the axis length (`l`)
    pub step_length: f64,
    /// Drawing mode (`mode`)
    pub mode: WalkMode,
}

impl Default for WalkRule {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            step_length: DEFAULT_STEP_LENGTH,
            mode: WalkMode::default(),
        }
    }
}

impl WalkRule {
    /// Create the rule
    ///
    /// # Errors
    ///
    /// Returns an error if `step_length` is negative or not finite
    pub fn new(steps: usize, step_length: f64, mode: WalkMode) -> Result<Self> {
        if !step_length.is_finite() || step_length < 0.0 {
            return Err(invalid_parameter(
                "l",
                &step_length,
                &"step length must be a non-negative fraction",
            ));
        }
        Ok(Self {
            steps,
            step_length,
            mode,
        })
    }

    /// Read `p`, `l` and `mode` from the parameter map
    ///
    /// # Errors
    ///
    /// Returns an error if a value has the wrong type, `l` is negative, or
    /// `mode` is neither `line` nor `rectangle`
    pub fn from_parameters(parameters: &RuleParameters) -> Result<Self> {
        let mode = parameters
            .text("mode", &WalkMode::default().to_string())
            .parse::<WalkMode>()?;
        Self::new(
            parameters.count("p", DEFAULT_STEPS)?,
            parameters.number("l", DEFAULT_STEP_LENGTH)?,
            mode,
        )
    }

    fn draw_line<S: Surface>(&self, cell: &Cell, sampler: &mut Sampler, surface: &mut S) -> Result<()> {
        let orientation = sampler.orientation();
        let x_bound = self.step_length * cell.width;
        let y_bound = self.step_length * cell.height;

        let start = sample_point(sampler, cell);
        surface.move_to(start);

        let mut last = start;
        for step in 0..self.steps {
            let next = if orientation.moves_y(step) {
                let y = sampler.sample_within(cell.height, last.y, y_bound, "walk step")?;
                Point::new(last.x, y)
            } else {
                let x = sampler.sample_within(cell.width, last.x, x_bound, "walk step")?;
                Point::new(x, last.y)
            };
            surface.line_to(next);
            last = next;
        }
        surface.stroke();
        Ok(())
    }

    fn draw_rectangles<S: Surface>(
        &self,
        cell: &Cell,
        sampler: &mut Sampler,
        surface: &mut S,
    ) -> Result<()> {
        let x_bound = self.step_length * cell.width;
        let y_bound = self.step_length * cell.height;

        for _ in 0..self.steps {
            let start = sample_point(sampler, cell);
            let end_x = sampler.sample_within(cell.width, start.x, x_bound, "rectangle width")?;
            let end_y = sampler.sample_within(cell.height, start.y, y_bound, "rectangle height")?;

            let (x0, x1) = ordered(start.x, end_x);
            let (y0, y1) = ordered(start.y, end_y);
            surface.rectangle(Point::new(x0, y0), x1 - x0, y1 - y0);
            surface.stroke();
        }
        Ok(())
    }
}

const fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a > b { (b, a) } else { (a, b) }
}

impl CellRule for WalkRule {
    fn draw<S: Surface>(&self, cell: &Cell, sampler: &mut Sampler, surface: &mut S) -> Result<()> {
        match self.mode {
            WalkMode::Line => self.draw_line(cell, sampler, surface),
            WalkMode::Rectangle => self.draw_rectangles(cell, sampler, surface),
        }
    }

    fn marks_per_cell(&self) -> usize {
        match self.mode {
            WalkMode::Line => 1,
            WalkMode::Rectangle => self.steps,
        }
    }
}
