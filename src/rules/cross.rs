//! Rule 3 ("andreaskreuz"): crossed bursts of near-diameter chords

use crate::canvas::Surface;
use crate::io::error::{Result, invalid_parameter};
use crate::io::parameters::RuleParameters;
use crate::math::sampling::Sampler;
use crate::rules::CellRule;
use crate::spatial::geometry::Point;
use crate::spatial::grid::Cell;

/// Default number of bursts per cell
pub const DEFAULT_BURSTS: usize = 48;
/// Default base angle in degrees
pub const DEFAULT_ANGLE: f64 = 60.0;
/// Default angle between the two arms in degrees
pub const DEFAULT_ROTATION: f64 = 60.0;
/// Default angular jitter as a fraction of 180 degrees
pub const DEFAULT_JITTER: f64 = 0.3;
/// Default minimum radius fraction
pub const DEFAULT_MIN_RADIUS: f64 = 0.3;

/// Two arms of chords through the cell center, each end wobbling in angle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossRule {
    /// Repetitions per cell (`p`)
    pub bursts: usize,
    /// Angle of the first arm in degrees (`a`)
    pub angle: f64,
    /// Offset of the second arm in degrees (`r`)
    pub rotation: f64,
    /// Jitter width as a fraction of 180 degrees (`w`)
    pub jitter: f64,
    /// Minimum radius fraction (`l`); chords are at least `l / 2` of the
    /// maximum radius long on each side
    pub min_radius: f64,
}

impl Default for CrossRule {
    fn default() -> Self {
        Self {
            bursts: DEFAULT_BURSTS,
            angle: DEFAULT_ANGLE,
            rotation: DEFAULT_ROTATION,
            jitter: DEFAULT_JITTER,
            min_radius: DEFAULT_MIN_RADIUS,
        }
    }
}

impl CrossRule {
    /// Read `p`, `a`, `r`, `w` and `l` from the parameter map
    ///
    /// # Errors
    ///
    /// Returns an error if a value has the wrong type or is not finite
    pub fn from_parameters(parameters: &RuleParameters) -> Result<Self> {
        let rule = Self {
            bursts: parameters.count("p", DEFAULT_BURSTS)?,
            angle: finite("a", parameters.number("a", DEFAULT_ANGLE)?)?,
            rotation: finite("r", parameters.number("r", DEFAULT_ROTATION)?)?,
            jitter: finite("w", parameters.number("w", DEFAULT_JITTER)?)?,
            min_radius: finite("l", parameters.number("l", DEFAULT_MIN_RADIUS)?)?,
        };
        Ok(rule)
    }
}

fn finite(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid_parameter(parameter, &value, &"must be finite"))
    }
}

impl CellRule for CrossRule {
    fn draw<S: Surface>(&self, cell: &Cell, sampler: &mut Sampler, surface: &mut S) -> Result<()> {
        let max_radius = cell.width.min(cell.height) / 2.0;
        let min_radius = max_radius * (self.min_radius / 2.0);
        let spread = 90.0 * self.jitter;
        let center = cell.center();

        for _ in 0..self.bursts {
            for arm in [0.0, self.rotation] {
                let radius = sampler.sample_at_least(max_radius, min_radius, "burst radius")?;

                let start_angle = arm + self.angle + spread * (sampler.unit() - 0.5);
                surface.move_to(center + Point::polar(radius, start_angle));

                let end_angle = arm + self.angle + 180.0 + spread * (sampler.unit() - 0.5);
                surface.line_to(center + Point::polar(radius, end_angle));
                surface.stroke();
            }
        }
        Ok(())
    }

    fn marks_per_cell(&self) -> usize {
        2 * self.bursts
    }
}
