//! Rule 4 ("gardine"): horizontal lines bunching towards the midline from
//! both halves of the cell

use crate::canvas::Surface;
use crate::io::error::Result;
use crate::io::parameters::RuleParameters;
use crate::math::sampling::Sampler;
use crate::rules::CellRule;
use crate::spatial::geometry::Point;
use crate::spatial::grid::Cell;

/// Default lines per half
pub const DEFAULT_LINES: usize = 64;

/// Curtain fold pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurtainRule {
    /// Lines per half (`p`)
    pub lines: usize,
}

impl Default for CurtainRule {
    fn default() -> Self {
        Self {
            lines: DEFAULT_LINES,
        }
    }
}

impl CurtainRule {
    /// Read `p` from the parameter map
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is not a non-negative integer
    pub fn from_parameters(parameters: &RuleParameters) -> Result<Self> {
        Ok(Self {
            lines: parameters.count("p", DEFAULT_LINES)?,
        })
    }

    // |y| lies in [0, height * (0.5 - padding)]
    fn sample_fold(sampler: &mut Sampler, height: f64) -> f64 {
        (height * (sampler.clamped() - 0.5)).abs()
    }
}

fn horizontal<S: Surface>(surface: &mut S, left: f64, right: f64, level: f64) {
    surface.move_to(Point::new(left, level));
    surface.line_to(Point::new(right, level));
    surface.stroke();
}

impl CellRule for CurtainRule {
    fn draw<S: Surface>(&self, cell: &Cell, sampler: &mut Sampler, surface: &mut S) -> Result<()> {
        let padding = sampler.padding();
        let height = cell.height;
        let left = padding * cell.width;
        let right = padding.mul_add(-cell.width, cell.width);

        for _ in 0..self.lines {
            let fold = Self::sample_fold(sampler, height);
            surface.scoped(|s| {
                s.translate(0.0, height * (0.5 - padding));
                horizontal(s, left, right, height / 2.0 - fold);
                Ok(())
            })?;
        }

        for _ in 0..self.lines {
            let fold = Self::sample_fold(sampler, height);
            surface.scoped(|s| {
                s.translate(0.0, -height * 0.5);
                horizontal(s, left, right, height.mul_add(padding, height / 2.0 + fold));
                Ok(())
            })?;
        }
        Ok(())
    }

    fn marks_per_cell(&self) -> usize {
        2 * self.lines
    }
}
