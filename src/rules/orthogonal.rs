//! Rule 1 ("23-ecke"): closed polygon whose edges alternate between
//! horizontal and vertical

use crate::canvas::Surface;
use crate::io::error::Result;
use crate::io::parameters::RuleParameters;
use crate::math::sampling::Sampler;
use crate::rules::{CellRule, sample_point, validate_vertices};
use crate::spatial::geometry::Point;
use crate::spatial::grid::Cell;

/// Default vertex count
pub const DEFAULT_VERTICES: usize = 23;

/// Closed polygon with axis-locked vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrthogonalPolygonRule {
    /// Vertex count (`p`), at least 3
    pub vertices: usize,
}

impl Default for OrthogonalPolygonRule {
    fn default() -> Self {
        Self {
            vertices: DEFAULT_VERTICES,
        }
    }
}

impl OrthogonalPolygonRule {
    /// Create the rule
    ///
    /// # Errors
    ///
    /// Returns an error if `vertices < 3`
    pub fn new(vertices: usize) -> Result<Self> {
        validate_vertices(vertices).map(|vertices| Self { vertices })
    }

    /// Read `p` from the parameter map
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is not an integer of at least 3
    pub fn from_parameters(parameters: &RuleParameters) -> Result<Self> {
        Self::new(parameters.count("p", DEFAULT_VERTICES)?)
    }
}

impl CellRule for OrthogonalPolygonRule {
    fn draw<S: Surface>(&self, cell: &Cell, sampler: &mut Sampler, surface: &mut S) -> Result<()> {
        let orientation = sampler.orientation();
        let start = sample_point(sampler, cell);
        surface.move_to(start);

        let mut last = start;
        for step in 0..self.vertices - 2 {
            let next = if orientation.moves_y(step) {
                Point::new(last.x, sampler.sample(cell.height))
            } else {
                Point::new(sampler.sample(cell.width), last.y)
            };
            surface.line_to(next);
            last = next;
        }

        // Turn the corner on the axis the last step did not use
        let corner = if orientation.moves_y(self.vertices - 3) {
            Point::new(start.x, last.y)
        } else {
            Point::new(last.x, start.y)
        };
        surface.line_to(corner);
        surface.line_to(start);
        surface.stroke();
        Ok(())
    }

    fn marks_per_cell(&self) -> usize {
        1
    }
}
