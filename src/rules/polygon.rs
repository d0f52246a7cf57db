//! Rule 0 ("8-ecke"): closed polygon through independent random points

use crate::canvas::Surface;
use crate::io::error::Result;
use crate::io::parameters::RuleParameters;
use crate::math::sampling::Sampler;
use crate::rules::{CellRule, sample_point, validate_vertices};
use crate::spatial::grid::Cell;

/// Default vertex count
pub const DEFAULT_VERTICES: usize = 8;

/// Polygon whose vertices are sampled with no constraint between them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolygonRule {
    /// Vertex count (`p`), at least 3
    pub vertices: usize,
}

impl Default for PolygonRule {
    fn default() -> Self {
        Self {
            vertices: DEFAULT_VERTICES,
        }
    }
}

impl PolygonRule {
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

impl CellRule for PolygonRule {
    fn draw<S: Surface>(&self, cell: &Cell, sampler: &mut Sampler, surface: &mut S) -> Result<()> {
        let start = sample_point(sampler, cell);
        surface.move_to(start);
        for _ in 1..self.vertices {
            let vertex = sample_point(sampler, cell);
            surface.line_to(vertex);
        }
        surface.line_to(start);
        surface.stroke();
        Ok(())
    }

    fn marks_per_cell(&self) -> usize {
        1
    }
}
