//! The five drawing rules and their dispatch
//!
//! A [`Rule`] is selected once per run from its index and a parameter map;
//! parameters are validated at that point, before any surface exists. Each
//! rule then draws one grid cell at a time in cell-local coordinates.

use crate::canvas::Surface;
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::io::parameters::RuleParameters;
use crate::math::sampling::Sampler;
use crate::spatial::geometry::Point;
use crate::spatial::grid::Cell;

/// Rule 3: crossed diagonal bursts
pub mod cross;
/// Rule 4: curtain folds
pub mod curtain;
/// Rule 1: closed polygon with axis-locked edges
pub mod orthogonal;
/// Rule 0: closed polygon through unconstrained points
pub mod polygon;
/// Rule 2: bounded axis-aligned walk or rectangles
pub mod walk;

pub use cross::CrossRule;
pub use curtain::CurtainRule;
pub use orthogonal::OrthogonalPolygonRule;
pub use polygon::PolygonRule;
pub use walk::{WalkMode, WalkRule};

/// Behaviour shared by all rules
pub trait CellRule {
    /// Draw one cell in cell-local coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if rejection sampling is exhausted or the surface
    /// state stack is misused
    fn draw<S: Surface>(&self, cell: &Cell, sampler: &mut Sampler, surface: &mut S) -> Result<()>;

    /// Number of marks one cell produces
    fn marks_per_cell(&self) -> usize;
}

/// Closed set of drawing rules with validated parameters
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Rule 0
    Polygon(PolygonRule),
    /// Rule 1
    OrthogonalPolygon(OrthogonalPolygonRule),
    /// Rule 2
    Walk(WalkRule),
    /// Rule 3
    Cross(CrossRule),
    /// Rule 4
    Curtain(CurtainRule),
}

impl Rule {
    /// Build the rule with index `index` from a parameter map
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The index is not in 0..=4
    /// - A parameter has the wrong type or an invalid value
    /// - An option value is outside its set of choices
    pub fn from_parameters(index: i64, parameters: &RuleParameters) -> Result<Self> {
        match index {
            0 => PolygonRule::from_parameters(parameters).map(Self::Polygon),
            1 => OrthogonalPolygonRule::from_parameters(parameters).map(Self::OrthogonalPolygon),
            2 => WalkRule::from_parameters(parameters).map(Self::Walk),
            3 => CrossRule::from_parameters(parameters).map(Self::Cross),
            4 => CurtainRule::from_parameters(parameters).map(Self::Curtain),
            rule => Err(GenerationError::UnimplementedRule { rule }),
        }
    }

    /// Rule index
    pub const fn index(&self) -> i64 {
        match self {
            Self::Polygon(_) => 0,
            Self::OrthogonalPolygon(_) => 1,
            Self::Walk(_) => 2,
            Self::Cross(_) => 3,
            Self::Curtain(_) => 4,
        }
    }

    /// Historical name of the rule
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Polygon(_) => "8-ecke",
            Self::OrthogonalPolygon(_) => "23-ecke",
            Self::Walk(_) => "achsenparalleler irrweg",
            Self::Cross(_) => "andreaskreuz",
            Self::Curtain(_) => "gardine",
        }
    }

    /// Draw one cell
    ///
    /// # Errors
    ///
    /// Propagates the error of the selected rule
    pub fn draw_cell<S: Surface>(
        &self,
        cell: &Cell,
        sampler: &mut Sampler,
        surface: &mut S,
    ) -> Result<()> {
        match self {
            Self::Polygon(rule) => rule.draw(cell, sampler, surface),
            Self::OrthogonalPolygon(rule) => rule.draw(cell, sampler, surface),
            Self::Walk(rule) => rule.draw(cell, sampler, surface),
            Self::Cross(rule) => rule.draw(cell, sampler, surface),
            Self::Curtain(rule) => rule.draw(cell, sampler, surface),
        }
    }

    /// Number of marks one cell produces
    pub fn marks_per_cell(&self) -> usize {
        match self {
            Self::Polygon(rule) => rule.marks_per_cell(),
            Self::OrthogonalPolygon(rule) => rule.marks_per_cell(),
            Self::Walk(rule) => rule.marks_per_cell(),
            Self::Cross(rule) => rule.marks_per_cell(),
            Self::Curtain(rule) => rule.marks_per_cell(),
        }
    }
}

// x is drawn before y
fn sample_point(sampler: &mut Sampler, cell: &Cell) -> Point {
    let x = sampler.sample(cell.width);
    let y = sampler.sample(cell.height);
    Point::new(x, y)
}

fn validate_vertices(vertices: usize) -> Result<usize> {
    if vertices < 3 {
        Err(invalid_parameter("p", &vertices, &"p must be at least 3"))
    } else {
        Ok(vertices)
    }
}
