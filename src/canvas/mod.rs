//! Drawing surface abstraction
//!
//! A [`Surface`] behaves like a small canvas-style context: build a path with
//! `move_to`/`line_to`/`rectangle`, then `stroke` or `fill` it with the current
//! ink. Path coordinates are transformed by the current translation when they
//! are added, so a `save`/`translate`/`restore` scope only affects the points
//! emitted inside it.

use crate::io::error::Result;
use crate::spatial::geometry::Point;

/// In-memory surface recording every mark
pub mod recording;

pub use recording::Canvas;

/// Monochrome inks available to the surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ink {
    /// Stroke color
    #[default]
    Black,
    /// Background color
    White,
}

/// One path command in absolute surface coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Start a new subpath
    MoveTo(Point),
    /// Straight line from the current point
    LineTo(Point),
    /// Close the current subpath
    ClosePath,
}

impl Segment {
    /// Point carried by the command, if any
    pub const fn point(&self) -> Option<Point> {
        match self {
            Self::MoveTo(p) | Self::LineTo(p) => Some(*p),
            Self::ClosePath => None,
        }
    }
}

/// How a finished path is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Outline with the current ink
    Stroke,
    /// Fill the interior with the current ink
    Fill,
}

/// A painted path
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    /// Stroke or fill
    pub operation: Operation,
    /// Ink used
    pub ink: Ink,
    /// Path commands
    pub segments: Vec<Segment>,
}

impl Mark {
    /// All points of the path in order
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.segments.iter().filter_map(Segment::point)
    }

    /// Number of subpaths
    pub fn subpath_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::MoveTo(_)))
            .count()
    }
}

/// Drawing target used by the generator and the rules
pub trait Surface {
    /// Value produced when the surface is finalized
    type Output;

    /// Full surface size (width, height)
    fn dimensions(&self) -> (f64, f64);

    /// Select the ink for subsequent strokes and fills
    fn set_ink(&mut self, ink: Ink);

    /// Start a new subpath at `point`
    fn move_to(&mut self, point: Point);

    /// Add a line from the current point to `point`
    fn line_to(&mut self, point: Point);

    /// Add a closed axis-aligned rectangle subpath
    fn rectangle(&mut self, origin: Point, width: f64, height: f64);

    /// Close the current subpath
    fn close_path(&mut self);

    /// Outline the current path and clear it
    fn stroke(&mut self);

    /// Fill the current path and clear it
    fn fill(&mut self);

    /// Push the current translation and ink
    fn save(&mut self);

    /// Pop the last saved translation and ink
    ///
    /// # Errors
    ///
    /// Returns `UnbalancedRestore` if nothing was saved
    fn restore(&mut self) -> Result<()>;

    /// Move the origin of subsequent path commands by `(dx, dy)`
    fn translate(&mut self, dx: f64, dy: f64);

    /// Flush the surface to its destination
    ///
    /// # Errors
    ///
    /// Returns an error if the destination cannot be written
    fn finish(self) -> Result<Self::Output>;

    /// Run `draw` between a `save` and a `restore`
    ///
    /// The restore happens even when `draw` fails; the draw error wins.
    ///
    /// # Errors
    ///
    /// Returns the error of `draw`, or `UnbalancedRestore` if `draw` popped
    /// the state this scope saved
    fn scoped<T>(&mut self, draw: impl FnOnce(&mut Self) -> Result<T>) -> Result<T>
    where
        Self: Sized,
    {
        self.save();
        let outcome = draw(self);
        let restored = self.restore();
        let value = outcome?;
        restored?;
        Ok(value)
    }

    /// Fill the whole surface with `ink`
    fn paint(&mut self, ink: Ink)
    where
        Self: Sized,
    {
        let (width, height) = self.dimensions();
        self.set_ink(ink);
        self.rectangle(Point::default(), width, height);
        self.fill();
    }
}
