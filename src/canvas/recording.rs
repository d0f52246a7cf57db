//! In-memory canvas keeping every mark in absolute coordinates
//!
//! Serves as the drawing state behind the SVG writer and as an inspectable
//! surface for checking geometry directly.

use crate::canvas::{Ink, Mark, Operation, Segment, Surface};
use crate::io::error::{GenerationError, Result};
use crate::spatial::geometry::Point;

#[derive(Debug, Clone, Copy, Default)]
struct State {
    translation: Point,
    ink: Ink,
}

/// Recording surface
#[derive(Debug, Clone)]
pub struct Canvas {
    width: f64,
    height: f64,
    state: State,
    stack: Vec<State>,
    path: Vec<Segment>,
    subpath_start: Option<Point>,
    marks: Vec<Mark>,
}

impl Canvas {
    /// Create an empty canvas of the given size
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            state: State {
                translation: Point::new(0.0, 0.0),
                ink: Ink::Black,
            },
            stack: Vec::new(),
            path: Vec::new(),
            subpath_start: None,
            marks: Vec::new(),
        }
    }

    /// Marks painted so far
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Marks painted with [`Operation::Stroke`]
    pub fn strokes(&self) -> impl Iterator<Item = &Mark> {
        self.marks
            .iter()
            .filter(|m| m.operation == Operation::Stroke)
    }

    /// Current translation
    pub const fn translation(&self) -> Point {
        self.state.translation
    }

    /// Depth of the saved-state stack
    pub const fn saved_depth(&self) -> usize {
        self.stack.len()
    }

    /// Consume the canvas and return its marks
    pub fn into_marks(self) -> Vec<Mark> {
        self.marks
    }

    fn transform(&self, point: Point) -> Point {
        point + self.state.translation
    }

    fn paint_path(&mut self, operation: Operation) {
        if self.path.is_empty() {
            return;
        }
        let segments = std::mem::take(&mut self.path);
        self.subpath_start = None;
        self.marks.push(Mark {
            operation,
            ink: self.state.ink,
            segments,
        });
    }
}

impl Surface for Canvas {
    type Output = Vec<Mark>;

    fn dimensions(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn set_ink(&mut self, ink: Ink) {
        self.state.ink = ink;
    }

    fn move_to(&mut self, point: Point) {
        let point = self.transform(point);
        self.subpath_start = Some(point);
        self.path.push(Segment::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        let point = self.transform(point);
        // A line without a current point starts the subpath there
        if self.subpath_start.is_none() {
            self.subpath_start = Some(point);
            self.path.push(Segment::MoveTo(point));
        } else {
            self.path.push(Segment::LineTo(point));
        }
    }

    fn rectangle(&mut self, origin: Point, width: f64, height: f64) {
        self.move_to(origin);
        self.line_to(origin.offset(width, 0.0));
        self.line_to(origin.offset(width, height));
        self.line_to(origin.offset(0.0, height));
        self.close_path();
    }

    fn close_path(&mut self) {
        if self.subpath_start.is_some() {
            self.path.push(Segment::ClosePath);
        }
    }

    fn stroke(&mut self) {
        self.paint_path(Operation::Stroke);
    }

    fn fill(&mut self) {
        self.paint_path(Operation::Fill);
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) -> Result<()> {
        self.state = self.stack.pop().ok_or(GenerationError::UnbalancedRestore)?;
        Ok(())
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.state.translation = self.state.translation.offset(dx, dy);
    }

    fn finish(self) -> Result<Vec<Mark>> {
        Ok(self.marks)
    }
}
