//! SVG export of the drawing surface
//!
//! The surface records marks on a [`Canvas`] and serializes them into a
//! single document when finished: a white background rectangle followed by one
//! `<path>` per stroke.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use svg::Document;
use svg::node::element::Path as SvgPath;
use svg::node::element::path::Data;

use crate::canvas::{Canvas, Ink, Mark, Operation, Segment, Surface};
use crate::io::configuration::{BACKGROUND_COLOR, DEFAULT_STROKE_WIDTH, STROKE_COLOR};
use crate::io::error::{GenerationError, Result};
use crate::spatial::geometry::Point;

/// Surface writing an SVG document to `W` on [`Surface::finish`]
pub struct SvgSurface<W: Write> {
    canvas: Canvas,
    writer: W,
    destination: PathBuf,
    stroke_width: f64,
}

impl SvgSurface<BufWriter<File>> {
    /// Create the output file and a surface writing into it
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or the file cannot be created
    pub fn create(path: &Path, width: f64, height: f64) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = File::create(path).map_err(|e| GenerationError::FileSystem {
            path: path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        Ok(Self::new(BufWriter::new(file), path, width, height))
    }
}

impl<W: Write> SvgSurface<W> {
    /// Wrap an arbitrary writer; `destination` is only used in error messages
    pub fn new(writer: W, destination: impl Into<PathBuf>, width: f64, height: f64) -> Self {
        Self {
            canvas: Canvas::new(width, height),
            writer,
            destination: destination.into(),
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }

    /// Set the width of every stroke
    #[must_use]
    pub const fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Marks recorded so far
    pub fn marks(&self) -> &[Mark] {
        self.canvas.marks()
    }

    /// Build the document for the marks recorded so far
    pub fn document(&self) -> Document {
        let (width, height) = self.canvas.dimensions();
        render_document(self.canvas.marks(), width, height, self.stroke_width)
    }
}

/// Serialize marks into an SVG document of the given size
pub fn render_document(marks: &[Mark], width: f64, height: f64, stroke_width: f64) -> Document {
    marks.iter().fold(
        Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0.0, 0.0, width, height)),
        |document, mark| document.add(mark_to_path(mark, stroke_width)),
    )
}

/// SVG color name of an ink
pub const fn color(ink: Ink) -> &'static str {
    match ink {
        Ink::Black => STROKE_COLOR,
        Ink::White => BACKGROUND_COLOR,
    }
}

fn mark_to_path(mark: &Mark, stroke_width: f64) -> SvgPath {
    let data = mark
        .segments
        .iter()
        .fold(Data::new(), |data, segment| match *segment {
            Segment::MoveTo(Point { x, y }) => data.move_to((x, y)),
            Segment::LineTo(Point { x, y }) => data.line_to((x, y)),
            Segment::ClosePath => data.close(),
        });

    let path = SvgPath::new().set("d", data);
    match mark.operation {
        Operation::Stroke => path
            .set("fill", "none")
            .set("stroke", color(mark.ink))
            .set("stroke-width", stroke_width),
        Operation::Fill => path.set("fill", color(mark.ink)).set("stroke", "none"),
    }
}

impl<W: Write> Surface for SvgSurface<W> {
    type Output = W;

    fn dimensions(&self) -> (f64, f64) {
        self.canvas.dimensions()
    }

    fn set_ink(&mut self, ink: Ink) {
        self.canvas.set_ink(ink);
    }

    fn move_to(&mut self, point: Point) {
        self.canvas.move_to(point);
    }

    fn line_to(&mut self, point: Point) {
        self.canvas.line_to(point);
    }

    fn rectangle(&mut self, origin: Point, width: f64, height: f64) {
        self.canvas.rectangle(origin, width, height);
    }

    fn close_path(&mut self) {
        self.canvas.close_path();
    }

    fn stroke(&mut self) {
        self.canvas.stroke();
    }

    fn fill(&mut self) {
        self.canvas.fill();
    }

    fn save(&mut self) {
        self.canvas.save();
    }

    fn restore(&mut self) -> Result<()> {
        self.canvas.restore()
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.canvas.translate(dx, dy);
    }

    fn finish(mut self) -> Result<W> {
        let document = self.document();
        svg::write(&mut self.writer, &document)
            .and_then(|()| self.writer.flush())
            .map_err(|source| GenerationError::SvgExport {
                path: self.destination.clone(),
                source,
            })?;
        Ok(self.writer)
    }
}
