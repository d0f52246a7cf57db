//! Grid of sub-canvases tiling the output image
//!
//! The output is an `n_x` by `n_y` arrangement of equally sized cells. Every
//! rule draws in cell-local coordinates; the generator translates each cell
//! to its offset on the full surface.

use std::fmt;
use std::str::FromStr;

use crate::io::error::{GenerationError, malformed};
use crate::spatial::geometry::Point;

/// Number of cells along each axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    /// Cells along x (`n_x`)
    pub columns: usize,
    /// Cells along y (`n_y`)
    pub rows: usize,
}

impl GridShape {
    /// Create a grid shape
    pub const fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Iterate cells in drawing order: outer loop over x, inner loop over y
    ///
    /// This order fixes how the random stream is consumed, so it must not change.
    pub fn cells(&self, width: f64, height: f64) -> impl Iterator<Item = Cell> + use<> {
        let rows = self.rows;
        (0..self.columns)
            .flat_map(move |x| (0..rows).map(move |y| (x, y)))
            .map(move |(x, y)| Cell::new(x, y, width, height))
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.columns, self.rows)
    }
}

/// Parses `"(16,16)"` or `"16,16"`
impl FromStr for GridShape {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let mut parts = inner.split(',').map(str::trim);

        let (Some(columns), Some(rows), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed(
                s,
                &"dimensions must be two integers separated by a comma, e.g. \"(16,16)\"",
            ));
        };

        let columns = columns
            .parse::<usize>()
            .map_err(|e| malformed(s, &format!("invalid column count: {e}")))?;
        let rows = rows
            .parse::<usize>()
            .map_err(|e| malformed(s, &format!("invalid row count: {e}")))?;

        Ok(Self::new(columns, rows))
    }
}

/// One sub-rectangle of the output grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
    /// Cell width
    pub width: f64,
    /// Cell height
    pub height: f64,
}

impl Cell {
    /// Create the cell at grid index `(x, y)`
    pub const fn new(x: usize, y: usize, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner of the cell on the full surface
    pub const fn offset(&self) -> Point {
        Point::new(self.x as f64 * self.width, self.y as f64 * self.height)
    }

    /// Cell center in cell-local coordinates
    pub const fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Grid index as a tuple
    pub const fn index(&self) -> (usize, usize) {
        (self.x, self.y)
    }
}
