//! Progress display over the grid cells of a run

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::spatial::grid::Cell;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static CELL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Cells: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar advanced once per drawn cell
pub struct CellProgress {
    bar: ProgressBar,
}

impl CellProgress {
    /// Visible bar for `cell_count` cells
    pub fn new(cell_count: usize) -> Self {
        let bar = ProgressBar::new(cell_count as u64);
        bar.set_style(CELL_STYLE.clone());
        Self { bar }
    }

    /// Bar that draws nothing
    pub fn hidden(cell_count: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(cell_count as u64);
        Self { bar }
    }

    /// Record a finished cell
    pub fn advance(&self, cell: &Cell) {
        self.bar.set_message(format!("({},{})", cell.x, cell.y));
        self.bar.inc(1);
    }

    /// Cells recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
