//! Generation driver: shared setup, the per-cell loop and finalization

use log::{debug, info, warn};

use crate::canvas::{Ink, Surface};
use crate::io::configuration::Configuration;
use crate::io::error::{Result, WithContext};
use crate::math::sampling::{RandomSource, Sampler};
use crate::rules::Rule;
use crate::spatial::grid::Cell;

/// Owns the surface and the random stream for one run
///
/// The surface is painted white and the ink set to black on construction.
/// [`PatternGenerator::generate`] consumes the generator, so the surface is
/// finalized exactly once, on success and on failure alike.
pub struct PatternGenerator<S: Surface> {
    config: Configuration,
    sampler: Sampler,
    surface: S,
}

impl<S: Surface> PatternGenerator<S> {
    /// Prepare a run on `surface`
    ///
    /// # Errors
    ///
    /// Returns an error if the random source cannot be constructed
    pub fn new(config: Configuration, mut surface: S) -> Result<Self> {
        let source = RandomSource::new(config.seed, config.distribution)?;
        let sampler = Sampler::new(source, config.padding, config.max_rejection_attempts);

        surface.paint(Ink::White);
        surface.set_ink(Ink::Black);

        Ok(Self {
            config,
            sampler,
            surface,
        })
    }

    /// Configuration of this run
    pub const fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Draw every cell with `rule`, then finalize the surface
    ///
    /// # Errors
    ///
    /// Returns the first drawing error (after finalizing the partial drawing),
    /// or the finalization error
    pub fn generate(self, rule: &Rule) -> Result<S::Output> {
        self.generate_with(rule, |_| {})
    }

    /// Like [`PatternGenerator::generate`], calling `on_cell` after each cell
    ///
    /// # Errors
    ///
    /// Returns the first drawing error (after finalizing the partial drawing),
    /// or the finalization error
    pub fn generate_with(
        mut self,
        rule: &Rule,
        mut on_cell: impl FnMut(&Cell),
    ) -> Result<S::Output> {
        info!(
            "rule {} ({}) on grid {} of {}x{} cells, seed {}, {} distribution, padding {}",
            rule.index(),
            rule.name(),
            self.config.grid,
            self.config.width,
            self.config.height,
            self.config.seed,
            self.config.distribution,
            self.config.padding
        );

        match self.draw_cells(rule, &mut on_cell) {
            Ok(()) => self.surface.finish(),
            Err(error) => {
                if let Err(finish_error) = self.surface.finish() {
                    warn!("finalizing after failed generation also failed: {finish_error}");
                }
                Err(error)
            }
        }
    }

    fn draw_cells(&mut self, rule: &Rule, on_cell: &mut impl FnMut(&Cell)) -> Result<()> {
        let sampler = &mut self.sampler;
        for cell in self.config.grid.cells(self.config.width, self.config.height) {
            debug!("cell {},{}", cell.x, cell.y);
            let offset = cell.offset();
            self.surface
                .scoped(|s| {
                    s.translate(offset.x, offset.y);
                    rule.draw_cell(&cell, sampler, s)
                })
                .with_cell(cell.index())?;
            on_cell(&cell);
        }
        info!(
            "drew {} cells ({} marks per cell)",
            self.config.grid.cell_count(),
            rule.marks_per_cell()
        );
        Ok(())
    }
}
