//! Command-line interface for rendering one rule to an SVG file

use crate::algorithm::executor::PatternGenerator;
use crate::canvas::Surface;
use crate::io::configuration::{
    Configuration, DEFAULT_HEIGHT, DEFAULT_PADDING, DEFAULT_RULE, DEFAULT_SEED,
    DEFAULT_STROKE_WIDTH, DEFAULT_WIDTH,
};
use crate::io::error::Result;
use crate::io::parameters::RuleParameters;
use crate::io::progress::CellProgress;
use crate::io::svg::SvgSurface;
use crate::math::sampling::Distribution;
use crate::rules::Rule;
use crate::spatial::grid::GridShape;
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "nees")]
#[command(
    author,
    version,
    about = "Generate images following the rules of Georg Nees, published in rot 19 computer-grafik"
)]
/// Command-line arguments for the generator
pub struct Cli {
    /// Destination of the SVG image
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Rule to draw (0 = 8-ecke, 1 = 23-ecke, 2 = achsenparalleler irrweg, 3 = andreaskreuz, 4 = gardine)
    #[arg(short, long, default_value_t = DEFAULT_RULE, allow_negative_numbers = true)]
    pub rule: i64,

    /// Width of one cell in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Height of one cell in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Distribution of the random numbers (uniform, exponential, normal); draws are clamped to [PADDING, 1 - PADDING]
    #[arg(short, long, default_value = "uniform", value_parser = parse_distribution)]
    pub distribution: Distribution,

    /// Seed for the random number generator
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Margin between cell border and drawable area, as a fraction of the cell size
    #[arg(short, long, default_value_t = DEFAULT_PADDING)]
    pub padding: f64,

    /// Grid of cells, e.g. "(16,16)"
    #[arg(short = 'n', default_value = "(16,16)", value_parser = parse_grid)]
    pub grid: GridShape,

    /// Rule-specific parameters, e.g. "l=0.1,mode=rectangle"
    #[arg(short = 'x', long, default_value = "", value_parser = parse_parameters)]
    pub parameters: RuleParameters,

    /// Width of every stroke
    #[arg(long, default_value_t = DEFAULT_STROKE_WIDTH)]
    pub stroke_width: f64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_distribution(s: &str) -> Result<Distribution> {
    s.parse()
}

fn parse_grid(s: &str) -> Result<GridShape> {
    s.parse()
}

fn parse_parameters(s: &str) -> Result<RuleParameters> {
    s.parse()
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension, the padding or the stroke width is invalid
    pub fn configuration(&self) -> Result<Configuration> {
        Configuration::new(
            self.grid,
            f64::from(self.width),
            f64::from(self.height),
            self.padding,
            self.seed,
            self.distribution,
        )?
        .with_stroke_width(self.stroke_width)
    }

    /// Build the selected rule from its parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the rule or one of its parameters is invalid
    pub fn rule(&self) -> Result<Rule> {
        Rule::from_parameters(self.rule, &self.parameters)
    }
}

/// Runs one generation from parsed arguments
pub struct RenderJob {
    cli: Cli,
}

impl RenderJob {
    /// Create a job for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Validate, draw and write the image
    ///
    /// Rule and configuration are validated before the output file is created.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, drawing or writing fails
    pub fn run(&self) -> Result<()> {
        let start_time = Instant::now();
        let rule = self.cli.rule()?;
        let config = self.cli.configuration()?;

        let surface = SvgSurface::create(
            &self.cli.output,
            config.surface_width(),
            config.surface_height(),
        )?
        .with_stroke_width(config.stroke_width);
        let (width, height) = surface.dimensions();
        info!(
            "writing {width}x{height} image to {}",
            self.cli.output.display()
        );

        let cell_count = config.grid.cell_count();
        let progress = if self.cli.should_show_progress() {
            CellProgress::new(cell_count)
        } else {
            CellProgress::hidden(cell_count)
        };

        let generator = PatternGenerator::new(config, surface)?;
        let outcome = generator.generate_with(&rule, |cell| progress.advance(cell));
        progress.finish();
        outcome?;

        info!(
            "finished {} in {:.2?}",
            self.cli.output.display(),
            start_time.elapsed()
        );
        Ok(())
    }
}
