//! Seeded random sources and the clamp-scale sampling primitive
//!
//! Every random coordinate a rule draws goes through [`Sampler::sample`]: one
//! raw draw from the configured distribution, clamped into
//! `[padding, 1 - padding]`, scaled by the axis length. Rules differ only in
//! how often and in which order they call it, and that order is what makes a
//! seed reproducible.

use std::fmt;
use std::str::FromStr;

use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{Distribution as _, Exp1, Normal};

use crate::io::configuration::{NORMAL_MEAN, NORMAL_STD_DEV, ORIENTATION_STREAM};
use crate::io::error::{GenerationError, Result, computation_error};

/// Distribution raw draws are taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Distribution {
    /// Uniform on `[0, 1)`
    #[default]
    Uniform,
    /// Exponential with scale 1
    Exponential,
    /// Normal with mean 0.5 and standard deviation 1/6
    Normal,
}

impl Distribution {
    /// Name used on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Exponential => "exponential",
            Self::Normal => "normal",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Distribution {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "uniform" => Ok(Self::Uniform),
            "exponential" => Ok(Self::Exponential),
            "normal" => Ok(Self::Normal),
            other => Err(GenerationError::UnimplementedDistribution {
                name: other.to_string(),
            }),
        }
    }
}

enum Draw {
    Uniform,
    Exponential,
    Normal(Normal<f64>),
}

/// Seeded generator bound to one distribution
///
/// Coordinates and orientations come from two separate streams derived from
/// the same seed, so orientation choices never shift the coordinate sequence.
pub struct RandomSource {
    rng: StdRng,
    orientation_rng: StdRng,
    draw: Draw,
    distribution: Distribution,
}

impl RandomSource {
    /// Create a source seeded with `seed`
    ///
    /// # Errors
    ///
    /// Returns an error if the distribution cannot be constructed
    pub fn new(seed: u64, distribution: Distribution) -> Result<Self> {
        let draw = match distribution {
            Distribution::Uniform => Draw::Uniform,
            Distribution::Exponential => Draw::Exponential,
            Distribution::Normal => Draw::Normal(
                Normal::new(NORMAL_MEAN, NORMAL_STD_DEV)
                    .map_err(|e| computation_error("normal distribution", &e))?,
            ),
        };

        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            orientation_rng: StdRng::seed_from_u64(seed ^ ORIENTATION_STREAM),
            draw,
            distribution,
        })
    }

    /// Next unbounded raw value
    pub fn draw(&mut self) -> f64 {
        match &self.draw {
            Draw::Uniform => self.rng.random::<f64>(),
            Draw::Exponential => self.rng.sample::<f64, _>(Exp1),
            Draw::Normal(normal) => normal.sample(&mut self.rng),
        }
    }

    /// Fair coin from the orientation stream
    pub fn coin(&mut self) -> bool {
        self.orientation_rng.random_bool(0.5)
    }

    /// Distribution this source draws from
    pub const fn distribution(&self) -> Distribution {
        self.distribution
    }
}

/// Which step parity of an alternating walk moves along y
///
/// With parity `o`, step `k` resamples y when `k % 2 == o` and x otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orientation(usize);

impl Orientation {
    /// Orientation locking even steps to the y axis
    pub const EVEN: Self = Self(0);
    /// Orientation locking odd steps to the y axis
    pub const ODD: Self = Self(1);

    /// Parity value (0 or 1)
    pub const fn parity(self) -> usize {
        self.0
    }

    /// Whether step `step` resamples the y coordinate
    pub const fn moves_y(self, step: usize) -> bool {
        step % 2 == self.0
    }
}

/// Clamp-scale sampler shared by all rules
pub struct Sampler {
    source: RandomSource,
    padding: f64,
    max_attempts: usize,
}

impl Sampler {
    /// Wrap a random source with the padding used for clamping
    pub const fn new(source: RandomSource, padding: f64, max_attempts: usize) -> Self {
        Self {
            source,
            padding,
            max_attempts,
        }
    }

    /// One raw draw clamped into `[padding, 1 - padding]`
    pub fn clamped(&mut self) -> f64 {
        self.source.draw().max(self.padding).min(1.0 - self.padding)
    }

    /// One raw draw clamped into `[0, 1]`
    pub fn unit(&mut self) -> f64 {
        self.source.draw().clamp(0.0, 1.0)
    }

    /// Clamp-scale: one clamped draw multiplied by `axis_length`
    pub fn sample(&mut self, axis_length: f64) -> f64 {
        axis_length * self.clamped()
    }

    /// Rejection-sample a coordinate no further than `max_delta` from `anchor`
    ///
    /// # Errors
    ///
    /// Returns `SamplingExhausted` when no draw is accepted within the retry cap
    pub fn sample_within(
        &mut self,
        axis_length: f64,
        anchor: f64,
        max_delta: f64,
        operation: &'static str,
    ) -> Result<f64> {
        let mut value = self.sample(axis_length);
        let mut attempts = 1;
        #[allow(clippy::while_float)]
        while (value - anchor).abs() > max_delta {
            if attempts >= self.max_attempts {
                return Err(self.exhausted(operation, attempts));
            }
            value = self.sample(axis_length);
            attempts += 1;
        }
        Ok(value)
    }

    /// Rejection-sample a value of at least `minimum`, starting from zero
    ///
    /// When `minimum <= 0` nothing is drawn and zero is returned.
    ///
    /// # Errors
    ///
    /// Returns `SamplingExhausted` when no draw is accepted within the retry cap
    pub fn sample_at_least(
        &mut self,
        axis_length: f64,
        minimum: f64,
        operation: &'static str,
    ) -> Result<f64> {
        let mut value = 0.0;
        let mut attempts = 0;
        #[allow(clippy::while_float)]
        while value < minimum {
            if attempts >= self.max_attempts {
                return Err(self.exhausted(operation, attempts));
            }
            value = self.sample(axis_length);
            attempts += 1;
        }
        Ok(value)
    }

    /// Per-cell orientation for alternating walks
    pub fn orientation(&mut self) -> Orientation {
        if self.source.coin() {
            Orientation::ODD
        } else {
            Orientation::EVEN
        }
    }

    /// Padding fraction used for clamping
    pub const fn padding(&self) -> f64 {
        self.padding
    }

    /// Distribution of the underlying source
    pub const fn distribution(&self) -> Distribution {
        self.source.distribution()
    }

    fn exhausted(&self, operation: &'static str, attempts: usize) -> GenerationError {
        log::warn!(
            "{operation}: no acceptable draw after {attempts} attempts ({} distribution, padding {})",
            self.source.distribution(),
            self.padding
        );
        GenerationError::SamplingExhausted {
            operation,
            attempts,
            cell: None,
        }
    }
}
