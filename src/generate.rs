//! Synthetic sample generation
//!
//! Produces irregularly spaced test data that honors the averaging
//! core's input contract: non-decreasing timestamps, real values. The
//! generator is a data source for tests and benchmarks, not part of
//! the averaging semantics.

use chrono::{DateTime, TimeDelta, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::sample::Sample;

/// Configuration for the synthetic sample generator
///
/// The seed is explicit so runs are reproducible; there is no
/// process-wide generator state.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Start of the generated period
    pub start: DateTime<Utc>,

    /// End of the generated period
    pub end: DateTime<Utc>,

    /// RNG seed
    pub seed: u64,

    /// Upper bound on the timestamp increment between samples
    pub max_step: TimeDelta,

    /// Values are drawn uniformly from `[0, value_scale)`
    pub value_scale: f64,
}

impl GeneratorConfig {
    /// Create a generator configuration with default seed, step bound
    /// (600 s) and value scale
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            seed: 1234,
            max_step: TimeDelta::seconds(600),
            value_scale: 175.2,
        }
    }

    /// Set the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the upper bound on the timestamp increment
    pub fn with_max_step(mut self, max_step: TimeDelta) -> Self {
        self.max_step = max_step;
        self
    }

    /// Set the value scale
    pub fn with_value_scale(mut self, value_scale: f64) -> Self {
        self.value_scale = value_scale;
        self
    }
}

/// Generate an ordered sequence of irregularly spaced samples.
///
/// The running timestamp advances by a pseudo-random increment: the
/// draw ranges up to 1.5x the step bound and is folded back in 60 s
/// steps until it fits, so increments cluster toward the bound and the
/// spacing wanders. The last sample may land past `config.end`.
pub fn generate_samples(config: &GeneratorConfig) -> Vec<Sample> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let cap = config.max_step.as_seconds_f64();

    let mut samples = Vec::new();
    let mut ts = config.start;
    while ts < config.end {
        let x: f64 = rng.random();

        let mut step = 1.5 * cap * x;
        while step > cap {
            step -= 60.0;
        }
        // Folding a small bound can land below zero; a zero increment
        // (duplicate timestamp) is still within the input contract.
        if step < 0.0 {
            step = 0.0;
        }

        ts += TimeDelta::milliseconds((step * 1000.0) as i64);
        samples.push(Sample::new(ts, config.value_scale * x));
    }

    debug!(
        "generated {} samples over {} to {}",
        samples.len(),
        config.start,
        config.end
    );

    samples
}
