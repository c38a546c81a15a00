//! Core data model: timestamped samples and windowed averages

use chrono::{DateTime, Utc};

/// A single observation of an irregularly sampled series.
///
/// Samples are caller-owned and read-only to the averaging core. The
/// core requires the sequence to be chronologically non-decreasing; it
/// never sorts or mutates it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Absolute observation time
    pub timestamp: DateTime<Utc>,

    /// Observed value
    pub value: f64,
}

impl Sample {
    /// Create a new sample
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// One element of an averaged series: the time-weighted average over a
/// single window, labeled with the window's START timestamp.
///
/// Start labeling is deliberate: the alternative (labeling with the
/// window end) is a recognized variant and is intentionally not offered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowAverage {
    /// Start of the window this average covers
    pub start: DateTime<Utc>,

    /// Time-weighted average over the window
    pub average: f64,
}
