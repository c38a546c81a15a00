//! Error types for timeseries-twa

use chrono::{DateTime, TimeDelta, Utc};
use thiserror::Error;

/// Result type for time-weighted average operations
pub type TwaResult<T> = Result<T, TwaError>;

/// Error types for time-weighted average operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TwaError {
    /// Degenerate window: start is not strictly before end
    #[error("invalid window: start {start} is not before end {end}")]
    InvalidWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// Frequency is non-positive or does not fit inside the span
    #[error("invalid frequency {frequency} for span of {span}")]
    InvalidFrequency {
        frequency: TimeDelta,
        span: TimeDelta,
    },

    /// No sample precedes the window start, so the carried-forward
    /// value at the start of the window is undefined
    #[error("no sample precedes window start {start}")]
    NoPriorValue { start: DateTime<Utc> },

    /// A sample's timestamp precedes the one before it, which would
    /// assign a negative weight
    #[error("non-monotonic input: negative hold duration at sample {at}")]
    NonMonotonicInput { at: DateTime<Utc> },
}
