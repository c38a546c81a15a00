//! Time-Weighted Averages for Irregular Time Series
//!
//! This crate computes time-weighted averages (TWA) of an irregularly
//! sampled series over consecutive fixed-width windows, using step
//! interpolation: between two observations the series is assumed
//! constant at the earlier value (last observation held), so each value
//! is weighted by how long it was current, not by sample count.
//!
//! - **Interval averaging**: one window, one average, with the value in
//!   effect at the window start carried forward from before it
//! - **Series sequencing**: partition a span into windows of a fixed
//!   frequency and average each one, labeled by window start
//! - **Sample generation** (feature `generate`, on by default):
//!   reproducible irregular test data
//!
//! # Examples
//!
//! ```rust
//! use chrono::{TimeDelta, TimeZone, Utc};
//! use timeseries_twa::{time_weighted_series, Sample};
//!
//! let t = |h: u32, m: u32| Utc.with_ymd_and_hms(2020, 6, 4, h, m, 0).unwrap();
//! let samples = vec![
//!     Sample::new(t(9, 58), 20.0),
//!     Sample::new(t(10, 12), 26.0),
//!     Sample::new(t(10, 33), 14.0),
//! ];
//!
//! let series =
//!     time_weighted_series(t(10, 0), t(10, 50), &samples, TimeDelta::minutes(15)).unwrap();
//!
//! // One average per full 15-minute window, labeled by window start.
//! assert_eq!(series.len(), 3);
//! assert_eq!(series[0].start, t(10, 0));
//! ```

mod error;
#[cfg(feature = "generate")]
mod generate;
mod interval;
mod sample;
mod series;

pub use error::{TwaError, TwaResult};
#[cfg(feature = "generate")]
pub use generate::{generate_samples, GeneratorConfig};
pub use interval::{interval_average, weighted_segments, WeightedSegment};
pub use sample::{Sample, WindowAverage};
pub use series::{time_weighted_series, time_weighted_series_tolerant};
