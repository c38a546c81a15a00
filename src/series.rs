//! Windowed series of time-weighted averages
//!
//! Partitions a span into consecutive fixed-width windows and computes
//! one time-weighted average per window.

use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

use crate::error::{TwaError, TwaResult};
use crate::interval::interval_average;
use crate::sample::{Sample, WindowAverage};

/// Compute time-weighted averages over consecutive windows of a span.
///
/// The span `[span_start, span_end)` is partitioned into windows of
/// exactly `frequency`, starting at `span_start`. Only windows whose
/// end falls strictly before `span_end` are produced: a trailing
/// remainder shorter than `frequency` is silently dropped rather than
/// emitted as a short window. Each result is labeled with its window's
/// START timestamp.
///
/// The first window that fails aborts the whole series; see
/// [`time_weighted_series_tolerant`] for the marker-emitting variant.
///
/// # Arguments
/// * `span_start` - Start of the overall span
/// * `span_end` - End of the overall span
/// * `samples` - Full sample sequence, chronologically non-decreasing
/// * `frequency` - Window width; must be positive and strictly less
///   than the span
///
/// # Example
/// ```rust
/// use chrono::{TimeDelta, TimeZone, Utc};
/// use timeseries_twa::{time_weighted_series, Sample};
///
/// let t = |h, m| Utc.with_ymd_and_hms(2020, 6, 4, h, m, 0).unwrap();
/// let samples = vec![
///     Sample::new(t(9, 55), 4.0),
///     Sample::new(t(10, 20), 8.0),
/// ];
///
/// let series =
///     time_weighted_series(t(10, 0), t(10, 46), &samples, TimeDelta::minutes(15)).unwrap();
///
/// // Windows at 10:00, 10:15 and 10:30; the 10:45 remainder is dropped.
/// assert_eq!(series.len(), 3);
/// assert_eq!(series[0].start, t(10, 0));
/// assert_eq!(series[0].average, 4.0);
/// ```
pub fn time_weighted_series(
    span_start: DateTime<Utc>,
    span_end: DateTime<Utc>,
    samples: &[Sample],
    frequency: TimeDelta,
) -> TwaResult<Vec<WindowAverage>> {
    validate_frequency(span_start, span_end, frequency)?;

    let mut averages = Vec::new();
    let mut window_start = span_start;

    while window_start + frequency < span_end {
        let window_end = window_start + frequency;
        let average = interval_average(window_start, window_end, samples)?;
        averages.push(WindowAverage {
            start: window_start,
            average,
        });
        window_start = window_end;
    }

    debug!(
        "computed {} windows of {} over {} to {}",
        averages.len(),
        frequency,
        span_start,
        span_end
    );

    Ok(averages)
}

/// Like [`time_weighted_series`], but a window with no carried-forward
/// value yields a `None` marker instead of aborting the series.
///
/// Only [`TwaError::NoPriorValue`] is downgraded to a marker — it is a
/// property of where the window sits relative to the data, not of the
/// data itself. Defective input (`NonMonotonicInput`) and an invalid
/// frequency still fail the whole call.
pub fn time_weighted_series_tolerant(
    span_start: DateTime<Utc>,
    span_end: DateTime<Utc>,
    samples: &[Sample],
    frequency: TimeDelta,
) -> TwaResult<Vec<(DateTime<Utc>, Option<f64>)>> {
    validate_frequency(span_start, span_end, frequency)?;

    let mut averages = Vec::new();
    let mut window_start = span_start;

    while window_start + frequency < span_end {
        let window_end = window_start + frequency;
        let average = match interval_average(window_start, window_end, samples) {
            Ok(average) => Some(average),
            Err(TwaError::NoPriorValue { .. }) => None,
            Err(err) => return Err(err),
        };
        averages.push((window_start, average));
        window_start = window_end;
    }

    Ok(averages)
}

fn validate_frequency(
    span_start: DateTime<Utc>,
    span_end: DateTime<Utc>,
    frequency: TimeDelta,
) -> TwaResult<()> {
    let span = span_end - span_start;
    if frequency <= TimeDelta::zero() || frequency >= span {
        return Err(TwaError::InvalidFrequency { frequency, span });
    }
    Ok(())
}
