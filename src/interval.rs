//! Time-weighted average of a single window
//!
//! Step interpolation (last observation held): between two samples the
//! series is assumed constant at the earlier sample's value, so each
//! value is weighted by the wall-clock time it was the most recent
//! observation.
//!
//! Formula: TWA = Σ(value × hold_duration) / window_span

use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

use crate::error::{TwaError, TwaResult};
use crate::sample::Sample;

/// A (value, hold-duration) pair: one step of the interpolated series
/// within a window.
///
/// The segments of a window always sum to the window's span; a segment
/// may have zero duration (a sample on a window boundary, or a
/// duplicate timestamp) but never a negative one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedSegment {
    /// Value held over this segment
    pub value: f64,

    /// How long the value was the most recent observation
    pub duration: TimeDelta,
}

/// Partition a window into weighted segments.
///
/// Locates the carried-forward value (the last sample strictly before
/// `window_start`) and the in-window samples (timestamps in
/// `[window_start, window_end]`; a sample exactly at the end is kept
/// with zero weight), then assigns each value the duration it held.
///
/// # Arguments
/// * `window_start` - Start of the window (inclusive)
/// * `window_end` - End of the window (exclusive)
/// * `samples` - Full sample sequence, chronologically non-decreasing
///
/// # Errors
/// * `InvalidWindow` if `window_start >= window_end`
/// * `NoPriorValue` if the window starts before the first sample, so no
///   value can be carried forward into it
/// * `NonMonotonicInput` if a negative hold duration is produced
pub fn weighted_segments(
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    samples: &[Sample],
) -> TwaResult<Vec<WeightedSegment>> {
    if window_start >= window_end {
        return Err(TwaError::InvalidWindow {
            start: window_start,
            end: window_end,
        });
    }
    let span = window_end - window_start;

    // Samples are sorted, so the window boundaries can be located
    // directly instead of rescanning the whole sequence per window.
    let first_in = samples.partition_point(|s| s.timestamp < window_start);
    let stop = samples.partition_point(|s| s.timestamp <= window_end);

    let prior = samples[..first_in].last();
    let in_window = &samples[first_in..stop];

    debug!(
        "window {} to {}: carried-forward = {:?}, {} in-window samples",
        window_start,
        window_end,
        prior.map(|s| s.value),
        in_window.len()
    );

    let (Some(first), Some(last)) = (in_window.first(), in_window.last()) else {
        // No observation inside the window: the carried-forward value
        // holds for the entire span.
        let prior = prior.ok_or(TwaError::NoPriorValue {
            start: window_start,
        })?;
        return Ok(vec![WeightedSegment {
            value: prior.value,
            duration: span,
        }]);
    };

    let mut segments = Vec::with_capacity(in_window.len() + 1);

    // Lead-in from the window start to the first in-window sample gets
    // the carried-forward value. When the first sample sits exactly on
    // the start boundary the lead-in is empty and no prior is needed.
    let lead = first.timestamp - window_start;
    if lead < TimeDelta::zero() {
        return Err(TwaError::NonMonotonicInput {
            at: first.timestamp,
        });
    }
    if lead > TimeDelta::zero() {
        let prior = prior.ok_or(TwaError::NoPriorValue {
            start: window_start,
        })?;
        segments.push(WeightedSegment {
            value: prior.value,
            duration: lead,
        });
    }

    // Each in-window value holds until the next sample arrives.
    for pair in in_window.windows(2) {
        let duration = pair[1].timestamp - pair[0].timestamp;
        if duration < TimeDelta::zero() {
            return Err(TwaError::NonMonotonicInput {
                at: pair[1].timestamp,
            });
        }
        segments.push(WeightedSegment {
            value: pair[0].value,
            duration,
        });
    }

    // The last value holds through to the window end.
    let tail = window_end - last.timestamp;
    if tail < TimeDelta::zero() {
        return Err(TwaError::NonMonotonicInput { at: last.timestamp });
    }
    segments.push(WeightedSegment {
        value: last.value,
        duration: tail,
    });

    Ok(segments)
}

/// Compute the time-weighted average of one window.
///
/// # Arguments
/// * `window_start` - Start of the window (inclusive)
/// * `window_end` - End of the window (exclusive)
/// * `samples` - Full sample sequence, chronologically non-decreasing
///
/// # Returns
/// The step-interpolated average, a convex combination of the
/// carried-forward value and the in-window values.
///
/// # Example
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use timeseries_twa::{interval_average, Sample};
///
/// let t = |h, m| Utc.with_ymd_and_hms(2020, 6, 4, h, m, 0).unwrap();
/// let samples = vec![
///     Sample::new(t(9, 55), 5.0),
///     Sample::new(t(10, 10), 10.0),
/// ];
///
/// // 5.0 held for the first ten minutes, 10.0 for the last ten.
/// let avg = interval_average(t(10, 0), t(10, 20), &samples).unwrap();
/// assert_eq!(avg, 7.5);
/// ```
pub fn interval_average(
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    samples: &[Sample],
) -> TwaResult<f64> {
    let segments = weighted_segments(window_start, window_end, samples)?;

    // A single segment means one value held for the whole window; its
    // average is that value, with no float round-trip.
    if let [only] = segments.as_slice() {
        return Ok(only.value);
    }

    let span = window_end - window_start;
    let weighted_sum: f64 = segments
        .iter()
        .map(|s| s.value * s.duration.as_seconds_f64())
        .sum();

    Ok(weighted_sum / span.as_seconds_f64())
}
