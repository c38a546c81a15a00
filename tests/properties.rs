//! Property tests for the averaging core

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use proptest::prelude::*;
use timeseries_twa::{interval_average, time_weighted_series, weighted_segments, Sample};

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 6, 4, 0, 0, 0).unwrap()
}

/// Non-decreasing samples; the first lands within 600 s of the base
/// time, so any window starting at least 601 s in has a prior value.
fn samples_strategy() -> impl Strategy<Value = Vec<Sample>> {
    prop::collection::vec((0i64..=600, -1000.0f64..1000.0), 1..60).prop_map(|pairs| {
        let mut ts = base();
        let mut samples = Vec::with_capacity(pairs.len());
        for (step, value) in pairs {
            ts += TimeDelta::seconds(step);
            samples.push(Sample::new(ts, value));
        }
        samples
    })
}

proptest! {
    #[test]
    fn weights_always_sum_to_window_span(
        samples in samples_strategy(),
        offset in 0i64..2000,
        width in 1i64..3600,
    ) {
        let window_start = base() + TimeDelta::seconds(601 + offset);
        let window_end = window_start + TimeDelta::seconds(width);

        let segments = weighted_segments(window_start, window_end, &samples).unwrap();
        let total = segments
            .iter()
            .fold(TimeDelta::zero(), |acc, s| acc + s.duration);

        prop_assert_eq!(total, window_end - window_start);
    }

    #[test]
    fn average_is_a_convex_combination(
        samples in samples_strategy(),
        offset in 0i64..2000,
        width in 1i64..3600,
    ) {
        let window_start = base() + TimeDelta::seconds(601 + offset);
        let window_end = window_start + TimeDelta::seconds(width);

        let avg = interval_average(window_start, window_end, &samples).unwrap();

        // Contributing values: the carried-forward one plus everything
        // inside the window.
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        if let Some(prior) = samples.iter().rev().find(|s| s.timestamp < window_start) {
            lo = lo.min(prior.value);
            hi = hi.max(prior.value);
        }
        for s in &samples {
            if s.timestamp >= window_start && s.timestamp <= window_end {
                lo = lo.min(s.value);
                hi = hi.max(s.value);
            }
        }

        prop_assert!(avg >= lo - 1e-9);
        prop_assert!(avg <= hi + 1e-9);
    }

    #[test]
    fn empty_window_yields_carried_value_exactly(
        samples in samples_strategy(),
        width in 1i64..600,
    ) {
        // Place the window past the last sample: nothing falls inside,
        // so the last value holds for the whole span.
        let last = *samples.last().unwrap();
        let window_start = last.timestamp + TimeDelta::seconds(1);
        let window_end = window_start + TimeDelta::seconds(width);

        let avg = interval_average(window_start, window_end, &samples).unwrap();
        prop_assert_eq!(avg, last.value);
    }

    #[test]
    fn series_is_idempotent_and_start_labeled(
        samples in samples_strategy(),
        freq_secs in 30i64..900,
        windows in 2i64..10,
    ) {
        let span_start = base() + TimeDelta::seconds(601);
        // A few extra seconds past the last full window, which must be
        // dropped without affecting the preceding windows.
        let span_end = span_start + TimeDelta::seconds(freq_secs * windows + 7);
        let frequency = TimeDelta::seconds(freq_secs);

        let first = time_weighted_series(span_start, span_end, &samples, frequency).unwrap();
        let second = time_weighted_series(span_start, span_end, &samples, frequency).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), windows as usize);
        for (k, window) in first.iter().enumerate() {
            prop_assert_eq!(
                window.start,
                span_start + TimeDelta::seconds(freq_secs * k as i64)
            );
        }
    }
}
