//! Tide-height series types
//!
//! A [`TideSeries`] stores its heights in an ndarray vector alongside a
//! start timestamp and a fixed step, rather than materialising one struct
//! per sample; [`TideSample`]s are produced on iteration. A [`TideWindow`]
//! describes the request a tide source answers.
//!
//! Series have no identity beyond their values: they are generated fresh
//! per request and never persisted.

use chrono::{DateTime, Duration, Utc};
use ndarray::Array1;
use num::Float;
use serde::{Deserialize, Serialize};

/// Type of floating point value used across the toolkit
pub type FloatValue = f64;

/// Default number of samples in a tide window (72 hourly samples = 3 days)
pub const DEFAULT_WINDOW_SAMPLES: usize = 72;

/// A single tide-height observation.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TideSample {
    pub timestamp: DateTime<Utc>,
    /// Tide height above chart datum
    /// unit: m
    pub height_m: FloatValue,
}

/// The time window a tide source is asked to cover.
///
/// Defaults to 72 hourly samples from the given start.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TideWindow {
    /// Timestamp of the first sample
    pub start: DateTime<Utc>,
    /// Number of samples to produce
    pub samples: usize,
    /// Spacing between consecutive samples
    /// unit: hours
    pub step_hours: u32,
}

impl TideWindow {
    /// Create a window with the default sampling (72 hourly samples).
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            start,
            samples: DEFAULT_WINDOW_SAMPLES,
            step_hours: 1,
        }
    }

    /// Set a custom sample count
    pub fn with_samples(self, samples: usize) -> Self {
        Self { samples, ..self }
    }

    /// Set a custom sample spacing in hours
    pub fn with_step_hours(self, step_hours: u32) -> Self {
        Self { step_hours, ..self }
    }
}

/// An evenly spaced tide-height series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TideSeries {
    start: DateTime<Utc>,
    step_hours: u32,
    heights: Array1<FloatValue>,
}

impl TideSeries {
    pub fn new(start: DateTime<Utc>, step_hours: u32, heights: Array1<FloatValue>) -> Self {
        Self {
            start,
            step_hours,
            heights,
        }
    }

    /// Number of samples in the series
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Timestamp of the first sample
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Spacing between consecutive samples (hours)
    pub fn step_hours(&self) -> u32 {
        self.step_hours
    }

    /// Raw height values (m)
    pub fn heights(&self) -> &Array1<FloatValue> {
        &self.heights
    }

    /// Timestamp of the sample at `index`
    pub fn timestamp(&self, index: usize) -> DateTime<Utc> {
        self.start + Duration::hours(index as i64 * self.step_hours as i64)
    }

    /// Iterate over the series as timestamped samples
    pub fn samples(&self) -> impl Iterator<Item = TideSample> + '_ {
        self.heights
            .iter()
            .enumerate()
            .map(|(i, &height_m)| TideSample {
                timestamp: self.timestamp(i),
                height_m,
            })
    }

    /// Tidal range: max(height) - min(height) over the series.
    ///
    /// Returns 0 for a series with fewer than two samples.
    pub fn tidal_range(&self) -> FloatValue {
        if self.heights.len() < 2 {
            return 0.0;
        }

        let (lo, hi) = self.heights.iter().fold(
            (FloatValue::infinity(), FloatValue::neg_infinity()),
            |(lo, hi), &h| (lo.min(h), hi.max(h)),
        );
        hi - lo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ndarray::array;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn window_defaults() {
        let window = TideWindow::new(start());
        assert_eq!(window.samples, 72);
        assert_eq!(window.step_hours, 1);
    }

    #[test]
    fn window_builders() {
        let window = TideWindow::new(start()).with_samples(24).with_step_hours(2);
        assert_eq!(window.samples, 24);
        assert_eq!(window.step_hours, 2);
        assert_eq!(window.start, start());
    }

    #[test]
    fn timestamps_are_evenly_spaced() {
        let series = TideSeries::new(start(), 1, array![1.0, 2.0, 3.0]);

        let samples: Vec<_> = series.samples().collect();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].timestamp, start());
        for pair in samples.windows(2) {
            assert_eq!(
                pair[1].timestamp - pair[0].timestamp,
                Duration::hours(1),
                "Samples should be spaced one hour apart"
            );
        }
    }

    #[test]
    fn custom_step_spacing() {
        let series = TideSeries::new(start(), 6, array![0.0, 1.0]);
        assert_eq!(series.timestamp(1) - series.timestamp(0), Duration::hours(6));
    }

    #[test]
    fn tidal_range_is_peak_to_trough() {
        let series = TideSeries::new(start(), 1, array![2.0, 3.0, 1.5, 2.5]);
        assert!(
            (series.tidal_range() - 1.5).abs() < 1e-12,
            "Range should be max - min, got {}",
            series.tidal_range()
        );
    }

    #[test]
    fn tidal_range_degenerate_series() {
        let empty = TideSeries::new(start(), 1, Array1::zeros(0));
        assert_eq!(empty.tidal_range(), 0.0);

        let single = TideSeries::new(start(), 1, array![2.0]);
        assert_eq!(single.tidal_range(), 0.0);
    }

    #[test]
    fn serialization_roundtrip() {
        let series = TideSeries::new(start(), 1, array![1.0, 2.0, 3.0]);
        let json = serde_json::to_string(&series).expect("Serialization failed");
        let parsed: TideSeries = serde_json::from_str(&json).expect("Deserialization failed");
        assert_eq!(series, parsed);
    }
}
