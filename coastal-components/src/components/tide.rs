//! Synthetic tide generator
//!
//! Produces an illustrative tide-height curve for charting while no real
//! observation feed is wired up.
//!
//! # What This Component Does
//!
//! Evaluates an offset sine over the requested window:
//!
//! $$h_i = \bar{h} + A \sin\left(\frac{i}{n} \cdot 2\pi \cdot c\right)$$
//!
//! With the default parameters (mean level 2 m, amplitude 1 m, six cycles)
//! and the default 72-sample hourly window this traces six semidiurnal
//! cycles over three days, peak-to-trough range 2 m.
//!
//! This is a synthetic placeholder, not a tide prediction: it ignores the
//! station entirely and carries no harmonic constituents. It exists so the
//! charting path can be exercised end to end; swap in a real
//! [`TideSource`] implementation for observational data.

use chrono::{DateTime, Utc};
use log::debug;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use coastal_core::errors::{CoastalError, CoastalResult};
use coastal_core::source::TideSource;
use coastal_core::stations::Station;
use coastal_core::timeseries::{FloatValue, TideSeries, TideWindow};

/// Parameters for the synthetic tide curve
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TideParameters {
    /// Mean water level the curve oscillates around
    /// unit: m
    /// default: 2.0
    pub mean_level_m: FloatValue,
    /// Amplitude of the oscillation
    /// unit: m
    /// default: 1.0
    pub amplitude_m: FloatValue,
    /// Number of full cycles across the requested window
    /// default: 6.0 (semidiurnal over a 72-hour window)
    pub cycles: FloatValue,
}

impl Default for TideParameters {
    fn default() -> Self {
        Self {
            mean_level_m: 2.0,
            amplitude_m: 1.0,
            cycles: 6.0,
        }
    }
}

/// Synthetic tide-height source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntheticTideGenerator {
    parameters: TideParameters,
}

impl SyntheticTideGenerator {
    /// Create a generator with the default curve parameters.
    pub fn new() -> Self {
        Self::from_parameters(TideParameters::default())
    }

    pub fn from_parameters(parameters: TideParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &TideParameters {
        &self.parameters
    }

    /// Height of sample `index` in a window of `samples` samples.
    pub fn height_at(&self, index: usize, samples: usize) -> FloatValue {
        let phase = index as FloatValue / samples as FloatValue * self.parameters.cycles * 2.0 * PI;
        self.parameters.mean_level_m + self.parameters.amplitude_m * phase.sin()
    }

    /// Generate `samples` heights starting at `start`, spaced `step_hours` apart.
    pub fn generate(
        &self,
        start: DateTime<Utc>,
        samples: usize,
        step_hours: u32,
    ) -> CoastalResult<TideSeries> {
        if samples == 0 {
            return Err(CoastalError::InvalidInput(
                "tide window must contain at least one sample".to_string(),
            ));
        }
        if step_hours == 0 {
            return Err(CoastalError::InvalidInput(
                "tide sample spacing must be at least one hour".to_string(),
            ));
        }

        let heights = Array1::from_shape_fn(samples, |i| self.height_at(i, samples));
        Ok(TideSeries::new(start, step_hours, heights))
    }
}

impl Default for SyntheticTideGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[typetag::serde]
impl TideSource for SyntheticTideGenerator {
    fn fetch(&self, station: &Station, window: &TideWindow) -> CoastalResult<TideSeries> {
        // The synthetic curve is station-independent
        debug!(
            "generating synthetic tide series for {} ({} samples, {} h step)",
            station.name, window.samples, window.step_hours
        );
        self.generate(window.start, window.samples, window.step_hours)
    }
}
