//! Toolkit facade
//!
//! [`CoastalToolkit`] bundles the configured station directory, tide
//! source and science models behind one method per dashboard interaction.
//! The presentation layer collects the user's input, calls the matching
//! method, and renders the returned value; any [`CoastalError`] becomes a
//! user-visible message via its `Display` implementation.
//!
//! Input structs mirror the dashboard forms, with the forms' default
//! values. Each request is handled independently on the calling thread;
//! the only state shared across requests is the read-only configuration.

use log::debug;
use serde::{Deserialize, Serialize};

use coastal_core::errors::{CoastalError, CoastalResult};
use coastal_core::source::TideSource;
use coastal_core::spatial::GeoPoint;
use coastal_core::stations::{DistanceResult, Station, StationDirectory};
use coastal_core::timeseries::{FloatValue, TideSeries, TideWindow};

use coastal_components::components::{
    validate_projection_years, CarbonateSolution, CarbonateSystem, SedimentTransport,
    ShorelineProjector, SyntheticTideGenerator,
};

use crate::config::ToolkitConfig;

/// Sediment calculator form values.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SedimentInput {
    /// Depth-averaged flow velocity
    /// unit: m/s
    pub velocity_m_s: FloatValue,
    /// Median grain size D50, must be positive
    /// unit: mm
    pub grain_size_mm: FloatValue,
}

impl Default for SedimentInput {
    fn default() -> Self {
        Self {
            velocity_m_s: 1.0,
            grain_size_mm: 0.2,
        }
    }
}

/// Ocean chemistry form values.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarbonateInput {
    /// Total alkalinity
    /// unit: µmol/kg
    pub alkalinity_umol_kg: FloatValue,
    /// Dissolved inorganic carbon
    /// unit: µmol/kg
    pub dic_umol_kg: FloatValue,
    /// In-situ temperature
    /// unit: °C
    pub temperature_c: FloatValue,
    /// Practical salinity
    pub salinity: FloatValue,
}

impl Default for CarbonateInput {
    fn default() -> Self {
        Self {
            alkalinity_umol_kg: 2300.0,
            dic_umol_kg: 2000.0,
            temperature_c: 20.0,
            salinity: 35.0,
        }
    }
}

/// Shoreline projection form values.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErosionInput {
    /// Historical erosion rate
    /// unit: m/year
    pub rate_m_per_year: FloatValue,
    /// Projection horizon, in [1, 100]
    /// unit: years
    pub years: u32,
}

impl Default for ErosionInput {
    fn default() -> Self {
        Self {
            rate_m_per_year: 0.5,
            years: 10,
        }
    }
}

impl ErosionInput {
    /// Check the dashboard's input contract before projecting.
    pub fn validate(&self) -> CoastalResult<()> {
        if !self.rate_m_per_year.is_finite() {
            return Err(CoastalError::InvalidInput(format!(
                "erosion rate must be finite, got {}",
                self.rate_m_per_year
            )));
        }
        validate_projection_years(self.years)
    }
}

/// The configured computational engine behind the dashboard.
#[derive(Debug)]
pub struct CoastalToolkit {
    directory: StationDirectory,
    tide_source: Box<dyn TideSource>,
    sediment: SedimentTransport,
    carbonate: CarbonateSystem,
    shoreline: ShorelineProjector,
}

impl CoastalToolkit {
    /// Build a toolkit with the built-in configuration.
    pub fn new() -> Self {
        Self::from_config(ToolkitConfig::default())
    }

    /// Build a toolkit from an explicit configuration.
    pub fn from_config(config: ToolkitConfig) -> Self {
        debug!(
            "configuring coastal toolkit with {} stations",
            config.stations.len()
        );
        let tide_source: Box<dyn TideSource> =
            Box::new(SyntheticTideGenerator::from_parameters(config.tide.clone()));
        Self {
            directory: config.directory(),
            tide_source,
            sediment: SedimentTransport::from_parameters(config.sediment.clone()),
            carbonate: CarbonateSystem::from_parameters(config.carbonate.clone()),
            shoreline: ShorelineProjector::new(),
        }
    }

    /// Replace the tide source, e.g. with a real observation feed.
    pub fn with_tide_source(mut self, source: Box<dyn TideSource>) -> Self {
        self.tide_source = source;
        self
    }

    /// The read-only station directory (for marker rendering).
    pub fn directory(&self) -> &StationDirectory {
        &self.directory
    }

    /// Nearest monitoring station to a clicked map coordinate.
    pub fn nearest_station(&self, point: GeoPoint) -> CoastalResult<DistanceResult> {
        self.directory.nearest(point)
    }

    /// Tide-height series for a station over a window (for charting).
    pub fn tide_series(
        &self,
        station: &Station,
        window: &TideWindow,
    ) -> CoastalResult<TideSeries> {
        self.tide_source.fetch(station, window)
    }

    /// Bedload sediment-transport rate (m³/s per metre of bed width).
    pub fn sediment_transport(&self, input: &SedimentInput) -> CoastalResult<FloatValue> {
        self.sediment
            .transport_rate(input.velocity_m_s, input.grain_size_mm)
    }

    /// Full carbonate-system solution for a water sample.
    pub fn carbonate_solution(&self, input: &CarbonateInput) -> CoastalResult<CarbonateSolution> {
        self.carbonate.solve(
            input.dic_umol_kg,
            input.alkalinity_umol_kg,
            input.temperature_c,
            input.salinity,
        )
    }

    /// Aragonite saturation state Ω for a water sample.
    pub fn aragonite_saturation(&self, input: &CarbonateInput) -> CoastalResult<FloatValue> {
        self.carbonate_solution(input)
            .map(|solution| solution.omega_aragonite)
    }

    /// Projected shoreline retreat (m) over the requested horizon.
    pub fn shoreline_retreat(&self, input: &ErosionInput) -> CoastalResult<FloatValue> {
        input.validate()?;
        Ok(self.shoreline.project(input.rate_m_per_year, input.years))
    }
}

impl Default for CoastalToolkit {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_defaults_match_the_dashboard_forms() {
        let sediment = SedimentInput::default();
        assert_eq!(sediment.velocity_m_s, 1.0);
        assert_eq!(sediment.grain_size_mm, 0.2);

        let carbonate = CarbonateInput::default();
        assert_eq!(carbonate.alkalinity_umol_kg, 2300.0);
        assert_eq!(carbonate.dic_umol_kg, 2000.0);

        let erosion = ErosionInput::default();
        assert_eq!(erosion.rate_m_per_year, 0.5);
        assert_eq!(erosion.years, 10);
    }

    #[test]
    fn erosion_input_contract() {
        assert!(ErosionInput::default().validate().is_ok());

        let out_of_range = ErosionInput {
            years: 0,
            ..ErosionInput::default()
        };
        assert!(matches!(
            out_of_range.validate(),
            Err(CoastalError::InvalidInput(_))
        ));

        let nan_rate = ErosionInput {
            rate_m_per_year: FloatValue::NAN,
            ..ErosionInput::default()
        };
        assert!(matches!(
            nan_rate.validate(),
            Err(CoastalError::InvalidInput(_))
        ));
    }

    #[test]
    fn errors_render_as_user_messages() {
        let toolkit = CoastalToolkit::new();

        let err = toolkit
            .sediment_transport(&SedimentInput {
                velocity_m_s: 0.001,
                grain_size_mm: 0.2,
            })
            .unwrap_err();
        let message = err.to_string();
        assert!(
            message.contains("no bedload transport"),
            "Sub-critical message should read as a physical outcome: {}",
            message
        );
    }
}
