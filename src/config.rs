//! Startup configuration
//!
//! The fixed station table and all component parameters are explicit
//! configuration values assembled here, so any of them can be swapped
//! without touching computation code. [`ToolkitConfig::default`] is the
//! built-in dashboard configuration; a TOML document can override any
//! part of it.
//!
//! ```toml
//! [[stations]]
//! station_id = "500-041"
//! name = "Mumbai"
//! lat = 18.95
//! lon = 72.82
//!
//! [sediment]
//! critical_shields = 0.047
//!
//! [carbonate]
//! k1_k2 = "Lueker2000"
//! ```

use serde::{Deserialize, Serialize};

use coastal_core::errors::{CoastalError, CoastalResult};
use coastal_core::stations::{Station, StationDirectory};
use coastal_components::components::{CarbonateParameters, SedimentParameters, TideParameters};

/// Complete toolkit configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    /// Monitoring stations available to the nearest-station query
    pub stations: Vec<Station>,
    /// Synthetic tide curve parameters
    pub tide: TideParameters,
    /// Bedload transport parameters
    pub sediment: SedimentParameters,
    /// Carbonate system solver parameters
    pub carbonate: CarbonateParameters,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            stations: StationDirectory::indian_ocean_reference()
                .iter()
                .cloned()
                .collect(),
            tide: TideParameters::default(),
            sediment: SedimentParameters::default(),
            carbonate: CarbonateParameters::default(),
        }
    }
}

impl ToolkitConfig {
    /// Parse a configuration from a TOML document.
    ///
    /// Omitted sections fall back to the built-in defaults.
    pub fn from_toml_str(text: &str) -> CoastalResult<Self> {
        toml::from_str(text)
            .map_err(|e| CoastalError::InvalidInput(format!("configuration: {}", e)))
    }

    /// Render the configuration as a TOML document.
    pub fn to_toml_string(&self) -> CoastalResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CoastalError::InvalidInput(format!("configuration: {}", e)))
    }

    /// Build the station directory described by this configuration.
    pub fn directory(&self) -> StationDirectory {
        StationDirectory::new(self.stations.clone())
    }
}
