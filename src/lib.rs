//! Computational engine for an interactive coastal monitoring dashboard.
//!
//! The dashboard lets a user pick a monitoring station on a map, view a
//! tide-height curve, compute a bedload sediment-transport rate, and
//! project shoreline retreat alongside an ocean-chemistry saturation
//! index. This crate is the engine behind those interactions; map
//! rendering, click capture and charting live in the presentation layer
//! and consume the values returned here.
//!
//! Everything is a deterministic pure function of its inputs and the
//! immutable startup configuration: no persistence, no shared mutable
//! state, no concurrency. Failures are expected, enumerable outcomes
//! returned as [`CoastalError`] values and converted to user-facing
//! messages at this boundary.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use coastal::{CoastalToolkit, GeoPoint, TideWindow};
//!
//! let toolkit = CoastalToolkit::new();
//!
//! // A click near Mumbai harbour
//! let nearest = toolkit.nearest_station(GeoPoint::new(18.9, 72.8)).unwrap();
//! assert_eq!(nearest.station.name, "Mumbai");
//!
//! let window = TideWindow::new(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
//! let series = toolkit.tide_series(&nearest.station, &window).unwrap();
//! assert_eq!(series.len(), 72);
//! ```

pub mod config;
pub mod toolkit;

pub use coastal_core::errors::{CoastalError, CoastalResult};
pub use coastal_core::source::TideSource;
pub use coastal_core::spatial::GeoPoint;
pub use coastal_core::stations::{DistanceResult, Station, StationDirectory};
pub use coastal_core::timeseries::{FloatValue, TideSample, TideSeries, TideWindow};

pub use coastal_components::components::{
    CarbonateParameters, CarbonateSolution, CarbonateSystem, K1K2Parameterization,
    SedimentParameters, SedimentTransport, ShorelineProjector, SyntheticTideGenerator,
    TideParameters,
};

pub use config::ToolkitConfig;
pub use toolkit::{CarbonateInput, CoastalToolkit, ErosionInput, SedimentInput};
