//! Physical constants shared across components

use coastal_core::timeseries::FloatValue;

/// Density of seawater.
/// unit: kg / m^3
pub const SEAWATER_DENSITY: FloatValue = 1025.0;

/// Gravitational acceleration.
/// unit: m / s^2
pub const GRAVITY: FloatValue = 9.81;

/// Offset between Celsius and Kelvin scales.
pub const CELSIUS_TO_KELVIN: FloatValue = 273.15;
