//! Bedload sediment transport
//!
//! Computes a bedload transport rate from a depth-averaged flow velocity
//! and a median grain size using a Meyer-Peter–Müller-style excess shear
//! stress formula.
//!
//! # What This Component Does
//!
//! 1. Converts the median grain size to metres and estimates the bed shear
//!    stress exerted by the flow:
//!
//!    $$\tau = \rho g d_{50} u$$
//!
//! 2. Estimates the critical shear stress for incipient motion from a
//!    Shields-style threshold coefficient:
//!
//!    $$\tau_c = \theta_c \, \rho g d_{50}$$
//!
//! 3. Evaluates the transport rate from the excess stress:
//!
//!    $$q_s = k \, (\tau - \tau_c)^{3/2}$$
//!
//! # Sub-critical flow
//!
//! When $\tau < \tau_c$ the excess stress is negative and the fractional
//! power is undefined over the reals. That regime is a legitimate physical
//! outcome (the flow cannot move the bed) and is reported as
//! [`CoastalError::SubcriticalShear`] rather than a NaN. Exactly at the
//! threshold the excess is zero and the rate is a valid 0.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{GRAVITY, SEAWATER_DENSITY};
use coastal_core::errors::{CoastalError, CoastalResult};
use coastal_core::timeseries::FloatValue;

/// Parameters for the bedload transport formula
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SedimentParameters {
    /// Density of the transporting water
    /// unit: kg / m^3
    /// default: 1025.0 (seawater)
    pub water_density: FloatValue,
    /// Gravitational acceleration
    /// unit: m / s^2
    /// default: 9.81
    pub gravity: FloatValue,
    /// Shields-style threshold coefficient for incipient motion
    /// (dimensionless)
    /// default: 0.047
    pub critical_shields: FloatValue,
    /// Transport coefficient of the excess-stress power law
    /// (dimensionless)
    /// default: 8.0
    pub transport_coefficient: FloatValue,
}

impl Default for SedimentParameters {
    fn default() -> Self {
        Self {
            water_density: SEAWATER_DENSITY,
            gravity: GRAVITY,
            critical_shields: 0.047,
            transport_coefficient: 8.0,
        }
    }
}

/// Bedload sediment transport model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SedimentTransport {
    parameters: SedimentParameters,
}

impl SedimentTransport {
    /// Create a model with the default seawater parameters.
    pub fn new() -> Self {
        Self::from_parameters(SedimentParameters::default())
    }

    pub fn from_parameters(parameters: SedimentParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &SedimentParameters {
        &self.parameters
    }

    /// Bed shear stress exerted by the flow (Pa).
    pub fn bed_shear_stress(&self, velocity_m_s: FloatValue, d50_m: FloatValue) -> FloatValue {
        self.parameters.water_density * self.parameters.gravity * d50_m * velocity_m_s
    }

    /// Critical shear stress for incipient motion (Pa).
    pub fn critical_shear_stress(&self, d50_m: FloatValue) -> FloatValue {
        self.parameters.critical_shields
            * self.parameters.water_density
            * self.parameters.gravity
            * d50_m
    }

    /// Bedload transport rate (m³/s per metre of bed width).
    ///
    /// # Arguments
    ///
    /// * `velocity_m_s` - Depth-averaged flow velocity (m/s)
    /// * `grain_size_mm` - Median grain size D50 (mm), must be positive
    ///
    /// # Errors
    ///
    /// * [`CoastalError::InvalidInput`] - non-positive grain size or
    ///   non-finite inputs
    /// * [`CoastalError::SubcriticalShear`] - shear below the critical
    ///   threshold (no transport occurs)
    pub fn transport_rate(
        &self,
        velocity_m_s: FloatValue,
        grain_size_mm: FloatValue,
    ) -> CoastalResult<FloatValue> {
        if !grain_size_mm.is_finite() || grain_size_mm <= 0.0 {
            return Err(CoastalError::InvalidInput(format!(
                "median grain size must be a positive number of millimetres, got {}",
                grain_size_mm
            )));
        }
        if !velocity_m_s.is_finite() {
            return Err(CoastalError::InvalidInput(format!(
                "flow velocity must be finite, got {}",
                velocity_m_s
            )));
        }

        let d50_m = grain_size_mm / 1000.0;
        let shear = self.bed_shear_stress(velocity_m_s, d50_m);
        let critical = self.critical_shear_stress(d50_m);

        if shear < critical {
            return Err(CoastalError::SubcriticalShear { shear, critical });
        }

        let rate = self.parameters.transport_coefficient * (shear - critical).powf(1.5);
        debug!(
            "bedload transport: tau={:.4} Pa, tau_c={:.4} Pa, qs={:.4} m^3/s/m",
            shear, critical, rate
        );
        Ok(rate)
    }
}

impl Default for SedimentTransport {
    fn default() -> Self {
        Self::new()
    }
}
