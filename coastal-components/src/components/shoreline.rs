//! Shoreline retreat projection
//!
//! Linear extrapolation of shoreline retreat from a historical erosion
//! rate. Intentionally non-predictive: there is no uncertainty and no
//! process representation. It answers "at the observed rate, how far in
//! `n` years" and nothing more.

use serde::{Deserialize, Serialize};

use coastal_core::errors::{CoastalError, CoastalResult};
use coastal_core::timeseries::FloatValue;

/// Shortest projection horizon the dashboard accepts (years)
pub const MIN_PROJECTION_YEARS: u32 = 1;

/// Longest projection horizon the dashboard accepts (years)
pub const MAX_PROJECTION_YEARS: u32 = 100;

/// Check a projection horizon against the dashboard's input contract.
///
/// The bound belongs to the caller, not to
/// [`ShorelineProjector::project`], which stays a pure multiply.
pub fn validate_projection_years(years: u32) -> CoastalResult<()> {
    if (MIN_PROJECTION_YEARS..=MAX_PROJECTION_YEARS).contains(&years) {
        Ok(())
    } else {
        Err(CoastalError::InvalidInput(format!(
            "projection horizon must be between {} and {} years, got {}",
            MIN_PROJECTION_YEARS, MAX_PROJECTION_YEARS, years
        )))
    }
}

/// Linear shoreline retreat projector.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct ShorelineProjector;

impl ShorelineProjector {
    pub fn new() -> Self {
        Self
    }

    /// Projected retreat distance (m) after `years` at `rate_m_per_year`.
    ///
    /// A negative rate projects accretion as a negative retreat.
    pub fn project(&self, rate_m_per_year: FloatValue, years: u32) -> FloatValue {
        rate_m_per_year * years as FloatValue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_projection() {
        let projector = ShorelineProjector::new();
        assert_eq!(projector.project(0.5, 10), 5.0);
    }

    #[test]
    fn one_year_projects_the_rate_itself() {
        let projector = ShorelineProjector::new();
        for rate in [0.0, 0.3, 1.7, -0.4] {
            assert_eq!(projector.project(rate, 1), rate);
        }
    }

    #[test]
    fn projection_is_linear_in_years() {
        let projector = ShorelineProjector::new();
        assert_eq!(
            projector.project(0.25, 80),
            2.0 * projector.project(0.25, 40)
        );
    }

    #[test]
    fn accretion_projects_negative_retreat() {
        let projector = ShorelineProjector::new();
        assert!(projector.project(-0.5, 10) < 0.0);
    }

    #[test]
    fn horizon_bounds() {
        assert!(validate_projection_years(1).is_ok());
        assert!(validate_projection_years(100).is_ok());
        assert!(matches!(
            validate_projection_years(0),
            Err(CoastalError::InvalidInput(_))
        ));
        assert!(matches!(
            validate_projection_years(101),
            Err(CoastalError::InvalidInput(_))
        ));
    }
}
