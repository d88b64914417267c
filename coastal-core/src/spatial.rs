//! Geographic points and great-circle distance
//!
//! This module provides [`GeoPoint`] and the haversine distance used by the
//! nearest-station query. Coordinates are degrees; conversion to radians
//! happens internally.
//!
//! # Examples
//!
//! ```rust
//! use coastal_core::spatial::GeoPoint;
//!
//! let mumbai = GeoPoint::new(18.95, 72.82);
//! let chennai = GeoPoint::new(13.1, 80.29);
//!
//! let d = mumbai.distance_km(&chennai);
//! assert!(d > 1000.0 && d < 1100.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::timeseries::FloatValue;

/// Mean Earth radius (km) for the spherical distance approximation.
pub const EARTH_RADIUS_KM: FloatValue = 6371.0;

/// A geographic coordinate in degrees.
///
/// Constructed per query from a user click; no bounds validation is
/// performed. Out-of-range coordinates still produce a mathematically
/// defined (if physically meaningless) distance rather than an error.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, conventionally in [-90, 90]
    pub lat: FloatValue,
    /// Longitude in degrees, conventionally in [-180, 180]
    pub lon: FloatValue,
}

impl GeoPoint {
    pub fn new(lat: FloatValue, lon: FloatValue) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to another point (km) via the haversine formula.
    ///
    /// $$d = 2 R \arcsin \sqrt{\sin^2\frac{\Delta\phi}{2}
    ///     + \cos\phi_1 \cos\phi_2 \sin^2\frac{\Delta\lambda}{2}}$$
    ///
    /// Deterministic and symmetric; zero iff the points coincide.
    pub fn distance_km(&self, other: &GeoPoint) -> FloatValue {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = lat2 - lat1;
        let dlon = (other.lon - self.lon).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_KM * c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;
    use std::f64::consts::PI;

    #[test]
    fn distance_to_self_is_zero() {
        let p = GeoPoint::new(18.95, 72.82);
        assert!(
            p.distance_km(&p).abs() < 1e-12,
            "Distance from a point to itself should be zero"
        );
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(18.95, 72.82);
        let b = GeoPoint::new(13.1, 80.29);

        assert!(
            is_close!(a.distance_km(&b), b.distance_km(&a)),
            "distance(a, b) should equal distance(b, a)"
        );
    }

    #[test]
    fn known_distance_mumbai_chennai() {
        // Mumbai to Chennai is roughly 1030 km along the great circle
        let mumbai = GeoPoint::new(18.95, 72.82);
        let chennai = GeoPoint::new(13.1, 80.29);

        let d = mumbai.distance_km(&chennai);
        assert!(
            (d - 1030.0).abs() < 30.0,
            "Mumbai-Chennai distance out of range: {:.1} km",
            d
        );
    }

    #[test]
    fn antipodal_points_are_half_circumference() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 180.0);

        let d = a.distance_km(&b);
        let half_circumference = PI * EARTH_RADIUS_KM;
        assert!(
            (d - half_circumference).abs() < 1.0,
            "Antipodal distance should be half the circumference: {:.1} km",
            d
        );
    }

    #[test]
    fn quarter_meridian() {
        // Equator to pole along a meridian is a quarter circumference
        let equator = GeoPoint::new(0.0, 0.0);
        let pole = GeoPoint::new(90.0, 0.0);

        let d = equator.distance_km(&pole);
        let expected = PI * EARTH_RADIUS_KM / 2.0;
        assert!(
            (d - expected).abs() < 1.0,
            "Equator-pole distance: expected {:.1}, got {:.1}",
            expected,
            d
        );
    }

    #[test]
    fn out_of_range_coordinates_still_defined() {
        // No bounds validation: the result is finite, never an error
        let a = GeoPoint::new(123.0, 400.0);
        let b = GeoPoint::new(-95.0, -200.0);

        let d = a.distance_km(&b);
        assert!(
            d.is_finite() && d >= 0.0,
            "Out-of-range coordinates should still give a finite distance, got {}",
            d
        );
    }

    #[test]
    fn serialization_roundtrip() {
        let p = GeoPoint::new(11.67, 92.75);
        let json = serde_json::to_string(&p).expect("Serialization failed");
        let parsed: GeoPoint = serde_json::from_str(&json).expect("Deserialization failed");
        assert_eq!(p, parsed);
    }
}
