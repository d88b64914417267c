//! Monitoring-station directory
//!
//! A [`StationDirectory`] is the read-only reference list of coastal
//! monitoring stations behind the nearest-station query. The built-in set
//! is a fixed table of ten Indian Ocean tide gauges; it is loaded once at
//! startup as explicit configuration and never mutated.
//!
//! # Examples
//!
//! ```rust
//! use coastal_core::spatial::GeoPoint;
//! use coastal_core::stations::StationDirectory;
//!
//! let directory = StationDirectory::indian_ocean_reference();
//! let nearest = directory.nearest(GeoPoint::new(18.95, 72.82)).unwrap();
//! assert_eq!(nearest.station.name, "Mumbai");
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{CoastalError, CoastalResult};
use crate::spatial::GeoPoint;
use crate::timeseries::FloatValue;

/// The built-in reference table: ten Indian Ocean tide gauges.
/// Order matters: nearest-station ties are broken by position in this list.
const REFERENCE_STATIONS: [(&str, &str, FloatValue, FloatValue); 10] = [
    ("500-041", "Mumbai", 18.95, 72.82),
    ("500-065", "Mormugao", 15.42, 73.8),
    ("500-067", "Karwar", 14.8, 74.13),
    ("500-081", "Cochin", 9.97, 76.27),
    ("500-083", "Chennai", 13.1, 80.29),
    ("500-084", "Visakhapatnam", 17.68, 83.27),
    ("500-085", "Paradeep", 20.32, 86.61),
    ("500-086", "Haldia", 22.03, 88.06),
    ("500-087", "Garden Reach", 22.54, 88.31),
    ("500-088", "Port Blair", 11.67, 92.75),
];

/// A coastal monitoring station.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub station_id: String,
    pub name: String,
    /// Latitude in degrees
    pub lat: FloatValue,
    /// Longitude in degrees
    pub lon: FloatValue,
}

impl Station {
    pub fn new(
        station_id: impl Into<String>,
        name: impl Into<String>,
        lat: FloatValue,
        lon: FloatValue,
    ) -> Self {
        Self {
            station_id: station_id.into(),
            name: name.into(),
            lat,
            lon,
        }
    }

    /// The station's location as a query point
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

/// A nearest-station query result. Recomputed per query, never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistanceResult {
    pub station: Station,
    /// Great-circle distance from the query point to the station
    /// unit: km
    pub distance_km: FloatValue,
}

/// Read-only collection of monitoring stations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StationDirectory {
    stations: Vec<Station>,
}

impl StationDirectory {
    /// Create a directory from an arbitrary station list.
    ///
    /// The list may be empty; [`nearest`](Self::nearest) reports that case
    /// per query rather than rejecting construction.
    pub fn new(stations: Vec<Station>) -> Self {
        Self { stations }
    }

    /// The built-in fixed table of ten Indian Ocean tide gauges.
    pub fn indian_ocean_reference() -> Self {
        Self::new(
            REFERENCE_STATIONS
                .iter()
                .map(|&(id, name, lat, lon)| Station::new(id, name, lat, lon))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Station> {
        self.stations.get(index)
    }

    /// Look up a station by its identifier
    pub fn get_by_id(&self, station_id: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.station_id == station_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    /// Find the station closest to `point` by great-circle distance.
    ///
    /// Scans the whole directory; ties are broken by first occurrence in
    /// directory order. Fails with [`CoastalError::EmptyDirectory`] if the
    /// directory has no stations.
    pub fn nearest(&self, point: GeoPoint) -> CoastalResult<DistanceResult> {
        let mut best: Option<DistanceResult> = None;

        for station in &self.stations {
            let distance_km = point.distance_km(&station.position());
            let closer = match &best {
                Some(current) => distance_km < current.distance_km,
                None => true,
            };
            if closer {
                best = Some(DistanceResult {
                    station: station.clone(),
                    distance_km,
                });
            }
        }

        match best {
            Some(result) => {
                debug!(
                    "nearest station to ({:.4}, {:.4}): {} ({}) at {:.2} km",
                    point.lat,
                    point.lon,
                    result.station.name,
                    result.station.station_id,
                    result.distance_km
                );
                Ok(result)
            }
            None => Err(CoastalError::EmptyDirectory),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_table_has_ten_stations() {
        let directory = StationDirectory::indian_ocean_reference();
        assert_eq!(directory.len(), 10);
        assert!(!directory.is_empty());
    }

    #[test]
    fn nearest_at_station_coordinates() {
        let directory = StationDirectory::indian_ocean_reference();

        let result = directory.nearest(GeoPoint::new(18.95, 72.82)).unwrap();
        assert_eq!(result.station.name, "Mumbai");
        assert_eq!(result.station.station_id, "500-041");
        assert!(
            result.distance_km < 1e-6,
            "Query at the station itself should be at distance ~0, got {:.6} km",
            result.distance_km
        );
    }

    #[test]
    fn nearest_offshore_point() {
        let directory = StationDirectory::indian_ocean_reference();

        // A point in the Bay of Bengal, closest to Port Blair
        let result = directory.nearest(GeoPoint::new(11.5, 92.0)).unwrap();
        assert_eq!(result.station.name, "Port Blair");
        assert!(result.distance_km > 0.0);
    }

    #[test]
    fn nearest_tie_broken_by_directory_order() {
        // Two stations at the same location: the first one wins
        let directory = StationDirectory::new(vec![
            Station::new("A", "First", 10.0, 75.0),
            Station::new("B", "Second", 10.0, 75.0),
        ]);

        let result = directory.nearest(GeoPoint::new(10.0, 75.0)).unwrap();
        assert_eq!(
            result.station.station_id, "A",
            "Ties should be broken by first occurrence in directory order"
        );
    }

    #[test]
    fn nearest_on_empty_directory_fails() {
        let directory = StationDirectory::new(vec![]);
        let result = directory.nearest(GeoPoint::new(0.0, 0.0));
        assert!(matches!(result, Err(CoastalError::EmptyDirectory)));
    }

    #[test]
    fn get_by_id() {
        let directory = StationDirectory::indian_ocean_reference();
        let station = directory.get_by_id("500-088").unwrap();
        assert_eq!(station.name, "Port Blair");
        assert!(directory.get_by_id("999-999").is_none());
    }

    #[test]
    fn station_ids_are_unique() {
        let directory = StationDirectory::indian_ocean_reference();
        for (i, a) in directory.iter().enumerate() {
            for b in directory.iter().skip(i + 1) {
                assert_ne!(a.station_id, b.station_id);
            }
        }
    }

    #[test]
    fn serialization_roundtrip() {
        let directory = StationDirectory::indian_ocean_reference();
        let json = serde_json::to_string(&directory).expect("Serialization failed");
        let parsed: StationDirectory =
            serde_json::from_str(&json).expect("Deserialization failed");
        assert_eq!(directory, parsed);
    }
}
