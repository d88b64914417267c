//! Tide source capability
//!
//! [`TideSource`] is the seam between the toolkit and whatever produces
//! tide-height data. The shipped implementation is a synthetic generator;
//! a real observation feed can replace it later without changing callers.

use crate::errors::CoastalResult;
use crate::stations::Station;
use crate::timeseries::{TideSeries, TideWindow};

/// Something that can produce a tide-height series for a station.
///
/// Implementations must be deterministic per request; the toolkit performs
/// no caching or retries on top of them.
#[typetag::serde(tag = "type")]
pub trait TideSource: std::fmt::Debug + Send + Sync {
    /// Produce the series covering `window` at `station`.
    fn fetch(&self, station: &Station, window: &TideWindow) -> CoastalResult<TideSeries>;
}
