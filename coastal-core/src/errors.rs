use thiserror::Error;

use crate::timeseries::FloatValue;

/// Error type for invalid operations.
///
/// Every failure in the toolkit is an expected, enumerable outcome of a
/// pure computation, so errors are returned as values rather than raised
/// and caught. Retrying never changes the result.
#[derive(Error, Debug)]
pub enum CoastalError {
    /// An input value lies outside the domain of the requested computation.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Bed shear stress is below the critical threshold for sediment motion.
    ///
    /// This is a legitimate physical outcome (no bedload transport occurs),
    /// reported distinctly so callers never see a NaN transport rate.
    #[error("bed shear stress {shear:.4} Pa is below the critical threshold {critical:.4} Pa; no bedload transport occurs")]
    SubcriticalShear {
        shear: FloatValue,
        critical: FloatValue,
    },
    /// The carbonate equilibrium solver rejected its inputs or failed to converge.
    #[error("carbonate solver: {0}")]
    ChemistrySolver(String),
    /// A nearest-station query was made against an empty station directory.
    #[error("station directory is empty")]
    EmptyDirectory,
}

/// Convenience type for `Result<T, CoastalError>`.
pub type CoastalResult<T> = Result<T, CoastalError>;
