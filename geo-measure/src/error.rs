//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoMeasureError {
    /// Input values for which the requested operation is not defined.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Geometry conversion error.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
}

/// Result type with [`GeoMeasureError`] as the error variant.
pub type Result<T> = std::result::Result<T, GeoMeasureError>;
