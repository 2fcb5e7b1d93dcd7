//! Error types for coordinate construction.

use thiserror::Error;

/// Result type alias using GeoError.
pub type GeoResult<T> = Result<T, GeoError>;

/// Errors raised when building a validated [`crate::GeoPoint`].
///
/// The geometry functions themselves never fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("latitude {0} is out of range (valid: -90..=90)")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is out of range (valid: -180..=180)")]
    LongitudeOutOfRange(f64),
}
