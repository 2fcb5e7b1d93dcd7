//! Error types for route session operations.

use thiserror::Error;

/// Errors raised by [`crate::RouteSession`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Departure and destination would be the same airport.
    #[error("departure and destination cannot both be {0}")]
    SameAirport(String),

    /// An operation needs both a departure and a destination.
    #[error("select both a departure and a destination airport first")]
    IncompleteSelection,
}

/// Result type for route operations.
pub type Result<T> = std::result::Result<T, RouteError>;
