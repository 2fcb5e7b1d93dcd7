//! Reference data for route planning: airports, navaids and waypoints.
//!
//! Data is read from CSV files with an explicit header-to-field mapping.
//! Each row is validated on its own; rows that cannot be used are either
//! collected into a [`LoadReport`] or abort the load, depending on the
//! [`RowPolicy`].

pub mod coords;
pub mod database;
pub mod error;
pub mod loader;
pub mod sample;
pub mod schema;
pub mod types;

pub use database::{NavDatabase, SearchLimits, SearchResult, DEFAULT_SEARCH_LIMIT};
pub use error::{NavDataError, Result};
pub use loader::{
    load_airports, load_airports_from_path, load_navaids, load_navaids_from_path, load_waypoints,
    load_waypoints_from_path, LoadReport, RowIssue, RowPolicy,
};
pub use sample::sample_airports;
pub use types::{Airport, NavKind, NavPoint, Navaid, Waypoint};
