//! Route planning state on top of the geodesy engine.
//!
//! A [`RouteSession`] holds a departure/destination pair and an ordered list
//! of reference points. It keeps a [`MarkerRegistry`] in step with its
//! selections and produces GeoJSON geometry for the pair or the route.

pub mod error;
pub mod geometry;
pub mod markers;
pub mod session;

pub use error::{Result, RouteError};
pub use geometry::{Feature, FeatureCollection, Geometry, LegProperties, PathStyle};
pub use markers::{GeoBounds, Marker, MarkerKey, MarkerRegistry};
pub use session::{FlightDetails, RouteSession, RouteTableRow};
