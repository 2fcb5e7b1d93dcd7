//! Great-circle geometry on a spherical earth.
//!
//! All calculations use the FAI sphere (radius 6371.0 km) so that distances
//! match the values published by the usual great-circle mapping tools.
//! Every function here is pure: the same inputs always produce the same
//! outputs and nothing is validated. Out-of-range or NaN coordinates
//! propagate as NaN instead of panicking; range checking belongs to whoever
//! constructs the points (see [`GeoPoint::checked`]).

pub mod bearing;
pub mod distance;
pub mod error;
pub mod midpoint;
pub mod path;
pub mod point;
pub mod sphere;

pub use bearing::initial_bearing_deg;
pub use distance::{distance_km, km_to_nm, nm_to_km, DisplayDistance};
pub use error::{GeoError, GeoResult};
pub use midpoint::{midpoint, midpoint_normalized};
pub use path::{great_circle_path, GreatCirclePath, DEFAULT_SEGMENTS};
pub use point::GeoPoint;
pub use sphere::{
    angular_distance_rad, normalize_longitude, to_degrees, to_radians, EARTH_RADIUS_KM,
    KM_PER_NM, NM_PER_KM,
};
