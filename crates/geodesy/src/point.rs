//! Geographic point type.

use serde::{Deserialize, Serialize};

use crate::error::{GeoError, GeoResult};

/// A position on the sphere in decimal degrees.
///
/// Latitude is expected in -90..=90 and longitude in -180..=180, but
/// [`GeoPoint::new`] does not enforce it. Use [`GeoPoint::checked`] when the
/// values come from untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl GeoPoint {
    /// Create a point without range checks.
    pub const fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Create a point, rejecting NaN and out-of-range values.
    pub fn checked(latitude_deg: f64, longitude_deg: f64) -> GeoResult<Self> {
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(GeoError::LatitudeOutOfRange(latitude_deg));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(GeoError::LongitudeOutOfRange(longitude_deg));
        }
        Ok(Self::new(latitude_deg, longitude_deg))
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        crate::sphere::to_radians(self.latitude_deg)
    }

    /// Longitude in radians.
    pub fn longitude_rad(&self) -> f64 {
        crate::sphere::to_radians(self.longitude_deg)
    }

    /// Coordinates as `[longitude, latitude]`, the GeoJSON axis order.
    pub fn to_lon_lat(&self) -> [f64; 2] {
        [self.longitude_deg, self.latitude_deg]
    }

    /// True when both coordinates are exactly equal (no tolerance).
    pub fn same_position(&self, other: &GeoPoint) -> bool {
        self.latitude_deg == other.latitude_deg && self.longitude_deg == other.longitude_deg
    }
}

impl From<(f64, f64)> for GeoPoint {
    /// Build from a `(latitude, longitude)` tuple.
    fn from((latitude_deg, longitude_deg): (f64, f64)) -> Self {
        Self::new(latitude_deg, longitude_deg)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude_deg, self.longitude_deg)
    }
}
