//! Haversine distance and nautical-mile conversion.

use serde::{Deserialize, Serialize};

use crate::sphere::{EARTH_RADIUS_KM, KM_PER_NM, NM_PER_KM};
use crate::GeoPoint;

/// Great-circle distance in kilometres using the haversine formula.
///
/// Symmetric in its arguments and zero for coincident points. NaN inputs
/// produce a NaN result.
pub fn distance_km(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    let phi1 = p1.latitude_rad();
    let phi2 = p2.latitude_rad();
    let d_phi = phi2 - phi1;
    let d_lambda = (p2.longitude_rad() - p1.longitude_rad()).abs();

    let sin_half_phi = (d_phi / 2.0).sin();
    let sin_half_lambda = (d_lambda / 2.0).sin();
    let a = sin_half_phi * sin_half_phi
        + phi1.cos() * phi2.cos() * sin_half_lambda * sin_half_lambda;
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Kilometres to nautical miles.
#[inline]
pub fn km_to_nm(km: f64) -> f64 {
    km * NM_PER_KM
}

/// Nautical miles to kilometres.
#[inline]
pub fn nm_to_km(nm: f64) -> f64 {
    nm * KM_PER_NM
}

/// A distance rounded for display.
///
/// Both fields are rounded from the same kilometre value independently, so
/// `nm` is never derived from the already rounded `km`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayDistance {
    pub nm: i64,
    pub km: i64,
}

impl DisplayDistance {
    /// Round a kilometre distance to whole nautical miles and whole kilometres.
    pub fn from_km(km: f64) -> Self {
        Self {
            nm: round_half_up(km_to_nm(km)),
            km: round_half_up(km),
        }
    }
}

impl std::fmt::Display for DisplayDistance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} nm ({} km)", self.nm, self.km)
    }
}

/// Round to the nearest integer with halves going towards positive infinity.
///
/// Distances are never negative, but the rule is kept consistent for any
/// input. Non-finite values saturate through the float-to-int cast.
pub(crate) fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
