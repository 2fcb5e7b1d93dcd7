//! Initial great-circle bearing (forward azimuth).

use crate::sphere::to_degrees;
use crate::GeoPoint;

/// Initial bearing from `p1` towards `p2` in degrees clockwise from true
/// north, in 0..360.
///
/// For coincident points the direction is undefined; `atan2(0, 0)` yields 0
/// and that is what is returned.
pub fn initial_bearing_deg(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    let phi1 = p1.latitude_rad();
    let phi2 = p2.latitude_rad();
    let d_lambda = p2.longitude_rad() - p1.longitude_rad();

    let y = d_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lambda.cos();

    let bearing = (to_degrees(y.atan2(x)) + 360.0) % 360.0;
    // A tiny negative angle plus 360 can round to exactly 360.0.
    if bearing >= 360.0 {
        0.0
    } else {
        bearing
    }
}
