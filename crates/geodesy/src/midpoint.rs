//! Closed-form great-circle midpoint.

use crate::sphere::to_degrees;
use crate::GeoPoint;

/// Point halfway along the great circle between `p1` and `p2`.
///
/// The longitude is `λ1 + atan2(..)` and is not wrapped: for pairs that
/// straddle the antimeridian it can fall outside -180..=180. Callers that
/// display it should pass it through [`crate::normalize_longitude`].
pub fn midpoint(p1: &GeoPoint, p2: &GeoPoint) -> GeoPoint {
    let phi1 = p1.latitude_rad();
    let lambda1 = p1.longitude_rad();
    let phi2 = p2.latitude_rad();
    let lambda2 = p2.longitude_rad();

    let bx = phi2.cos() * (lambda2 - lambda1).cos();
    let by = phi2.cos() * (lambda2 - lambda1).sin();

    let phi3 = (phi1.sin() + phi2.sin())
        .atan2(((phi1.cos() + bx) * (phi1.cos() + bx) + by * by).sqrt());
    let lambda3 = lambda1 + by.atan2(phi1.cos() + bx);

    GeoPoint::new(to_degrees(phi3), to_degrees(lambda3))
}

/// Midpoint with its longitude wrapped into -180..=180.
pub fn midpoint_normalized(p1: &GeoPoint, p2: &GeoPoint) -> GeoPoint {
    let mid = midpoint(p1, p2);
    GeoPoint::new(
        mid.latitude_deg,
        crate::normalize_longitude(mid.longitude_deg),
    )
}
