//! Sphere constants and angle helpers.

use std::f64::consts::PI;

use crate::GeoPoint;

/// FAI sphere radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometres in one international nautical mile.
pub const KM_PER_NM: f64 = 1.852;

/// Nautical miles in one kilometre.
pub const NM_PER_KM: f64 = 1.0 / KM_PER_NM;

/// Convert degrees to radians.
#[inline]
pub fn to_radians(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

/// Convert radians to degrees.
#[inline]
pub fn to_degrees(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

/// Wrap a longitude into -180..=180 by adding or subtracting whole turns.
///
/// Values already inside the range are returned unchanged, including both
/// -180 and 180. Non-finite input is returned as is.
pub fn normalize_longitude(mut lon_deg: f64) -> f64 {
    if !lon_deg.is_finite() {
        return lon_deg;
    }
    while lon_deg < -180.0 {
        lon_deg += 360.0;
    }
    while lon_deg > 180.0 {
        lon_deg -= 360.0;
    }
    lon_deg
}

/// Central angle between two points in radians (spherical law of cosines).
///
/// The cosine is clamped to -1..=1 so nearly coincident or antipodal points
/// never yield NaN from rounding alone.
pub fn angular_distance_rad(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    let (phi1, lambda1) = (p1.latitude_rad(), p1.longitude_rad());
    let (phi2, lambda2) = (p2.latitude_rad(), p2.longitude_rad());

    let cos_delta =
        phi1.sin() * phi2.sin() + phi1.cos() * phi2.cos() * (lambda1 - lambda2).cos();
    cos_delta.clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::assert_approx_eq;

    #[test]
    fn test_radian_roundtrip() {
        assert_approx_eq!(to_radians(180.0), PI, 1e-15);
        assert_approx_eq!(to_degrees(PI / 2.0), 90.0, 1e-12);
        assert_approx_eq!(to_degrees(to_radians(-73.7781)), -73.7781, 1e-12);
    }

    #[test]
    fn test_nm_constant() {
        assert_approx_eq!(NM_PER_KM * KM_PER_NM, 1.0, 1e-15);
        assert_approx_eq!(NM_PER_KM, 0.539_956_803_455_723_5, 1e-15);
    }

    #[test]
    fn test_normalize_longitude() {
        assert_eq!(normalize_longitude(0.0), 0.0);
        assert_eq!(normalize_longitude(180.0), 180.0);
        assert_eq!(normalize_longitude(-180.0), -180.0);
        assert_approx_eq!(normalize_longitude(-181.0), 179.0, 1e-12);
        assert_approx_eq!(normalize_longitude(190.0), -170.0, 1e-12);
        assert_approx_eq!(normalize_longitude(725.0), 5.0, 1e-12);
        assert!(normalize_longitude(f64::NAN).is_nan());
    }

    #[test]
    fn test_angular_distance_quarter_turn() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 90.0);
        assert_approx_eq!(angular_distance_rad(&a, &b), PI / 2.0, 1e-12);
    }

    #[test]
    fn test_angular_distance_coincident_is_zero() {
        let a = GeoPoint::new(40.6413, -73.7781);
        assert_approx_eq!(angular_distance_rad(&a, &a), 0.0, 1e-7);
    }
}
