//! Great-circle path sampling (spherical linear interpolation).
//!
//! A path is sampled at evenly spaced fractions of the central angle between
//! the two endpoints, not at even Cartesian spacing. When the endpoints lie
//! more than 180° apart in longitude, the positive-longitude endpoint is
//! shifted west by a full turn before interpolating so the path takes the
//! short way across the antimeridian, and each output longitude is wrapped
//! back into -180..=180.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::sphere::{angular_distance_rad, normalize_longitude, to_degrees, to_radians};
use crate::GeoPoint;

/// Number of segments used when the caller has no preference (101 points).
pub const DEFAULT_SEGMENTS: usize = 100;

/// An ordered list of points along a great circle, start first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GreatCirclePath {
    points: Vec<GeoPoint>,
}

impl GreatCirclePath {
    /// All sampled points, in order of increasing fraction.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Number of sampled points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Paths always hold at least the start point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point of the path.
    pub fn start(&self) -> Option<&GeoPoint> {
        self.points.first()
    }

    /// Last point of the path.
    pub fn end(&self) -> Option<&GeoPoint> {
        self.points.last()
    }

    /// True for the single-point path produced by identical endpoints.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() == 1
    }

    /// The path as `[longitude, latitude]` pairs.
    pub fn to_lon_lat(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(GeoPoint::to_lon_lat).collect()
    }

    /// Consume the path, returning the points.
    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }
}

impl IntoIterator for GreatCirclePath {
    type Item = GeoPoint;
    type IntoIter = std::vec::IntoIter<GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a GreatCirclePath {
    type Item = &'a GeoPoint;
    type IntoIter = std::slice::Iter<'a, GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl std::ops::Index<usize> for GreatCirclePath {
    type Output = GeoPoint;

    fn index(&self, index: usize) -> &GeoPoint {
        &self.points[index]
    }
}

/// Sample `num_segments + 1` points along the great circle from `p1` to `p2`.
///
/// Identical endpoints return the single point `[p1]`. A segment count of
/// zero is treated as one, giving just the two endpoints. Exactly antipodal
/// endpoints have no unique great circle and yield NaN coordinates.
pub fn great_circle_path(p1: &GeoPoint, p2: &GeoPoint, num_segments: usize) -> GreatCirclePath {
    if p1.same_position(p2) {
        debug!(point = %p1, "start and end are identical, returning single-point path");
        return GreatCirclePath { points: vec![*p1] };
    }

    let segments = num_segments.max(1);

    let crosses_antimeridian = (p1.longitude_deg - p2.longitude_deg).abs() > 180.0;
    let (start_lon, end_lon) = if crosses_antimeridian {
        if p1.longitude_deg > 0.0 {
            (p1.longitude_deg - 360.0, p2.longitude_deg)
        } else {
            (p1.longitude_deg, p2.longitude_deg - 360.0)
        }
    } else {
        (p1.longitude_deg, p2.longitude_deg)
    };

    let start = GeoPoint::new(p1.latitude_deg, start_lon);
    let end = GeoPoint::new(p2.latitude_deg, end_lon);

    let phi1 = start.latitude_rad();
    let lambda1 = to_radians(start_lon);
    let phi2 = end.latitude_rad();
    let lambda2 = to_radians(end_lon);

    let delta = angular_distance_rad(&start, &end);
    let sin_delta = delta.sin();

    // Distinct points closer than the acos resolution: slerp would divide by
    // zero, and the arc is indistinguishable from a straight segment.
    if delta == 0.0 {
        return linear_path(p1, p2, segments);
    }

    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let f = i as f64 / segments as f64;

        let a = ((1.0 - f) * delta).sin() / sin_delta;
        let b = (f * delta).sin() / sin_delta;

        let x = a * phi1.cos() * lambda1.cos() + b * phi2.cos() * lambda2.cos();
        let y = a * phi1.cos() * lambda1.sin() + b * phi2.cos() * lambda2.sin();
        let z = a * phi1.sin() + b * phi2.sin();

        let phi = z.atan2((x * x + y * y).sqrt());
        let lambda = y.atan2(x);

        let mut lon = to_degrees(lambda);
        if crosses_antimeridian {
            lon = normalize_longitude(lon);
        }
        points.push(GeoPoint::new(to_degrees(phi), lon));
    }

    GreatCirclePath { points }
}

fn linear_path(p1: &GeoPoint, p2: &GeoPoint, segments: usize) -> GreatCirclePath {
    let points = (0..=segments)
        .map(|i| {
            let f = i as f64 / segments as f64;
            GeoPoint::new(
                p1.latitude_deg + f * (p2.latitude_deg - p1.latitude_deg),
                p1.longitude_deg + f * (p2.longitude_deg - p1.longitude_deg),
            )
        })
        .collect();
    GreatCirclePath { points }
}
