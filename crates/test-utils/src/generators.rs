//! Generators for reproducible coordinate test data.
//!
//! All generators take an explicit seed so a failing case can be replayed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates `count` random `(latitude, longitude)` points spread over the
/// whole globe.
///
/// Latitude is drawn from -89..=89 to keep away from the poles, where the
/// longitude of a point is meaningless.
///
/// # Example
///
/// ```
/// use test_utils::random_points;
///
/// let points = random_points(10, 42);
/// assert_eq!(points.len(), 10);
/// assert_eq!(points, random_points(10, 42));
/// ```
pub fn random_points(count: usize, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (rng.gen_range(-89.0..=89.0), rng.gen_range(-180.0..=180.0)))
        .collect()
}

/// Creates `count` random point pairs that are neither identical nor close
/// to antipodal (central angle below ~170°).
pub fn random_pairs(count: usize, seed: u64) -> Vec<((f64, f64), (f64, f64))> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pairs = Vec::with_capacity(count);
    while pairs.len() < count {
        let a = (rng.gen_range(-89.0..=89.0), rng.gen_range(-180.0..=180.0));
        let b = (rng.gen_range(-89.0..=89.0), rng.gen_range(-180.0..=180.0));
        if a != b && !near_antipodal(a, b) {
            pairs.push((a, b));
        }
    }
    pairs
}

/// Creates `count` random pairs whose longitudes straddle the antimeridian
/// (one endpoint east of 150°E, the other west of 150°W).
pub fn random_antimeridian_pairs(count: usize, seed: u64) -> Vec<((f64, f64), (f64, f64))> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let east = (rng.gen_range(-60.0..=60.0), rng.gen_range(150.0..180.0));
            let west = (rng.gen_range(-60.0..=60.0), rng.gen_range(-180.0..-150.0));
            if rng.gen_bool(0.5) {
                (east, west)
            } else {
                (west, east)
            }
        })
        .collect()
}

/// A regular lat/lon lattice, row by row from the south-west corner.
///
/// # Example
///
/// ```
/// use test_utils::lattice_points;
///
/// let points = lattice_points(3, 4);
/// assert_eq!(points.len(), 12);
/// assert_eq!(points[0], (-80.0, -180.0));
/// ```
pub fn lattice_points(rows: usize, cols: usize) -> Vec<(f64, f64)> {
    let mut points = Vec::with_capacity(rows * cols);
    let lat_step = if rows > 1 { 160.0 / (rows - 1) as f64 } else { 0.0 };
    let lon_step = 360.0 / cols.max(1) as f64;
    for row in 0..rows {
        for col in 0..cols {
            points.push((-80.0 + row as f64 * lat_step, -180.0 + col as f64 * lon_step));
        }
    }
    points
}

fn near_antipodal(a: (f64, f64), b: (f64, f64)) -> bool {
    let (phi1, phi2) = (a.0.to_radians(), b.0.to_radians());
    let d_lambda = (a.1 - b.1).to_radians();
    let cos_delta = phi1.sin() * phi2.sin() + phi1.cos() * phi2.cos() * d_lambda.cos();
    cos_delta < -0.985
}
