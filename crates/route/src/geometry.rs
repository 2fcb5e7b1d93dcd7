//! GeoJSON geometry for flight legs.
//!
//! Coordinates are `[longitude, latitude]`. A great-circle leg whose
//! densified path jumps across the antimeridian is cut at the seam and
//! emitted as a `MultiLineString`, so a flat map never draws a line spanning
//! the whole width of the world.

use geodesy::{distance_km, great_circle_path, DisplayDistance, GeoPoint};
use serde::{Deserialize, Serialize};

/// How a leg is drawn. Distances are always great-circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathStyle {
    #[default]
    GreatCircle,
    Straight,
}

impl PathStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            PathStyle::GreatCircle => "great-circle",
            PathStyle::Straight => "straight",
        }
    }
}

impl std::fmt::Display for PathStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PathStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "great-circle" | "greatcircle" | "gc" => Ok(PathStyle::GreatCircle),
            "straight" | "line" => Ok(PathStyle::Straight),
            other => Err(format!(
                "unknown path style '{}' (expected great-circle or straight)",
                other
            )),
        }
    }
}

/// A GeoJSON FeatureCollection of legs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureCollection {
    /// Always "FeatureCollection".
    #[serde(rename = "type")]
    pub type_: String,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new() -> Self {
        Self {
            type_: "FeatureCollection".to_string(),
            features: Vec::new(),
        }
    }

    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }

    /// Legs between consecutive `(id, position)` stops.
    pub fn from_stops(stops: &[(&str, GeoPoint)], style: PathStyle, segments: usize) -> Self {
        let features = stops
            .windows(2)
            .map(|w| Feature::leg(w[0], w[1], style, segments))
            .collect();
        Self {
            features,
            ..Self::new()
        }
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::new()
    }
}

/// One leg as a GeoJSON Feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    /// Always "Feature".
    #[serde(rename = "type")]
    pub type_: String,
    pub geometry: Geometry,
    pub properties: LegProperties,
}

impl Feature {
    /// Build the leg from one stop to the next.
    pub fn leg(
        (from_id, from): (&str, GeoPoint),
        (to_id, to): (&str, GeoPoint),
        style: PathStyle,
        segments: usize,
    ) -> Self {
        let km = distance_km(&from, &to);
        let geometry = match style {
            PathStyle::Straight => Geometry::LineString {
                coordinates: vec![from.to_lon_lat(), to.to_lon_lat()],
            },
            PathStyle::GreatCircle => {
                Geometry::from_parts(split_at_antimeridian(
                    &great_circle_path(&from, &to, segments).to_lon_lat(),
                ))
            }
        };
        Self {
            type_: "Feature".to_string(),
            geometry,
            properties: LegProperties {
                from: from_id.to_string(),
                to: to_id.to_string(),
                distance_km: km,
                distance_nm: DisplayDistance::from_km(km).nm,
                style,
            },
        }
    }
}

/// Line geometries a leg can take.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    LineString { coordinates: Vec<[f64; 2]> },
    MultiLineString { coordinates: Vec<Vec<[f64; 2]>> },
}

impl Geometry {
    fn from_parts(mut parts: Vec<Vec<[f64; 2]>>) -> Self {
        if parts.len() == 1 {
            Geometry::LineString {
                coordinates: parts.remove(0),
            }
        } else {
            Geometry::MultiLineString { coordinates: parts }
        }
    }

    /// Number of connected pieces.
    pub fn part_count(&self) -> usize {
        match self {
            Geometry::LineString { .. } => 1,
            Geometry::MultiLineString { coordinates } => coordinates.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LegProperties {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    pub distance_nm: i64,
    pub style: PathStyle,
}

/// Cut a `[lon, lat]` line wherever consecutive points are more than 180
/// degrees of longitude apart, closing each piece at +/-180 with a linearly
/// interpolated latitude.
///
/// A sample lying on the seam is not repeated, and a piece left with a single
/// seam point is dropped.
fn split_at_antimeridian(coords: &[[f64; 2]]) -> Vec<Vec<[f64; 2]>> {
    let mut parts = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::with_capacity(coords.len());

    for &point in coords {
        if let Some(&prev) = current.last() {
            let [prev_lon, prev_lat] = prev;
            let [lon, lat] = point;
            if (lon - prev_lon).abs() > 180.0 {
                // Unwrap the next point onto the previous point's side.
                let seam = if prev_lon > 0.0 { 180.0 } else { -180.0 };
                let unwrapped = if prev_lon > 0.0 { lon + 360.0 } else { lon - 360.0 };
                let seam_lat = if prev_lon == seam {
                    prev_lat
                } else if unwrapped == seam {
                    lat
                } else {
                    let t = (seam - prev_lon) / (unwrapped - prev_lon);
                    prev_lat + t * (lat - prev_lat)
                };

                push_distinct(&mut current, [seam, seam_lat]);
                parts.push(std::mem::take(&mut current));
                current.push([-seam, seam_lat]);
            }
        }
        push_distinct(&mut current, point);
    }
    if !current.is_empty() {
        parts.push(current);
    }
    if parts.len() > 1 {
        parts.retain(|part| part.len() > 1);
    }
    parts
}

fn push_distinct(line: &mut Vec<[f64; 2]>, point: [f64; 2]) {
    if line.last() != Some(&point) {
        line.push(point);
    }
}
