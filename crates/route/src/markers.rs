//! Map marker bookkeeping.
//!
//! The registry owns whatever handle a renderer uses for a marker and keys it
//! by what the marker stands for, so that re-selecting an endpoint replaces
//! the old marker instead of stacking a new one on top.

use std::collections::BTreeMap;

use geodesy::GeoPoint;
use navdata::NavKind;
use serde::Serialize;

/// What a marker represents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKey {
    Departure,
    Destination,
    /// A route point, keyed by kind and identifier.
    Route(NavKind, String),
}

impl MarkerKey {
    pub fn is_route(&self) -> bool {
        matches!(self, MarkerKey::Route(..))
    }
}

/// Marker handle used when no renderer is attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub label: String,
    pub position: GeoPoint,
}

#[derive(Debug, Clone)]
struct Entry<H> {
    position: GeoPoint,
    handle: H,
}

/// Markers currently on the map, one per key.
#[derive(Debug, Clone)]
pub struct MarkerRegistry<H> {
    entries: BTreeMap<MarkerKey, Entry<H>>,
}

impl<H> Default for MarkerRegistry<H> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<H> MarkerRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a marker, returning the handle it replaces so the caller can
    /// take the old one off the map.
    pub fn insert(&mut self, key: MarkerKey, position: GeoPoint, handle: H) -> Option<H> {
        self.entries
            .insert(key, Entry { position, handle })
            .map(|old| old.handle)
    }

    pub fn remove(&mut self, key: &MarkerKey) -> Option<H> {
        self.entries.remove(key).map(|e| e.handle)
    }

    pub fn get(&self, key: &MarkerKey) -> Option<&H> {
        self.entries.get(key).map(|e| &e.handle)
    }

    /// Remove every route marker, leaving departure and destination in place.
    pub fn remove_route_markers(&mut self) -> Vec<H> {
        let keys: Vec<MarkerKey> = self
            .entries
            .keys()
            .filter(|k| k.is_route())
            .cloned()
            .collect();
        keys.iter()
            .filter_map(|k| self.entries.remove(k))
            .map(|e| e.handle)
            .collect()
    }

    /// Marker positions in key order.
    pub fn positions(&self) -> Vec<GeoPoint> {
        self.entries.values().map(|e| e.position).collect()
    }

    pub fn keys(&self) -> impl Iterator<Item = &MarkerKey> {
        self.entries.keys()
    }

    /// Box around every marker, or `None` when there are no markers.
    pub fn bounds(&self) -> Option<GeoBounds> {
        GeoBounds::from_points(self.entries.values().map(|e| e.position))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Latitude/longitude box in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoBounds {
    /// Smallest box containing all points, or `None` for no points.
    pub fn from_points(points: impl IntoIterator<Item = GeoPoint>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self {
            south: first.latitude_deg,
            west: first.longitude_deg,
            north: first.latitude_deg,
            east: first.longitude_deg,
        };
        for p in points {
            bounds.extend(p);
        }
        Some(bounds)
    }

    pub fn extend(&mut self, p: GeoPoint) {
        self.south = self.south.min(p.latitude_deg);
        self.north = self.north.max(p.latitude_deg);
        self.west = self.west.min(p.longitude_deg);
        self.east = self.east.max(p.longitude_deg);
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    pub fn contains(&self, p: GeoPoint) -> bool {
        (self.south..=self.north).contains(&p.latitude_deg)
            && (self.west..=self.east).contains(&p.longitude_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route_key(id: &str) -> MarkerKey {
        MarkerKey::Route(NavKind::Waypoint, id.to_string())
    }

    #[test]
    fn test_insert_replaces_and_returns_old_handle() {
        let mut registry = MarkerRegistry::new();
        assert_eq!(registry.insert(MarkerKey::Departure, GeoPoint::new(1.0, 2.0), "a"), None);
        assert_eq!(
            registry.insert(MarkerKey::Departure, GeoPoint::new(3.0, 4.0), "b"),
            Some("a")
        );
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&MarkerKey::Departure), Some(&"b"));
        assert_eq!(registry.positions(), vec![GeoPoint::new(3.0, 4.0)]);
    }

    #[test]
    fn test_remove_route_markers_keeps_endpoints() {
        let mut registry = MarkerRegistry::new();
        registry.insert(MarkerKey::Departure, GeoPoint::new(0.0, 0.0), 1);
        registry.insert(MarkerKey::Destination, GeoPoint::new(1.0, 1.0), 2);
        registry.insert(route_key("KAPTI"), GeoPoint::new(2.0, 2.0), 3);
        registry.insert(route_key("TAWHA"), GeoPoint::new(3.0, 3.0), 4);

        let mut removed = registry.remove_route_markers();
        removed.sort();
        assert_eq!(removed, vec![3, 4]);
        assert_eq!(registry.len(), 2);
        assert!(registry.keys().all(|k| !k.is_route()));
    }

    #[test]
    fn test_bounds() {
        let mut registry: MarkerRegistry<()> = MarkerRegistry::new();
        assert!(registry.bounds().is_none());

        registry.insert(MarkerKey::Departure, GeoPoint::new(-41.3, 174.8), ());
        registry.insert(MarkerKey::Destination, GeoPoint::new(-37.0, 174.7), ());
        registry.insert(route_key("X"), GeoPoint::new(-39.0, 176.0), ());
        let bounds = registry.bounds().unwrap();
        assert_eq!(bounds.south, -41.3);
        assert_eq!(bounds.north, -37.0);
        assert_eq!(bounds.west, 174.7);
        assert_eq!(bounds.east, 176.0);
        assert!(bounds.contains(GeoPoint::new(-39.0, 175.0)));
        assert!(!bounds.contains(GeoPoint::new(-36.0, 175.0)));
    }
}
