//! Reference data record types.

use geodesy::GeoPoint;
use serde::{Deserialize, Serialize};

/// The three kinds of reference point a route can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavKind {
    Airport,
    Navaid,
    Waypoint,
}

impl NavKind {
    /// Lowercase name used in output and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            NavKind::Airport => "airport",
            NavKind::Navaid => "navaid",
            NavKind::Waypoint => "waypoint",
        }
    }
}

impl std::fmt::Display for NavKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An airport identified by its ICAO code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    /// ICAO code (e.g., "NZWN").
    pub code: String,
    pub name: String,
    /// Often empty: the public airport list has no city column.
    #[serde(default)]
    pub city: String,
    /// ISO 3166-1 alpha-2 country code, or a country name for built-in samples.
    pub country: String,
    pub position: GeoPoint,
}

impl Airport {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        position: GeoPoint,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            city: city.into(),
            country: country.into(),
            position,
        }
    }
}

/// A radio navigation aid (VOR, NDB, DME, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Navaid {
    pub ident: String,
    pub name: String,
    /// Navaid type as published (e.g., "VOR-DME").
    pub kind: String,
    pub position: GeoPoint,
    /// Frequency in kHz as published; absent for some navaid types.
    #[serde(default)]
    pub frequency_khz: Option<String>,
}

/// A named fix or reporting point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub name: String,
    /// Lowercased type column (e.g., "reporting point"); may be empty.
    #[serde(default)]
    pub kind: String,
    pub position: GeoPoint,
}

/// Any reference point that can appear in a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NavPoint {
    Airport(Airport),
    Navaid(Navaid),
    Waypoint(Waypoint),
}

impl NavPoint {
    pub fn kind(&self) -> NavKind {
        match self {
            NavPoint::Airport(_) => NavKind::Airport,
            NavPoint::Navaid(_) => NavKind::Navaid,
            NavPoint::Waypoint(_) => NavKind::Waypoint,
        }
    }

    /// Stable identifier: ICAO code, navaid ident or waypoint name.
    pub fn id(&self) -> &str {
        match self {
            NavPoint::Airport(a) => &a.code,
            NavPoint::Navaid(n) => &n.ident,
            NavPoint::Waypoint(w) => &w.name,
        }
    }

    /// Human-readable name.
    ///
    /// Waypoints carry no separate name, so their type is used, falling back
    /// to "Waypoint".
    pub fn display_name(&self) -> &str {
        match self {
            NavPoint::Airport(a) => &a.name,
            NavPoint::Navaid(n) => &n.name,
            NavPoint::Waypoint(w) if w.kind.is_empty() => "Waypoint",
            NavPoint::Waypoint(w) => &w.kind,
        }
    }

    /// Label for a route table row: `CODE - Name` for airports and navaids,
    /// the bare name for waypoints.
    pub fn route_label(&self) -> String {
        match self {
            NavPoint::Airport(a) => format!("{} - {}", a.code, a.name),
            NavPoint::Navaid(n) => format!("{} - {}", n.ident, n.name),
            NavPoint::Waypoint(w) => w.name.clone(),
        }
    }

    pub fn position(&self) -> GeoPoint {
        match self {
            NavPoint::Airport(a) => a.position,
            NavPoint::Navaid(n) => n.position,
            NavPoint::Waypoint(w) => w.position,
        }
    }

    /// Secondary line shown under the name in result lists.
    pub fn details(&self) -> String {
        match self {
            NavPoint::Airport(a) => a.country.clone(),
            NavPoint::Navaid(n) => format!(
                "{} - {}",
                n.kind,
                n.frequency_khz.as_deref().unwrap_or("N/A")
            ),
            NavPoint::Waypoint(w) => format!(
                "{:.4}, {:.4}",
                w.position.latitude_deg, w.position.longitude_deg
            ),
        }
    }
}

impl From<Airport> for NavPoint {
    fn from(airport: Airport) -> Self {
        NavPoint::Airport(airport)
    }
}

impl From<Navaid> for NavPoint {
    fn from(navaid: Navaid) -> Self {
        NavPoint::Navaid(navaid)
    }
}

impl From<Waypoint> for NavPoint {
    fn from(waypoint: Waypoint) -> Self {
        NavPoint::Waypoint(waypoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navaid(freq: Option<&str>) -> Navaid {
        Navaid {
            ident: "WN".to_string(),
            name: "Wellington".to_string(),
            kind: "VOR-DME".to_string(),
            position: GeoPoint::new(-41.3336, 174.8192),
            frequency_khz: freq.map(str::to_string),
        }
    }

    #[test]
    fn test_navaid_details() {
        assert_eq!(NavPoint::from(navaid(Some("112300"))).details(), "VOR-DME - 112300");
        assert_eq!(NavPoint::from(navaid(None)).details(), "VOR-DME - N/A");
    }

    #[test]
    fn test_waypoint_name_falls_back() {
        let mut wp = Waypoint {
            name: "KAPTI".to_string(),
            kind: String::new(),
            position: GeoPoint::new(-41.3319, 174.8056),
        };
        assert_eq!(NavPoint::from(wp.clone()).display_name(), "Waypoint");
        wp.kind = "reporting point".to_string();
        let point = NavPoint::from(wp);
        assert_eq!(point.display_name(), "reporting point");
        assert_eq!(point.id(), "KAPTI");
        assert_eq!(point.details(), "-41.3319, 174.8056");
    }

    #[test]
    fn test_route_label() {
        assert_eq!(NavPoint::from(navaid(None)).route_label(), "WN - Wellington");
        let airport = Airport::new("NZWN", "Wellington", "", "NZ", GeoPoint::new(-41.3272, 174.805));
        assert_eq!(NavPoint::from(airport).route_label(), "NZWN - Wellington");
        let wp = Waypoint {
            name: "TAWHA".to_string(),
            kind: "enroute".to_string(),
            position: GeoPoint::new(-40.8812, 175.0021),
        };
        assert_eq!(NavPoint::from(wp).route_label(), "TAWHA");
    }

    #[test]
    fn test_nav_point_serializes_with_type_tag() {
        let json = serde_json::to_value(NavPoint::from(navaid(None))).unwrap();
        assert_eq!(json["type"], "navaid");
        assert_eq!(json["ident"], "WN");
    }
}
