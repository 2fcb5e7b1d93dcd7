//! Header-to-field mapping for the reference CSV layouts.
//!
//! Columns are located by header name, never by fixed position, except for
//! the waypoint type column whose header varies between exports and which
//! falls back to the third column.

use std::collections::HashMap;

use csv::StringRecord;

use crate::error::{NavDataError, Result};
use crate::types::NavKind;

/// One column the loader reads.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    /// Header text, compared case-insensitively with whitespace collapsed.
    pub name: &'static str,
    pub required: bool,
    /// Position to use when the header is absent.
    pub fallback_index: Option<usize>,
}

impl Column {
    const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            fallback_index: None,
        }
    }

    const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            fallback_index: None,
        }
    }

    const fn positional(name: &'static str, index: usize) -> Self {
        Self {
            name,
            required: false,
            fallback_index: Some(index),
        }
    }
}

pub mod airports {
    use super::Column;

    pub const ICAO_CODE: &str = "icao_code";
    pub const NAME: &str = "name";
    pub const LATITUDE: &str = "latitude_deg";
    pub const LONGITUDE: &str = "longitude_deg";
    pub const COUNTRY: &str = "iso_country";
    pub const TYPE: &str = "type";

    /// OurAirports `airports.csv`.
    pub const COLUMNS: &[Column] = &[
        Column::required(ICAO_CODE),
        Column::required(NAME),
        Column::required(LATITUDE),
        Column::required(LONGITUDE),
        Column::required(COUNTRY),
        Column::required(TYPE),
    ];
}

pub mod navaids {
    use super::Column;

    pub const IDENT: &str = "ident";
    pub const NAME: &str = "name";
    pub const TYPE: &str = "type";
    pub const LATITUDE: &str = "latitude_deg";
    pub const LONGITUDE: &str = "longitude_deg";
    pub const FREQUENCY: &str = "frequency_khz";

    /// OurAirports `navaids.csv`.
    pub const COLUMNS: &[Column] = &[
        Column::required(IDENT),
        Column::required(NAME),
        Column::required(TYPE),
        Column::required(LATITUDE),
        Column::required(LONGITUDE),
        Column::optional(FREQUENCY),
    ];
}

pub mod waypoints {
    use super::Column;

    pub const NAME: &str = "Name";
    pub const LATITUDE: &str = "Latitude (WGS84)";
    pub const LONGITUDE: &str = "Longitude (WGS84)";
    pub const TYPE: &str = "Type";

    /// Waypoint list export.
    pub const COLUMNS: &[Column] = &[
        Column::required(NAME),
        Column::required(LATITUDE),
        Column::required(LONGITUDE),
        Column::positional(TYPE, 2),
    ];
}

/// Resolved column positions for one file.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    indices: HashMap<&'static str, usize>,
    /// Number of fields a row needs to reach every resolved column.
    min_fields: usize,
}

impl ColumnMap {
    /// Locate `columns` in the header row.
    pub fn resolve(kind: NavKind, headers: &StringRecord, columns: &[Column]) -> Result<Self> {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();

        let mut indices = HashMap::with_capacity(columns.len());
        for column in columns {
            let wanted = normalize_header(column.name);
            let found = normalized.iter().position(|h| *h == wanted);
            match (found, column.fallback_index) {
                (Some(index), _) => {
                    indices.insert(column.name, index);
                }
                (None, Some(index)) if index < headers.len() => {
                    indices.insert(column.name, index);
                }
                (None, _) if column.required => {
                    return Err(NavDataError::missing_column(kind, column.name));
                }
                (None, _) => {}
            }
        }

        let min_fields = indices.values().map(|i| i + 1).max().unwrap_or(0);
        Ok(Self {
            indices,
            min_fields,
        })
    }

    /// Trimmed field value, or `None` when the column is unmapped or the row
    /// is too short.
    pub fn get<'r>(&self, record: &'r StringRecord, column: &str) -> Option<&'r str> {
        self.indices
            .get(column)
            .and_then(|&i| record.get(i))
            .map(str::trim)
    }

    /// Trimmed field value, empty when absent.
    pub fn text(&self, record: &StringRecord, column: &str) -> String {
        self.get(record, column).unwrap_or_default().to_string()
    }

    /// Whether a row has enough fields for every mapped column.
    pub fn covers(&self, record: &StringRecord) -> bool {
        record.len() >= self.min_fields
    }

    pub fn min_fields(&self) -> usize {
        self.min_fields
    }

    pub fn contains(&self, column: &str) -> bool {
        self.indices.contains_key(column)
    }
}

/// Strip a byte order mark and surrounding quotes, collapse runs of
/// whitespace and lowercase.
fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}')
        .trim()
        .trim_matches('"')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("\u{feff}Name"), "name");
        assert_eq!(normalize_header("  Latitude  (WGS84) "), "latitude (wgs84)");
        assert_eq!(normalize_header("\"icao_code\""), "icao_code");
    }

    #[test]
    fn test_resolve_by_name_in_any_order() {
        let headers = StringRecord::from(vec![
            "type", "name", "icao_code", "longitude_deg", "latitude_deg", "iso_country",
        ]);
        let map = ColumnMap::resolve(NavKind::Airport, &headers, airports::COLUMNS).unwrap();
        let row = StringRecord::from(vec!["large_airport", " Test ", "ZZZZ", "1.5", "2.5", "NZ"]);
        assert_eq!(map.get(&row, airports::ICAO_CODE), Some("ZZZZ"));
        assert_eq!(map.get(&row, airports::NAME), Some("Test"));
        assert_eq!(map.get(&row, airports::LATITUDE), Some("2.5"));
    }

    #[test]
    fn test_missing_required_column() {
        let headers = StringRecord::from(vec!["ident", "name", "type", "latitude_deg"]);
        let err = ColumnMap::resolve(NavKind::Navaid, &headers, navaids::COLUMNS).unwrap_err();
        assert!(matches!(
            err,
            NavDataError::MissingColumn { kind: NavKind::Navaid, ref column } if column == "longitude_deg"
        ));
    }

    #[test]
    fn test_optional_column_absent() {
        let headers =
            StringRecord::from(vec!["ident", "name", "type", "latitude_deg", "longitude_deg"]);
        let map = ColumnMap::resolve(NavKind::Navaid, &headers, navaids::COLUMNS).unwrap();
        assert!(!map.contains(navaids::FREQUENCY));
    }

    #[test]
    fn test_positional_fallback() {
        let headers = StringRecord::from(vec![
            "Name",
            "Code",
            "Category",
            "Latitude  (WGS84)",
            "Longitude  (WGS84)",
        ]);
        let map = ColumnMap::resolve(NavKind::Waypoint, &headers, waypoints::COLUMNS).unwrap();
        let row = StringRecord::from(vec!["KAPTI", "KAP", "Enroute", "S41.0", "E174.0"]);
        assert_eq!(map.get(&row, waypoints::TYPE), Some("Enroute"));
        assert!(map.covers(&row));
        assert!(!map.covers(&StringRecord::from(vec!["KAPTI", "KAP"])));
    }
}
