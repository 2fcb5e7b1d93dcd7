//! CSV loaders for airports, navaids and waypoints.
//!
//! Every loader works on any `io::Read`, with `*_from_path` wrappers for
//! files. Rows that are simply not relevant (heliports, records without an
//! identifier) are filtered out quietly. Rows that should be usable but are
//! not (bad coordinates, truncated records) are issues and are handled
//! according to the [`RowPolicy`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use geodesy::GeoPoint;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::coords::{parse_coordinate, Axis};
use crate::error::{NavDataError, Result};
use crate::schema::{self, ColumnMap};
use crate::types::{Airport, NavKind, Navaid, Waypoint};

/// What to do with a row that fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowPolicy {
    /// Record the problem in the report and continue.
    #[default]
    Skip,
    /// Stop loading and return the problem as an error.
    Fail,
}

impl std::str::FromStr for RowPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "skip" => Ok(RowPolicy::Skip),
            "fail" => Ok(RowPolicy::Fail),
            other => Err(format!("unknown row policy '{}' (expected skip or fail)", other)),
        }
    }
}

/// A row that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowIssue {
    /// 1-based line number in the source file.
    pub line: u64,
    pub reason: String,
}

/// Records loaded from one file plus the rows that were rejected.
#[derive(Debug, Clone)]
pub struct LoadReport<T> {
    pub kind: NavKind,
    pub records: Vec<T>,
    pub issues: Vec<RowIssue>,
    /// Rows dropped because they are out of scope (not counted as issues).
    pub filtered: usize,
}

impl<T> LoadReport<T> {
    fn new(kind: NavKind) -> Self {
        Self {
            kind,
            records: Vec::new(),
            issues: Vec::new(),
            filtered: 0,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Outcome of validating one row.
enum Row<T> {
    Keep(T),
    Filter,
    Reject(String),
}

/// Load airports from an OurAirports `airports.csv` stream.
///
/// Only rows with an ICAO code and a type containing "airport" are kept.
pub fn load_airports<R: Read>(reader: R, policy: RowPolicy) -> Result<LoadReport<Airport>> {
    use schema::airports as col;

    load(reader, NavKind::Airport, schema::airports::COLUMNS, policy, |map, record| {
        if let Some(row) = truncated(map, record) {
            return row;
        }
        let code = map.text(record, col::ICAO_CODE);
        let kind = map.text(record, col::TYPE);
        if code.is_empty() || !kind.contains("airport") {
            return Row::Filter;
        }
        let position = match decimal_position(map, record, col::LATITUDE, col::LONGITUDE) {
            Ok(p) => p,
            Err(reason) => return Row::Reject(format!("{}: {}", code, reason)),
        };
        Row::Keep(Airport {
            code,
            name: map.text(record, col::NAME),
            city: String::new(),
            country: map.text(record, col::COUNTRY),
            position,
        })
    })
}

/// Load navaids from an OurAirports `navaids.csv` stream.
pub fn load_navaids<R: Read>(reader: R, policy: RowPolicy) -> Result<LoadReport<Navaid>> {
    use schema::navaids as col;

    load(reader, NavKind::Navaid, schema::navaids::COLUMNS, policy, |map, record| {
        if let Some(row) = truncated(map, record) {
            return row;
        }
        let ident = map.text(record, col::IDENT);
        if ident.is_empty() {
            return Row::Filter;
        }
        let position = match decimal_position(map, record, col::LATITUDE, col::LONGITUDE) {
            Ok(p) => p,
            Err(reason) => return Row::Reject(format!("{}: {}", ident, reason)),
        };
        let frequency_khz = map
            .get(record, col::FREQUENCY)
            .filter(|f| !f.is_empty())
            .map(str::to_string);
        Row::Keep(Navaid {
            ident,
            name: map.text(record, col::NAME),
            kind: map.text(record, col::TYPE),
            position,
            frequency_khz,
        })
    })
}

/// Load waypoints from a waypoint list export.
///
/// Coordinates may be hemisphere-prefixed (`S41.3319°`) or decimal.
pub fn load_waypoints<R: Read>(reader: R, policy: RowPolicy) -> Result<LoadReport<Waypoint>> {
    use schema::waypoints as col;

    load(reader, NavKind::Waypoint, schema::waypoints::COLUMNS, policy, |map, record| {
        if let Some(row) = truncated(map, record) {
            return row;
        }
        let name = map.text(record, col::NAME);
        if name.is_empty() {
            return Row::Filter;
        }
        let lat_text = map.text(record, col::LATITUDE);
        let lon_text = map.text(record, col::LONGITUDE);
        let (lat, lon) = match (
            parse_coordinate(&lat_text, Axis::Latitude),
            parse_coordinate(&lon_text, Axis::Longitude),
        ) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => {
                return Row::Reject(format!(
                    "{}: invalid coordinate format '{}', '{}'",
                    name, lat_text, lon_text
                ))
            }
        };
        let position = match GeoPoint::checked(lat, lon) {
            Ok(p) => p,
            Err(e) => return Row::Reject(format!("{}: {}", name, e)),
        };
        Row::Keep(Waypoint {
            name,
            kind: map.text(record, col::TYPE).to_lowercase(),
            position,
        })
    })
}

/// Open and load an airports file.
pub fn load_airports_from_path(path: &Path, policy: RowPolicy) -> Result<LoadReport<Airport>> {
    load_airports(open(path)?, policy)
}

/// Open and load a navaids file.
pub fn load_navaids_from_path(path: &Path, policy: RowPolicy) -> Result<LoadReport<Navaid>> {
    load_navaids(open(path)?, policy)
}

/// Open and load a waypoints file.
pub fn load_waypoints_from_path(path: &Path, policy: RowPolicy) -> Result<LoadReport<Waypoint>> {
    load_waypoints(open(path)?, policy)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| NavDataError::io(path, e))
}

fn load<R, T, F>(
    reader: R,
    kind: NavKind,
    columns: &[schema::Column],
    policy: RowPolicy,
    mut parse_row: F,
) -> Result<LoadReport<T>>
where
    R: Read,
    F: FnMut(&ColumnMap, &StringRecord) -> Row<T>,
{
    let mut csv = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv.headers()?.clone();
    let map = ColumnMap::resolve(kind, &headers, columns)?;
    let mut report = LoadReport::new(kind);

    let mut record = StringRecord::new();
    loop {
        let (line, outcome) = match csv.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) if is_blank(&record) => continue,
            Ok(true) => (record_line(&record), parse_row(&map, &record)),
            Err(e) if is_row_error(&e) => {
                let line = e.position().map(|p| p.line()).unwrap_or_default();
                (line, Row::Reject(e.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        match outcome {
            Row::Keep(item) => report.records.push(item),
            Row::Filter => report.filtered += 1,
            Row::Reject(reason) => {
                if policy == RowPolicy::Fail {
                    return Err(NavDataError::InvalidRow { kind, line, reason });
                }
                warn!(%kind, line, %reason, "skipping row");
                report.issues.push(RowIssue { line, reason });
            }
        }
    }

    info!(
        %kind,
        loaded = report.records.len(),
        skipped = report.issues.len(),
        filtered = report.filtered,
        "loaded reference data"
    );
    debug!(%kind, columns = headers.len(), "resolved columns");
    Ok(report)
}

/// A row too short to reach every mapped column. The reader is flexible, so
/// missing trailing fields would otherwise read as empty text.
fn truncated<T>(map: &ColumnMap, record: &StringRecord) -> Option<Row<T>> {
    if map.covers(record) {
        return None;
    }
    Some(Row::Reject(format!(
        "expected at least {} fields, found {}",
        map.min_fields(),
        record.len()
    )))
}

/// Parse decimal latitude/longitude columns and range-check them.
fn decimal_position(
    map: &ColumnMap,
    record: &StringRecord,
    lat_col: &str,
    lon_col: &str,
) -> std::result::Result<GeoPoint, String> {
    let lat_text = map.get(record, lat_col).unwrap_or_default();
    let lon_text = map.get(record, lon_col).unwrap_or_default();
    let lat: f64 = lat_text
        .parse()
        .map_err(|_| format!("invalid latitude '{}'", lat_text))?;
    let lon: f64 = lon_text
        .parse()
        .map_err(|_| format!("invalid longitude '{}'", lon_text))?;
    GeoPoint::checked(lat, lon).map_err(|e| e.to_string())
}

fn record_line(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or_default()
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.is_empty())
}

/// Errors confined to a single record, as opposed to the stream failing.
/// Field-count mismatches never surface here because the reader is flexible.
fn is_row_error(err: &csv::Error) -> bool {
    matches!(err.kind(), csv::ErrorKind::Utf8 { .. })
}
