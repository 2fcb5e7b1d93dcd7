//! Result formatting for the console.

use anyhow::Result;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};
use navdata::SearchResult;
use route::{FlightDetails, RouteTableRow};
use serde::{Deserialize, Serialize};

/// Output format selected with `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!(
                "unknown output format '{}' (expected table, json or csv)",
                other
            )),
        }
    }
}

/// Route table with its total, as emitted for `route`.
#[derive(Debug, Serialize)]
pub struct RouteReport<'a> {
    pub rows: &'a [RouteTableRow],
    pub total_km: f64,
    pub total_nm: i64,
}

fn table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS);
    table
}

fn csv_string(header: &[&str], rows: impl IntoIterator<Item = Vec<String>>) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(&row)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

fn optional(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Format the departure/destination pair.
pub fn format_flight(details: &FlightDetails, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(details)?),
        OutputFormat::Csv => csv_string(
            &[
                "from",
                "to",
                "distance_km",
                "distance_nm",
                "bearing_deg",
                "midpoint_lat",
                "midpoint_lon",
            ],
            [vec![
                details.from.clone(),
                details.to.clone(),
                format!("{:.3}", details.distance_km),
                details.display.nm.to_string(),
                format!("{:.1}", details.bearing_deg),
                format!("{:.6}", details.midpoint.latitude_deg),
                format!("{:.6}", details.midpoint.longitude_deg),
            ]],
        ),
        OutputFormat::Table => {
            let mut table = table();
            table.set_header(vec![details.summary.clone()]);
            table.add_row(vec!["Distance:".to_string(), details.display.to_string()]);
            table.add_row(vec![
                "Initial bearing:".to_string(),
                format!("{:.1}°", details.bearing_deg),
            ]);
            table.add_row(vec!["Midpoint:".to_string(), details.midpoint.to_string()]);
            table.add_row(vec![
                "Clipboard (nm):".to_string(),
                details.clipboard_nm.to_string(),
            ]);
            Ok(table.to_string())
        }
    }
}

/// Format the multi-point route table.
pub fn format_route(report: &RouteReport<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => csv_string(
            &["index", "id", "name", "leg_nm", "accumulated_nm"],
            report.rows.iter().map(|r| {
                vec![
                    r.index.to_string(),
                    r.id.clone(),
                    r.name.clone(),
                    optional(r.leg_nm),
                    optional(r.accumulated_nm),
                ]
            }),
        ),
        OutputFormat::Table => {
            let mut table = table();
            table.set_header(vec!["#", "Ident", "Name", "Leg (nm)", "Total (nm)"]);
            for r in report.rows {
                table.add_row(vec![
                    r.index.to_string(),
                    r.id.clone(),
                    r.name.clone(),
                    optional(r.leg_nm),
                    optional(r.accumulated_nm),
                ]);
            }
            Ok(format!(
                "{}\nTotal: {} nm ({:.1} km)",
                table, report.total_nm, report.total_km
            ))
        }
    }
}

/// Format combined search results.
pub fn format_search(results: &[SearchResult], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
        OutputFormat::Csv => csv_string(
            &["kind", "id", "name", "details", "latitude", "longitude"],
            results.iter().map(|r| {
                vec![
                    r.kind.to_string(),
                    r.id.clone(),
                    r.name.clone(),
                    r.details.clone(),
                    r.position.latitude_deg.to_string(),
                    r.position.longitude_deg.to_string(),
                ]
            }),
        ),
        OutputFormat::Table => {
            let mut table = table();
            table.set_header(vec!["Type", "Ident", "Name", "Details"]);
            for r in results {
                table.add_row(vec![
                    r.kind.to_string(),
                    r.id.clone(),
                    r.name.clone(),
                    r.details.clone(),
                ]);
            }
            Ok(table.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<RouteTableRow> {
        vec![
            RouteTableRow {
                index: 1,
                id: "NZWN".to_string(),
                name: "NZWN - Wellington".to_string(),
                leg_nm: None,
                accumulated_nm: None,
            },
            RouteTableRow {
                index: 2,
                id: "TAWHA".to_string(),
                name: "TAWHA".to_string(),
                leg_nm: Some(30),
                accumulated_nm: Some(30),
            },
        ]
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_route_csv_leaves_first_row_blank() {
        let rows = rows();
        let report = RouteReport {
            rows: &rows,
            total_km: 55.6,
            total_nm: 30,
        };
        let csv = format_route(&report, OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "index,id,name,leg_nm,accumulated_nm");
        assert_eq!(lines[1], "1,NZWN,NZWN - Wellington,,");
        assert_eq!(lines[2], "2,TAWHA,TAWHA,30,30");
    }

    #[test]
    fn test_route_table_has_total() {
        let rows = rows();
        let report = RouteReport {
            rows: &rows,
            total_km: 55.6,
            total_nm: 30,
        };
        let out = format_route(&report, OutputFormat::Table).unwrap();
        assert!(out.contains("TAWHA"));
        assert!(out.ends_with("Total: 30 nm (55.6 km)"));
    }

    #[test]
    fn test_route_json() {
        let rows = rows();
        let report = RouteReport {
            rows: &rows,
            total_km: 55.6,
            total_nm: 30,
        };
        let json: serde_json::Value =
            serde_json::from_str(&format_route(&report, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["rows"][0]["leg_nm"], serde_json::Value::Null);
        assert_eq!(json["total_nm"], 30);
    }
}
