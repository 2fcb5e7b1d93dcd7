//! Planner commands against the fixture reference data.

use navdata::{sample_airports, NavDatabase, RowPolicy};
use route_planner::cli::Command;
use route_planner::config::{DataConfig, PlannerConfig};
use route_planner::data::load_database;
use route_planner::report::OutputFormat;
use route_planner::run;
use test_utils::FixtureDir;

fn fixture_db(dir: &FixtureDir) -> NavDatabase {
    let config = DataConfig {
        airports: Some(dir.path("airports.csv")),
        navaids: Some(dir.path("navaids.csv")),
        waypoints: Some(dir.path("waypoints.csv")),
        row_policy: RowPolicy::Skip,
    };
    load_database(&config).unwrap()
}

fn config(output: OutputFormat) -> PlannerConfig {
    PlannerConfig {
        output,
        ..PlannerConfig::default()
    }
}

#[test]
fn test_distance_with_sample_airports() {
    let db = NavDatabase::new(sample_airports(), Vec::new(), Vec::new());
    let command = Command::Distance {
        from: "jfk".to_string(),
        to: "LHR".to_string(),
    };
    let out = run(&command, &config(OutputFormat::Table), &db).unwrap();
    assert!(out.contains("JFK → LHR: 2991 nm (5540 km)"), "{}", out);

    let json: serde_json::Value =
        serde_json::from_str(&run(&command, &config(OutputFormat::Json), &db).unwrap()).unwrap();
    assert_eq!(json["clipboard_nm"], 2991);
}

#[test]
fn test_distance_same_airport_fails() {
    let db = NavDatabase::new(sample_airports(), Vec::new(), Vec::new());
    let command = Command::Distance {
        from: "SYD".to_string(),
        to: "syd".to_string(),
    };
    let err = run(&command, &config(OutputFormat::Table), &db).unwrap_err();
    assert!(format!("{:#}", err).contains("cannot both be"), "{:#}", err);
}

#[test]
fn test_distance_unknown_airport_fails() {
    let db = NavDatabase::new(sample_airports(), Vec::new(), Vec::new());
    let command = Command::Distance {
        from: "JFK".to_string(),
        to: "ZZZZ".to_string(),
    };
    let err = run(&command, &config(OutputFormat::Table), &db).unwrap_err();
    assert!(err.to_string().contains("ZZZZ"));
}

#[test]
fn test_route_mixes_kinds() {
    let dir = FixtureDir::new().unwrap().with_reference_data().unwrap();
    let db = fixture_db(&dir);
    let command = Command::Route {
        idents: vec!["NZWN".to_string(), "OH".to_string(), "TAWHA".to_string()],
    };
    let out = run(&command, &config(OutputFormat::Csv), &db).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("1,NZWN,NZWN - Wellington International Airport,,"));
    assert!(lines[2].starts_with("2,OH,OH - Ohakea,"));
    assert!(lines[3].starts_with("3,TAWHA,TAWHA,"));
}

#[test]
fn test_route_unknown_ident_fails() {
    let dir = FixtureDir::new().unwrap().with_reference_data().unwrap();
    let db = fixture_db(&dir);
    let command = Command::Route {
        idents: vec!["NZWN".to_string(), "NOPE".to_string()],
    };
    let err = run(&command, &config(OutputFormat::Table), &db).unwrap_err();
    assert!(format!("{:#}", err).contains("NOPE"));
}

#[test]
fn test_path_geojson() {
    let db = NavDatabase::new(sample_airports(), Vec::new(), Vec::new());
    let mut config = config(OutputFormat::Table);
    config.path.segments = 8;
    let command = Command::Path {
        from: "LHR".to_string(),
        to: "CDG".to_string(),
        segments: None,
        style: None,
    };
    let json: serde_json::Value = serde_json::from_str(&run(&command, &config, &db).unwrap()).unwrap();
    let feature = &json["features"][0];
    assert_eq!(feature["geometry"]["type"], "LineString");
    assert_eq!(feature["geometry"]["coordinates"].as_array().unwrap().len(), 9);
    let start_lon = feature["geometry"]["coordinates"][0][0].as_f64().unwrap();
    assert!((start_lon + 0.4543).abs() < 1e-9, "{}", start_lon);
    assert_eq!(feature["properties"]["to"], "CDG");
}

#[test]
fn test_search_output() {
    let dir = FixtureDir::new().unwrap().with_reference_data().unwrap();
    let db = fixture_db(&dir);
    let command = Command::Search {
        term: "WN".to_string(),
        limit: None,
    };
    let out = run(&command, &config(OutputFormat::Csv), &db).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "kind,id,name,details,latitude,longitude");
    assert!(lines[1].starts_with("navaid,WN,Wellington,VOR-DME - 112300,"));
    assert!(lines[2].starts_with("airport,NZWN,"));
}
