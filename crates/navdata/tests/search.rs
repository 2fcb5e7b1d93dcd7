//! Search and lookup over a database built from the fixture extracts.

use navdata::{
    load_airports, load_navaids, load_waypoints, sample_airports, NavDatabase, NavKind,
    NavPoint, RowPolicy, SearchLimits, DEFAULT_SEARCH_LIMIT,
};
use test_utils::fixtures::csv as data;

fn fixture_db() -> NavDatabase {
    let airports = load_airports(data::AIRPORTS.as_bytes(), RowPolicy::Skip).unwrap();
    let navaids = load_navaids(data::NAVAIDS.as_bytes(), RowPolicy::Skip).unwrap();
    let waypoints = load_waypoints(data::WAYPOINTS.as_bytes(), RowPolicy::Skip).unwrap();
    NavDatabase::new(airports.records, navaids.records, waypoints.records)
}

#[test]
fn test_airport_search_fields() {
    let db = fixture_db();
    let by_name = db.search_airports("heathrow", DEFAULT_SEARCH_LIMIT);
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].code, "EGLL");

    let by_country = db.search_airports("nz", DEFAULT_SEARCH_LIMIT);
    assert_eq!(by_country.len(), 1);
    assert_eq!(by_country[0].code, "NZWN");

    assert_eq!(db.search_airports("", 2).len(), 2);
}

#[test]
fn test_sample_airports_search_by_city() {
    let db = NavDatabase::new(sample_airports(), Vec::new(), Vec::new());
    let results = db.search_airports("paris", DEFAULT_SEARCH_LIMIT);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].code, "CDG");
}

#[test]
fn test_navaid_and_waypoint_search_by_type() {
    let db = fixture_db();
    let ndbs = db.search_navaids("ndb", DEFAULT_SEARCH_LIMIT);
    assert_eq!(ndbs.len(), 1);
    assert_eq!(ndbs[0].ident, "OH");

    let reporting = db.search_waypoints("reporting", DEFAULT_SEARCH_LIMIT);
    let names: Vec<&str> = reporting.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, vec!["KAPTI", "ABLAR"]);
}

#[test]
fn test_combined_search_exact_match_first() {
    let db = fixture_db();
    let results = db.search("wellington", SearchLimits::default());
    let kinds: Vec<NavKind> = results.iter().map(|r| r.kind).collect();
    assert_eq!(kinds, vec![NavKind::Airport, NavKind::Navaid]);

    let results = db.search("WN", SearchLimits::default());
    assert_eq!(results[0].id, "WN");
    assert_eq!(results[0].details, "VOR-DME - 112300");
    assert_eq!(results[1].id, "NZWN");
}

#[test]
fn test_combined_search_empty_term_browses() {
    let db = fixture_db();
    let results = db.search("", SearchLimits::default());
    assert_eq!(results.len(), db.len());
    assert_eq!(results[0].kind, NavKind::Airport);
    assert_eq!(results.last().unwrap().kind, NavKind::Waypoint);
}

#[test]
fn test_resolve_prefers_airports() {
    let db = fixture_db();
    match db.resolve("egll").unwrap() {
        NavPoint::Airport(a) => assert_eq!(a.name, "London Heathrow Airport"),
        other => panic!("expected airport, got {:?}", other),
    }
    assert_eq!(db.resolve("oh").unwrap().kind(), NavKind::Navaid);
    assert_eq!(db.resolve("Kapti").unwrap().kind(), NavKind::Waypoint);
    assert!(db.resolve("NOWHERE").is_err());
    assert!(db.find_airport("WN").is_none());
}
