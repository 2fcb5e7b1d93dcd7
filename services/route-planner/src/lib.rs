//! Great-circle route planner.
//!
//! Loads airports, navaids and waypoints from CSV and answers four questions
//! from the command line: how far apart two airports are, how long a route
//! through several points is, what the path between two airports looks like
//! as GeoJSON, and which reference points match a search term.

pub mod cli;
pub mod config;
pub mod data;
pub mod report;

use anyhow::{Context, Result};
use geodesy::DisplayDistance;
use navdata::{Airport, NavDatabase};
use route::RouteSession;
use tracing::info;

use cli::Command;
use config::PlannerConfig;
use report::RouteReport;

/// Run one command against a loaded database and return the text to print.
pub fn run(command: &Command, config: &PlannerConfig, db: &NavDatabase) -> Result<String> {
    match command {
        Command::Distance { from, to } => {
            let session = pair_session(db, from, to)?;
            let details = session
                .flight_details()
                .context("Flight details unavailable")?;
            info!(summary = %details.summary, "Computed flight details");
            report::format_flight(&details, config.output)
        }
        Command::Route { idents } => {
            let mut session = RouteSession::new();
            for ident in idents {
                let point = db
                    .resolve(ident)
                    .with_context(|| format!("Cannot add '{}' to the route", ident))?;
                session.add_point(point);
            }
            let rows = session.route_table();
            let total_km = session.total_distance_km();
            let report = RouteReport {
                rows: &rows,
                total_km,
                total_nm: DisplayDistance::from_km(total_km).nm,
            };
            report::format_route(&report, config.output)
        }
        Command::Path { from, to, .. } => {
            let session = pair_session(db, from, to)?;
            let geometry = session.pair_geometry(config.path.style, config.path.segments)?;
            Ok(serde_json::to_string_pretty(&geometry)?)
        }
        Command::Search { term, .. } => {
            let results = db.search(term, config.search.limits());
            report::format_search(&results, config.output)
        }
    }
}

fn airport(db: &NavDatabase, code: &str) -> Result<Airport> {
    db.find_airport(code)
        .cloned()
        .with_context(|| format!("Unknown airport '{}'", code))
}

fn pair_session(db: &NavDatabase, from: &str, to: &str) -> Result<RouteSession> {
    let mut session = RouteSession::new();
    session.select_departure(airport(db, from)?)?;
    session
        .select_destination(airport(db, to)?)
        .context("Invalid destination")?;
    Ok(session)
}
