//! Reference data loading for the planner.

use std::path::Path;

use anyhow::{Context, Result};
use navdata::{
    load_airports_from_path, load_navaids_from_path, load_waypoints_from_path, sample_airports,
    LoadReport, NavDataError, NavDatabase,
};
use tracing::{info, warn};

use crate::config::DataConfig;

/// Load every configured file into a database.
///
/// An airports file that is unset or cannot be opened is replaced by the
/// built-in sample list. Navaids and waypoints are optional and are left
/// empty when their file cannot be opened. Any other failure, including an
/// invalid row under the `fail` policy, is an error.
pub fn load_database(config: &DataConfig) -> Result<NavDatabase> {
    let policy = config.row_policy;

    let airports = match &config.airports {
        Some(path) => match load_airports_from_path(path, policy) {
            Ok(report) => records(report, path),
            Err(NavDataError::Io { path, source }) => {
                warn!(path = %path.display(), error = %source, "Airports file unavailable, using sample airports");
                sample_airports()
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to load {}", path.display()))
            }
        },
        None => {
            info!("No airports file configured, using sample airports");
            sample_airports()
        }
    };

    let navaids = optional(config.navaids.as_deref(), |p| {
        load_navaids_from_path(p, policy)
    })?;
    let waypoints = optional(config.waypoints.as_deref(), |p| {
        load_waypoints_from_path(p, policy)
    })?;

    Ok(NavDatabase::new(airports, navaids, waypoints))
}

fn optional<T, F>(path: Option<&Path>, load: F) -> Result<Vec<T>>
where
    F: FnOnce(&Path) -> navdata::Result<LoadReport<T>>,
{
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    match load(path) {
        Ok(report) => Ok(records(report, path)),
        Err(NavDataError::Io { path, source }) => {
            warn!(path = %path.display(), error = %source, "Reference file unavailable, continuing without it");
            Ok(Vec::new())
        }
        Err(e) => Err(e).with_context(|| format!("Failed to load {}", path.display())),
    }
}

fn records<T>(report: LoadReport<T>, path: &Path) -> Vec<T> {
    if !report.is_clean() {
        warn!(
            kind = %report.kind,
            path = %path.display(),
            skipped = report.issues.len(),
            "Some rows were skipped"
        );
    }
    report.records
}

#[cfg(test)]
mod tests {
    use super::*;
    use navdata::RowPolicy;
    use test_utils::FixtureDir;

    #[test]
    fn test_missing_airports_file_falls_back_to_samples() {
        let dir = FixtureDir::new().unwrap();
        let config = DataConfig {
            airports: Some(dir.path("missing.csv")),
            ..DataConfig::default()
        };
        let db = load_database(&config).unwrap();
        assert_eq!(db.airports().len(), sample_airports().len());
        assert!(db.navaids().is_empty());
    }

    #[test]
    fn test_fail_policy_propagates() {
        let dir = FixtureDir::new().unwrap().with_reference_data().unwrap();
        let config = DataConfig {
            airports: Some(dir.path("airports.csv")),
            row_policy: RowPolicy::Fail,
            ..DataConfig::default()
        };
        let err = load_database(&config).unwrap_err();
        assert!(format!("{:#}", err).contains("line 7"), "{:#}", err);
    }
}
