//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use navdata::RowPolicy;
use route::PathStyle;

use crate::config::PlannerConfig;
use crate::report::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "route-planner")]
#[command(about = "Great-circle distances, bearings and routes between airports and fixes")]
pub struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, env = "ROUTE_PLANNER_CONFIG")]
    pub config: Option<PathBuf>,

    /// OurAirports airports.csv (falls back to a built-in sample list)
    #[arg(long, global = true, env = "AIRPORTS_CSV")]
    pub airports: Option<PathBuf>,

    /// OurAirports navaids.csv
    #[arg(long, global = true, env = "NAVAIDS_CSV")]
    pub navaids: Option<PathBuf>,

    /// Waypoint list CSV
    #[arg(long, global = true, env = "WAYPOINTS_CSV")]
    pub waypoints: Option<PathBuf>,

    /// What to do with invalid rows: skip or fail
    #[arg(long, global = true)]
    pub row_policy: Option<RowPolicy>,

    /// Output format: table, json or csv
    #[arg(long, global = true)]
    pub output: Option<OutputFormat>,

    /// Log level
    #[arg(long, global = true, default_value = "warn", env = "RUST_LOG")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Distance, bearing and midpoint between two airports
    Distance {
        from: String,
        to: String,
    },

    /// Leg and running distances along a route of airports, navaids or waypoints
    Route {
        #[arg(required = true, num_args = 1..)]
        idents: Vec<String>,
    },

    /// GeoJSON path between two airports
    Path {
        from: String,
        to: String,

        /// Number of segments along the great circle
        #[arg(long)]
        segments: Option<usize>,

        /// Path style: great-circle or straight
        #[arg(long)]
        style: Option<PathStyle>,
    },

    /// Search airports, navaids and waypoints
    Search {
        /// Search term (empty lists the first entries of each kind)
        #[arg(default_value = "")]
        term: String,

        /// Maximum results per kind
        #[arg(long)]
        limit: Option<usize>,
    },
}

impl Cli {
    /// Apply flags on top of the loaded configuration.
    pub fn apply(&self, config: &mut PlannerConfig) {
        if let Some(path) = &self.airports {
            config.data.airports = Some(path.clone());
        }
        if let Some(path) = &self.navaids {
            config.data.navaids = Some(path.clone());
        }
        if let Some(path) = &self.waypoints {
            config.data.waypoints = Some(path.clone());
        }
        if let Some(policy) = self.row_policy {
            config.data.row_policy = policy;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        match &self.command {
            Command::Path {
                segments, style, ..
            } => {
                if let Some(segments) = segments {
                    config.path.segments = *segments;
                }
                if let Some(style) = style {
                    config.path.style = *style;
                }
            }
            Command::Search {
                limit: Some(limit), ..
            } => {
                config.search.limit = *limit;
                config.search.browse_limit = *limit;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path_command() {
        let cli = Cli::try_parse_from([
            "route-planner",
            "path",
            "NZWN",
            "NFFN",
            "--segments",
            "20",
            "--style",
            "straight",
            "--output",
            "json",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Command::Path {
                from: "NZWN".to_string(),
                to: "NFFN".to_string(),
                segments: Some(20),
                style: Some(PathStyle::Straight),
            }
        );

        let mut config = PlannerConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.path.segments, 20);
        assert_eq!(config.path.style, PathStyle::Straight);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_route_requires_idents() {
        assert!(Cli::try_parse_from(["route-planner", "route"]).is_err());
    }

    #[test]
    fn test_bad_row_policy_rejected() {
        assert!(Cli::try_parse_from([
            "route-planner",
            "--row-policy",
            "maybe",
            "search",
            "x"
        ])
        .is_err());
    }
}
