//! Planner configuration loaded from YAML.
//!
//! Every section is optional; command-line flags override what the file sets.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use geodesy::DEFAULT_SEGMENTS;
use navdata::{RowPolicy, SearchLimits};
use route::PathStyle;
use serde::Deserialize;
use tracing::debug;

use crate::report::OutputFormat;

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub path: PathConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub output: OutputFormat,
}

/// Reference data file locations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    /// OurAirports `airports.csv`. The built-in sample list is used when
    /// unset or unreadable.
    #[serde(default)]
    pub airports: Option<PathBuf>,
    #[serde(default)]
    pub navaids: Option<PathBuf>,
    #[serde(default)]
    pub waypoints: Option<PathBuf>,
    #[serde(default)]
    pub row_policy: RowPolicy,
}

/// Path densification defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct PathConfig {
    #[serde(default = "default_segments")]
    pub segments: usize,
    #[serde(default)]
    pub style: PathStyle,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            segments: default_segments(),
            style: PathStyle::default(),
        }
    }
}

fn default_segments() -> usize {
    DEFAULT_SEGMENTS
}

/// Combined search caps per category.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default = "default_browse_limit")]
    pub browse_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            browse_limit: default_browse_limit(),
        }
    }
}

fn default_limit() -> usize {
    SearchLimits::default().with_term
}

fn default_browse_limit() -> usize {
    SearchLimits::default().browse
}

impl SearchConfig {
    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            with_term: self.limit,
            browse: self.browse_limit,
        }
    }
}

impl PlannerConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: PlannerConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!(path = %path.display(), "Loaded planner config");
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
