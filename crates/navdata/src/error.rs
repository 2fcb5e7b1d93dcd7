//! Error types for reference data loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::NavKind;

/// Errors that can occur while loading or querying reference data.
#[derive(Error, Debug)]
pub enum NavDataError {
    /// The data file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV stream itself is unreadable (not a single bad row).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A column the loader needs is not present in the header row.
    #[error("{kind} data is missing required column '{column}'")]
    MissingColumn { kind: NavKind, column: String },

    /// A row failed validation and the row policy is `Fail`.
    #[error("invalid {kind} row at line {line}: {reason}")]
    InvalidRow {
        kind: NavKind,
        line: u64,
        reason: String,
    },

    /// No airport, navaid or waypoint has the given identifier.
    #[error("unknown identifier: {0}")]
    NotFound(String),
}

impl NavDataError {
    /// Create an Io error for a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a MissingColumn error.
    pub fn missing_column(kind: NavKind, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            kind,
            column: column.into(),
        }
    }

    /// Create a NotFound error.
    pub fn not_found(ident: impl Into<String>) -> Self {
        Self::NotFound(ident.into())
    }
}

/// Result type for reference data operations.
pub type Result<T> = std::result::Result<T, NavDataError>;
