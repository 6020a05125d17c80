//! Error types for bridge inventory ingestion.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::schema::LogicalColumn;

/// A required logical column no header resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingColumn {
    pub logical: LogicalColumn,
    /// Primary header name a source could add to satisfy the column.
    pub primary: String,
}

impl fmt::Display for MissingColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.logical, self.primary)
    }
}

fn join_missing(missing: &[MissingColumn]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors that can occur while loading or resolving a source table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Schema Errors ===
    /// One or more required logical columns did not resolve to any header.
    ///
    /// The whole source is rejected; `missing` lists the unresolved logical
    /// columns in alias-table order.
    #[error("{source_name}: missing required columns: {}", join_missing(.missing))]
    MissingColumns {
        source_name: String,
        missing: Vec<MissingColumn>,
    },

    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// The tokenizer rejected the file.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: ::csv::Error,
    },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },
}

impl IngestError {
    /// Logical columns that failed to resolve, if this is a schema error.
    pub fn missing_columns(&self) -> Option<&[MissingColumn]> {
        match self {
            Self::MissingColumns { missing, .. } => Some(missing),
            _ => None,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
