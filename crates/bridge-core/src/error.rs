//! Error types for dataset store operations.

use bridge_ingest::{IngestError, MissingColumn};
use bridge_model::{DatasetId, ModelError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A source was rejected before any record was produced.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Filter options that no aggregation can work with.
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("unknown dataset: {id}")]
    UnknownDataset { id: DatasetId },
}

impl CoreError {
    /// Unresolved required columns, when the source failed schema checks.
    pub fn missing_columns(&self) -> Option<&[MissingColumn]> {
        match self {
            Self::Ingest(err) => err.missing_columns(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
