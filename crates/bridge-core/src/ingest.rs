//! Source ingestion: schema check, row normalization, dataset creation.

use bridge_ingest::{RawRow, SchemaTable};
use bridge_model::{Dataset, DatasetId};
use bridge_transform::RecordNormalizer;
use serde::Serialize;
use tracing::{debug, info_span};

use crate::error::Result;

/// A schema-valid source that produced no records.
///
/// Not an error: no dataset is created and previously ingested datasets are
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptyResultWarning {
    pub source_name: String,
    /// Rows read from the source, all of which were discarded.
    pub row_count: usize,
}

/// Result of ingesting one schema-valid source.
#[derive(Debug, Clone)]
pub enum IngestOutcome {
    Created(Dataset),
    Empty(EmptyResultWarning),
}

impl IngestOutcome {
    pub fn dataset(&self) -> Option<&Dataset> {
        match self {
            IngestOutcome::Created(dataset) => Some(dataset),
            IngestOutcome::Empty(_) => None,
        }
    }
}

/// Builds a dataset from tokenized rows.
///
/// Fails with `MissingColumns` when a required column does not resolve; no
/// row is read in that case. Rows are ordinal-numbered in source order.
pub fn ingest_rows(
    schema: &SchemaTable,
    id: DatasetId,
    source_name: &str,
    headers: &[String],
    rows: &[RawRow],
) -> Result<IngestOutcome> {
    let span = info_span!("ingest", source = %source_name, dataset = %id);
    let _guard = span.enter();

    let resolved = schema.resolve(source_name, headers)?;
    let records = RecordNormalizer::new(&resolved).normalize_all(rows, id);
    debug!(
        rows = rows.len(),
        records = records.len(),
        discarded = rows.len() - records.len(),
        "normalized rows"
    );
    if records.is_empty() {
        return Ok(IngestOutcome::Empty(EmptyResultWarning {
            source_name: source_name.to_string(),
            row_count: rows.len(),
        }));
    }
    Ok(IngestOutcome::Created(Dataset::new(id, source_name, records)))
}
