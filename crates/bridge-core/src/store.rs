//! Process-local collection of ingested datasets.

use bridge_ingest::{RawRow, SchemaTable, SourceTable};
use bridge_model::{Dataset, DatasetId, DatasetSummary};
use tracing::{info, warn};

use crate::error::{CoreError, Result};
use crate::ingest::{EmptyResultWarning, IngestOutcome, ingest_rows};

/// What a store ingestion did. Created datasets are read back with
/// [`DatasetStore::get`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ingested {
    Created(DatasetId),
    Empty(EmptyResultWarning),
}

impl Ingested {
    pub fn dataset_id(&self) -> Option<DatasetId> {
        match self {
            Ingested::Created(id) => Some(*id),
            Ingested::Empty(_) => None,
        }
    }
}

/// Outcome of one source in a batch ingestion.
#[derive(Debug)]
pub struct IngestReport {
    pub source_name: String,
    pub outcome: Result<Ingested>,
}

impl IngestReport {
    pub fn created(&self) -> Option<DatasetId> {
        self.outcome.as_ref().ok().and_then(Ingested::dataset_id)
    }
}

/// Datasets in submission order.
///
/// There is a single writer; every mutation completes before the next call.
/// Identifiers are never reused, even after removal.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    schema: SchemaTable,
    datasets: Vec<Dataset>,
    next_id: u64,
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::new(SchemaTable::standard())
    }
}

impl DatasetStore {
    pub fn new(schema: SchemaTable) -> Self {
        Self {
            schema,
            datasets: Vec::new(),
            next_id: 1,
        }
    }

    pub fn schema(&self) -> &SchemaTable {
        &self.schema
    }

    /// Ingests tokenized rows from one source.
    ///
    /// A created dataset is moved into the store. Schema errors and empty
    /// results leave the store as is.
    pub fn ingest_rows(
        &mut self,
        source_name: &str,
        headers: &[String],
        rows: &[RawRow],
    ) -> Result<Ingested> {
        let id = DatasetId::new(self.next_id);
        match ingest_rows(&self.schema, id, source_name, headers, rows)? {
            IngestOutcome::Created(dataset) => {
                self.next_id += 1;
                info!(
                    source = %source_name,
                    dataset = %id,
                    label = %dataset.label(),
                    records = dataset.records().len(),
                    "dataset created"
                );
                self.datasets.push(dataset);
                Ok(Ingested::Created(id))
            }
            IngestOutcome::Empty(warning) => {
                warn!(
                    source = %source_name,
                    rows = warning.row_count,
                    "no records survived normalization"
                );
                Ok(Ingested::Empty(warning))
            }
        }
    }

    pub fn ingest(&mut self, table: &SourceTable) -> Result<Ingested> {
        self.ingest_rows(&table.name, &table.headers, &table.rows)
    }

    /// Ingests sources one after another, never stopping at a failed one.
    pub fn ingest_all<'a, I>(&mut self, tables: I) -> Vec<IngestReport>
    where
        I: IntoIterator<Item = &'a SourceTable>,
    {
        tables
            .into_iter()
            .map(|table| {
                let outcome = self.ingest(table);
                if let Err(err) = &outcome {
                    warn!(source = %table.name, error = %err, "source rejected");
                }
                IngestReport {
                    source_name: table.name.clone(),
                    outcome,
                }
            })
            .collect()
    }

    pub fn get(&self, id: DatasetId) -> Option<&Dataset> {
        self.datasets.iter().find(|dataset| dataset.id() == id)
    }

    /// Removes a dataset together with its records.
    pub fn remove(&mut self, id: DatasetId) -> Result<Dataset> {
        let index = self.position(id)?;
        let removed = self.datasets.remove(index);
        info!(dataset = %id, label = %removed.label(), "dataset removed");
        Ok(removed)
    }

    pub fn set_active(&mut self, id: DatasetId, active: bool) -> Result<()> {
        let index = self.position(id)?;
        self.datasets[index].set_active(active);
        info!(dataset = %id, active, "dataset activation changed");
        Ok(())
    }

    /// Flips the active flag, returning the new value.
    pub fn toggle(&mut self, id: DatasetId) -> Result<bool> {
        let index = self.position(id)?;
        let active = !self.datasets[index].is_active();
        self.datasets[index].set_active(active);
        info!(dataset = %id, active, "dataset activation changed");
        Ok(active)
    }

    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    pub fn active_datasets(&self) -> impl Iterator<Item = &Dataset> {
        self.datasets.iter().filter(|dataset| dataset.is_active())
    }

    pub fn summaries(&self) -> Vec<DatasetSummary> {
        self.datasets.iter().map(Dataset::summary).collect()
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    fn position(&self, id: DatasetId) -> Result<usize> {
        self.datasets
            .iter()
            .position(|dataset| dataset.id() == id)
            .ok_or(CoreError::UnknownDataset { id })
    }
}
