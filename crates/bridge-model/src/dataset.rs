//! Datasets and their frozen summary statistics.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::ids::DatasetId;
use crate::record::Record;

/// Shown instead of a year range when no record has a built year.
pub const UNKNOWN_YEAR_RANGE: &str = "架設年不明";

/// Span of built years present in a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum YearRange {
    Known { min: i32, max: i32 },
    Unknown,
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearRange::Known { min, max } => write!(f, "{min}-{max}"),
            YearRange::Unknown => f.write_str(UNKNOWN_YEAR_RANGE),
        }
    }
}

/// Summary statistics computed once when a dataset is created.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStats {
    pub bridge_count: usize,
    pub total_length_km: f64,
    /// Records graded III or IV.
    pub flagged_count: usize,
    /// Share of records with a known grade, 0 when there are no records.
    pub inspection_rate: f64,
    pub year_range: YearRange,
    pub with_coords: usize,
    pub missing_coords: usize,
}

impl DatasetStats {
    pub fn from_records(records: &[Record]) -> Self {
        let bridge_count = records.len();
        let total_length_km = records.iter().map(Record::length_km).sum::<f64>();
        let flagged_count = records
            .iter()
            .filter(|record| record.inspection_level.is_flagged())
            .count();
        let inspected = records
            .iter()
            .filter(|record| record.inspection_level.is_inspected())
            .count();
        let year_range = records
            .iter()
            .filter_map(|record| record.built_year)
            .fold(YearRange::Unknown, |range, year| match range {
                YearRange::Unknown => YearRange::Known {
                    min: year,
                    max: year,
                },
                YearRange::Known { min, max } => YearRange::Known {
                    min: min.min(year),
                    max: max.max(year),
                },
            });
        let with_coords = records
            .iter()
            .filter(|record| record.has_coordinates())
            .count();
        Self {
            bridge_count,
            total_length_km,
            flagged_count,
            inspection_rate: if bridge_count == 0 {
                0.0
            } else {
                inspected as f64 / bridge_count as f64
            },
            year_range,
            with_coords,
            missing_coords: bridge_count - with_coords,
        }
    }
}

/// An immutable set of records from one ingested source.
///
/// Only the `active` flag may change after creation; statistics are frozen
/// at construction time.
#[derive(Debug, Clone)]
pub struct Dataset {
    id: DatasetId,
    label: String,
    source_name: String,
    records: Vec<Record>,
    active: bool,
    stats: DatasetStats,
    ingested_at: DateTime<Utc>,
}

impl Dataset {
    /// Builds an active dataset and computes its statistics.
    ///
    /// The label is the first non-empty management authority name, falling
    /// back to `source_name`.
    pub fn new(id: DatasetId, source_name: impl Into<String>, records: Vec<Record>) -> Self {
        let source_name = source_name.into();
        let label = records
            .iter()
            .map(|record| record.management_name.as_str())
            .find(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| source_name.clone());
        let stats = DatasetStats::from_records(&records);
        Self {
            id,
            label,
            source_name,
            records,
            active: true,
            stats,
            ingested_at: Utc::now(),
        }
    }

    pub fn id(&self) -> DatasetId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn stats(&self) -> &DatasetStats {
        &self.stats
    }

    pub fn ingested_at(&self) -> DateTime<Utc> {
        self.ingested_at
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            id: self.id,
            label: self.label.clone(),
            source_name: self.source_name.clone(),
            active: self.active,
            ingested_at: self.ingested_at,
            stats: self.stats.clone(),
        }
    }
}

/// Card-level view of a dataset for presentation layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    pub id: DatasetId,
    pub label: String,
    pub source_name: String,
    pub active: bool,
    pub ingested_at: DateTime<Utc>,
    pub stats: DatasetStats,
}
