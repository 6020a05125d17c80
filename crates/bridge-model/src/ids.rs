#![deny(unsafe_code)]

use std::fmt;

/// Store-assigned identifier of an ingested dataset.
///
/// Identifiers are handed out in increasing order and never reused within a
/// process, so they stay unique even after datasets are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DatasetId(u64);

impl DatasetId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dataset-{}", self.0)
    }
}

impl serde::Serialize for DatasetId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A deterministic record identifier: owning dataset plus source row ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId {
    dataset: DatasetId,
    ordinal: u32,
}

impl RecordId {
    pub fn new(dataset: DatasetId, ordinal: u32) -> Self {
        Self { dataset, ordinal }
    }

    pub fn dataset(&self) -> DatasetId {
        self.dataset
    }

    /// Zero-based position of the source row within its table.
    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.dataset, self.ordinal)
    }
}

impl serde::Serialize for RecordId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
