//! Raw tabular input as delivered by a tokenizer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One untyped field value.
///
/// Tokenizers may hand over text or already-typed numbers; a header with no
/// cell in a row is `Missing`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl RawValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, RawValue::Missing)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Missing, Into::into)
    }
}

/// A row keyed by physical header name.
pub type RawRow = BTreeMap<String, RawValue>;

/// A fully materialized source: declared headers plus its rows.
#[derive(Debug, Clone, Default)]
pub struct SourceTable {
    /// Caller-facing name of the source, such as a file stem.
    pub name: String,
    /// Declared headers in source order.
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl SourceTable {
    pub fn new(name: impl Into<String>, headers: Vec<String>) -> Self {
        Self {
            name: name.into(),
            headers: headers.iter().map(|h| normalize_header(h)).collect(),
            rows: Vec::new(),
        }
    }

    /// Builds a table from positional text cells.
    ///
    /// Short rows leave trailing headers `Missing`; extra cells are dropped.
    /// When a header repeats, the first occurrence wins.
    pub fn from_text_rows<I, R, S>(name: impl Into<String>, headers: Vec<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new(name, headers);
        for row in rows {
            let mut raw = RawRow::new();
            let mut cells = row.into_iter();
            for header in &table.headers {
                let value = cells
                    .next()
                    .map_or(RawValue::Missing, |cell| RawValue::Text(cell.into()));
                raw.entry(header.clone()).or_insert(value);
            }
            table.rows.push(raw);
        }
        table
    }

    pub fn push_row(&mut self, row: RawRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Normalizes a header by trimming whitespace and a byte-order mark.
pub fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("\u{feff}施設名 "), "施設名");
        assert_eq!(normalize_header("  橋長(m)"), "橋長(m)");
    }

    #[test]
    fn test_from_text_rows_pads_short_rows() {
        let table = SourceTable::from_text_rows(
            "t",
            vec!["A".to_string(), "B".to_string()],
            vec![vec!["1"], vec!["2", "x", "extra"]],
        );
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0]["A"], RawValue::from("1"));
        assert!(table.rows[0]["B"].is_missing());
        assert_eq!(table.rows[1]["B"], RawValue::from("x"));
    }

    #[test]
    fn test_raw_value_from_option() {
        assert_eq!(RawValue::from(None::<f64>), RawValue::Missing);
        assert_eq!(RawValue::from(Some(3.5)), RawValue::Number(3.5));
    }
}
