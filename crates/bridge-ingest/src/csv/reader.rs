//! CSV loading into [`SourceTable`]s.

use std::io::Read;
use std::path::Path;

use ::csv::{ByteRecord, ReaderBuilder};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::raw::{RawRow, RawValue, SourceTable, normalize_header};

fn decode_cell(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn is_blank(record: &ByteRecord) -> bool {
    record
        .iter()
        .all(|cell| decode_cell(cell).trim().is_empty())
}

/// Reads a CSV file with a header row.
///
/// The source name is the file stem. Blank lines are skipped and invalid
/// UTF-8 is replaced rather than rejected.
pub fn read_source_table(path: &Path) -> Result<SourceTable> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = std::fs::File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| path.display().to_string());
    read_source_table_from_reader(file, &name, path)
}

/// Reads CSV text from any reader; `path` is used only for error messages.
pub fn read_source_table_from_reader<R: Read>(
    input: R,
    name: &str,
    path: &Path,
) -> Result<SourceTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    let mut records = reader.byte_records();
    let headers = loop {
        match records.next() {
            Some(record) => {
                let record = record.map_err(|source| IngestError::CsvParse {
                    path: path.to_path_buf(),
                    source,
                })?;
                if is_blank(&record) {
                    continue;
                }
                break record
                    .iter()
                    .map(|cell| normalize_header(&decode_cell(cell)))
                    .collect::<Vec<_>>();
            }
            None => {
                return Err(IngestError::EmptyCsv {
                    path: path.to_path_buf(),
                });
            }
        }
    };
    let mut table = SourceTable::new(name, headers);
    for record in records {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        if is_blank(&record) {
            continue;
        }
        let mut row = RawRow::new();
        for (idx, header) in table.headers.iter().enumerate() {
            let value = record
                .get(idx)
                .map_or(RawValue::Missing, |cell| RawValue::Text(decode_cell(cell)));
            row.entry(header.clone()).or_insert(value);
        }
        table.push_row(row);
    }
    debug!(
        source = %table.name,
        columns = table.headers.len(),
        rows = table.len(),
        "read csv table"
    );
    Ok(table)
}
