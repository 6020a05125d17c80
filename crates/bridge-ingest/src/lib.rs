pub mod csv;
pub mod error;
pub mod raw;
pub mod schema;

pub use crate::csv::{read_source_table, read_source_table_from_reader};
pub use error::{IngestError, MissingColumn, Result};
pub use raw::{RawRow, RawValue, SourceTable, normalize_header};
pub use schema::{ColumnSpec, LogicalColumn, ResolvedSchema, SchemaTable};
