//! CSV reading utilities.

mod reader;

pub use reader::{read_source_table, read_source_table_from_reader};
