//! Bridge stock analysis engine.
//!
//! - **ingest** / **store**: schema-checked dataset creation and the
//!   submission-ordered [`DatasetStore`]
//! - **filter**: facet filtering with dependent PC sub-facets
//! - **aggregate**: stock, grade, length and built-year views
//! - **view**: [`DashboardView`], every view for one filter state

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod ingest;
pub mod store;
pub mod view;

pub use error::{CoreError, Result};
pub use filter::{FilterOptions, filter_records, record_matches};
pub use ingest::{EmptyResultWarning, IngestOutcome, ingest_rows};
pub use store::{DatasetStore, IngestReport, Ingested};
pub use view::DashboardView;
