use anyhow::{Context, Result};
use bridge_core::{DashboardView, DatasetStore, Ingested};
use bridge_ingest::{SchemaTable, read_source_table};
use comfy_table::Table;
use tracing::{error, info, info_span, warn};

use bridge_cli::preset::load_filter;

use crate::cli::ReportArgs;
use crate::summary::apply_table_style;

/// Everything the report printer needs.
#[derive(Debug)]
pub struct ReportResult {
    pub view: DashboardView,
    /// Sources that could not be read or were rejected.
    pub errors: Vec<String>,
    /// Sources that were valid but contributed no records.
    pub notices: Vec<String>,
}

impl ReportResult {
    pub fn has_datasets(&self) -> bool {
        !self.view.datasets.is_empty()
    }
}

pub fn run_columns() -> Result<()> {
    let schema = SchemaTable::standard();
    let mut table = Table::new();
    table.set_header(vec!["Column", "Primary header", "Aliases", "Required"]);
    apply_table_style(&mut table);
    for spec in schema.columns() {
        let aliases = if spec.aliases().is_empty() {
            "-".to_string()
        } else {
            spec.aliases().join(", ")
        };
        let required = if spec.required { "yes" } else { "no" };
        table.add_row(vec![
            spec.logical.to_string(),
            spec.primary().to_string(),
            aliases,
            required.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_report(args: &ReportArgs) -> Result<ReportResult> {
    let span = info_span!("report", files = args.files.len());
    let _guard = span.enter();

    let filter = load_filter(args.filter.preset.as_deref(), &args.filter.overrides())
        .context("build filter")?;
    let mut store = DatasetStore::default();
    let mut errors = Vec::new();
    let mut notices = Vec::new();

    for path in &args.files {
        let table = match read_source_table(path) {
            Ok(table) => table,
            Err(err) => {
                error!(path = %path.display(), error = %err, "failed to read source");
                errors.push(err.to_string());
                continue;
            }
        };
        match store.ingest(&table) {
            Ok(Ingested::Created(id)) => {
                let records = store.get(id).map_or(0, |dataset| dataset.records().len());
                info!(
                    path = %path.display(),
                    dataset = %id,
                    records,
                    "source ingested"
                );
            }
            Ok(Ingested::Empty(warning)) => {
                warn!(path = %path.display(), "source produced no records");
                notices.push(format!(
                    "{}: no valid records in {} rows",
                    warning.source_name, warning.row_count
                ));
            }
            Err(err) => {
                error!(path = %path.display(), error = %err, "source rejected");
                errors.push(err.to_string());
            }
        }
    }

    let view = DashboardView::build(&store, &filter).context("build dashboard view")?;
    Ok(ReportResult {
        view,
        errors,
        notices,
    })
}
