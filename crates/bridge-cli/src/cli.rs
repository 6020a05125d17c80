//! CLI argument definitions for the bridge stock report.

use std::path::PathBuf;

use bridge_model::{
    BridgeType, InspectionLevel, PostCategoryFacet, StockMode, StockScope, TensionFacet,
    YearGrouping,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use bridge_cli::preset::FilterOverrides;

#[derive(Parser)]
#[command(
    name = "bridge-stock",
    version,
    about = "Bridge inspection inventory analysis",
    long_about = "Load bridge inspection inventory CSV files and report stock totals,\n\
                  grade distributions, length histograms and built-year trends."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Ingest inventory CSV files and print every chart view.
    Report(ReportArgs),

    /// List the accepted header names for each column.
    Columns,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Inventory CSV files, ingested in the order given.
    #[arg(value_name = "CSV", required = true)]
    pub files: Vec<PathBuf>,

    /// Print the dashboard view as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Args)]
pub struct FilterArgs {
    /// JSON filter preset; flags below override its fields.
    #[arg(long = "preset", value_name = "FILE")]
    pub preset: Option<PathBuf>,

    /// Bridge types to keep (pc, rc, steel, other).
    #[arg(long = "types", value_delimiter = ',', value_name = "TYPE")]
    pub types: Vec<BridgeType>,

    /// Inspection grades to keep (I, II, III, IV, UNKNOWN).
    #[arg(long = "grades", value_delimiter = ',', value_name = "GRADE")]
    pub grades: Vec<InspectionLevel>,

    /// Tension methods of PC bridges to keep (pre, post, unknown).
    #[arg(long = "tension", value_delimiter = ',', value_name = "METHOD")]
    pub tension: Vec<TensionFacet>,

    /// Post-tension sub-forms to keep (hollow, t, box, other, unspecified).
    #[arg(long = "post", value_delimiter = ',', value_name = "FORM")]
    pub post: Vec<PostCategoryFacet>,

    /// Leave culverts out of every view except the culvert totals.
    #[arg(long = "exclude-culvert")]
    pub exclude_culvert: bool,

    /// Length histogram bin width in metres.
    #[arg(long = "bin-size", value_name = "METRES")]
    pub bin_size: Option<f64>,

    #[arg(long = "year-grouping", value_enum)]
    pub year_grouping: Option<YearGroupingArg>,

    #[arg(long = "stock-mode", value_enum)]
    pub stock_mode: Option<StockModeArg>,

    #[arg(long = "stock-scope", value_enum)]
    pub stock_scope: Option<StockScopeArg>,
}

impl FilterArgs {
    pub fn overrides(&self) -> FilterOverrides {
        FilterOverrides {
            bridge_types: non_empty(&self.types),
            inspection_levels: non_empty(&self.grades),
            tension: non_empty(&self.tension),
            post_categories: non_empty(&self.post),
            exclude_culvert: self.exclude_culvert.then_some(true),
            length_bin_size_m: self.bin_size,
            year_grouping: self.year_grouping.map(|arg| match arg {
                YearGroupingArg::Year => YearGrouping::Year,
                YearGroupingArg::Decade => YearGrouping::Decade,
            }),
            stock_mode: self.stock_mode.map(|arg| match arg {
                StockModeArg::Count => StockMode::Count,
                StockModeArg::Length => StockMode::Length,
            }),
            stock_scope: self.stock_scope.map(|arg| match arg {
                StockScopeArg::BridgeType => StockScope::BridgeType,
                StockScopeArg::Dataset => StockScope::Dataset,
            }),
        }
    }
}

fn non_empty<T: Copy>(values: &[T]) -> Option<Vec<T>> {
    (!values.is_empty()).then(|| values.to_vec())
}

#[derive(Clone, Copy, ValueEnum)]
pub enum YearGroupingArg {
    Year,
    Decade,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StockModeArg {
    Count,
    Length,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StockScopeArg {
    BridgeType,
    Dataset,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
