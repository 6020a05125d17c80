//! CLI library components for the bridge stock report.

pub mod logging;
pub mod preset;
