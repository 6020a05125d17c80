//! Chart aggregations over a filtered record sequence.
//!
//! Every aggregator is a pure function of its inputs: the same records and
//! options always yield the same bins, labels and ordering.

pub mod histogram;
pub mod map;
pub mod totals;
pub mod year;

pub use histogram::{LengthBin, LengthHistogram, MAX_LENGTH_BINS, length_histogram};
pub use map::{MapPoint, MapPoints, map_points};
pub use totals::{
    CulvertTotals, FacetCount, GradeCrossTab, GradeRow, KpiSummary, StockEntry, StockTotals,
    culvert_totals, grade_crosstab, kpi_summary, post_totals, stock_totals, tension_totals,
};
pub use year::{YearBucket, YearStack, year_stack};

use bridge_transform::round_to;

/// Running share of `total` up to each count, in percent to one decimal.
///
/// Empty when `total` is zero.
pub(crate) fn cumulative_percent(counts: impl IntoIterator<Item = usize>, total: usize) -> Vec<f64> {
    if total == 0 {
        return Vec::new();
    }
    counts
        .into_iter()
        .scan(0usize, |running, count| {
            *running += count;
            Some(round_to(*running as f64 / total as f64 * 100.0, 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cumulative_percent_ends_at_hundred() {
        assert_eq!(cumulative_percent([1, 1, 2], 4), vec![25.0, 50.0, 100.0]);
        assert_eq!(cumulative_percent([1, 2], 3), vec![33.3, 100.0]);
        assert!(cumulative_percent([], 0).is_empty());
    }
}
