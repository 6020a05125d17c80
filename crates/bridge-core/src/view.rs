//! Every chart view for one filter state, computed in a single pass.

use bridge_model::{DatasetSummary, FilterState, PostCategory, TensionFacet};
use serde::Serialize;
use tracing::debug;

use crate::aggregate::{
    CulvertTotals, FacetCount, GradeCrossTab, KpiSummary, LengthHistogram, MapPoints, StockTotals,
    YearStack, culvert_totals, grade_crosstab, kpi_summary, length_histogram, map_points,
    post_totals, stock_totals, tension_totals, year_stack,
};
use crate::error::Result;
use crate::filter::{FilterOptions, filter_records};
use crate::store::DatasetStore;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub filter: FilterState,
    pub datasets: Vec<DatasetSummary>,
    pub kpis: KpiSummary,
    pub stock: StockTotals,
    pub grades: GradeCrossTab,
    pub length_histogram: LengthHistogram,
    pub year_stack: YearStack,
    pub tension_totals: Vec<FacetCount<TensionFacet>>,
    pub post_totals: Vec<FacetCount<PostCategory>>,
    pub culvert_totals: CulvertTotals,
    pub map: MapPoints,
}

impl DashboardView {
    /// Fails only when `filter` does not validate.
    pub fn build(store: &DatasetStore, filter: &FilterState) -> Result<Self> {
        filter.validate()?;
        let records = filter_records(store.datasets(), filter, FilterOptions::default());
        let with_culverts =
            filter_records(store.datasets(), filter, FilterOptions::skip_culvert_filter());
        debug!(
            records = records.len(),
            with_culverts = with_culverts.len(),
            "building dashboard view"
        );
        Ok(Self {
            filter: filter.clone(),
            datasets: store.summaries(),
            kpis: kpi_summary(store.datasets(), &records),
            stock: stock_totals(
                &records,
                store.datasets(),
                filter.stock_mode,
                filter.stock_scope,
            ),
            grades: grade_crosstab(&records),
            length_histogram: length_histogram(&records, filter.length_bin_size_m),
            year_stack: year_stack(&records, filter.year_grouping),
            tension_totals: tension_totals(&records),
            post_totals: post_totals(&records),
            culvert_totals: culvert_totals(&with_culverts),
            map: map_points(&records),
        })
    }
}
