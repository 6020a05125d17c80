//! Category totals: stock, grade cross-tab, prestressing facets, KPIs.

use bridge_model::{
    BridgeType, Dataset, InspectionLevel, PostCategory, Record, StockMode, StockScope,
    TensionFacet,
};
use bridge_transform::round_to;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockEntry {
    /// Bridge type code or dataset id.
    pub key: String,
    pub label: String,
    /// A count, or kilometres to two decimals.
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockTotals {
    pub mode: StockMode,
    pub scope: StockScope,
    /// Axis caption for the value series.
    pub value_label: &'static str,
    pub entries: Vec<StockEntry>,
}

impl StockTotals {
    pub fn value(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value)
    }
}

fn stock_value(record: &Record, mode: StockMode) -> f64 {
    match mode {
        StockMode::Count => 1.0,
        StockMode::Length => record.length_km(),
    }
}

/// Groups by bridge type or by dataset and sums count or length.
///
/// Bridge-type scope lists every type; dataset scope lists `datasets` that
/// are active, in order, each even when no record of it passed the filter.
pub fn stock_totals<'a, I>(
    records: &[&Record],
    datasets: I,
    mode: StockMode,
    scope: StockScope,
) -> StockTotals
where
    I: IntoIterator<Item = &'a Dataset>,
{
    let finish = |sum: f64| match mode {
        StockMode::Count => sum,
        StockMode::Length => round_to(sum, 2),
    };
    let entries = match scope {
        StockScope::BridgeType => BridgeType::ALL
            .iter()
            .map(|&bridge_type| StockEntry {
                key: bridge_type.as_str().to_string(),
                label: bridge_type.label().to_string(),
                value: finish(
                    records
                        .iter()
                        .filter(|record| record.bridge_type == bridge_type)
                        .map(|record| stock_value(record, mode))
                        .sum(),
                ),
            })
            .collect(),
        StockScope::Dataset => datasets
            .into_iter()
            .filter(|dataset| dataset.is_active())
            .map(|dataset| StockEntry {
                key: dataset.id().to_string(),
                label: dataset.label().to_string(),
                value: finish(
                    records
                        .iter()
                        .filter(|record| record.dataset_id == dataset.id())
                        .map(|record| stock_value(record, mode))
                        .sum(),
                ),
            })
            .collect(),
    };
    StockTotals {
        mode,
        scope,
        value_label: match mode {
            StockMode::Count => "橋梁数",
            StockMode::Length => "総延長 (km)",
        },
        entries,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeRow {
    pub bridge_type: BridgeType,
    /// Aligned with [`GradeCrossTab::levels`].
    pub counts: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeCrossTab {
    pub levels: Vec<InspectionLevel>,
    pub rows: Vec<GradeRow>,
}

impl GradeCrossTab {
    pub fn count(&self, bridge_type: BridgeType, level: InspectionLevel) -> usize {
        let Some(column) = self.levels.iter().position(|&l| l == level) else {
            return 0;
        };
        self.rows
            .iter()
            .find(|row| row.bridge_type == bridge_type)
            .map_or(0, |row| row.counts[column])
    }
}

/// Count per bridge type and inspection level, `Unknown` included.
pub fn grade_crosstab(records: &[&Record]) -> GradeCrossTab {
    let rows = BridgeType::ALL
        .iter()
        .map(|&bridge_type| GradeRow {
            bridge_type,
            counts: InspectionLevel::ALL
                .iter()
                .map(|&level| {
                    records
                        .iter()
                        .filter(|r| r.bridge_type == bridge_type && r.inspection_level == level)
                        .count()
                })
                .collect(),
        })
        .collect();
    GradeCrossTab {
        levels: InspectionLevel::ALL.to_vec(),
        rows,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FacetCount<T> {
    pub facet: T,
    pub count: usize,
}

/// Tension facets of PC records, `Unknown` included.
pub fn tension_totals(records: &[&Record]) -> Vec<FacetCount<TensionFacet>> {
    TensionFacet::ALL
        .iter()
        .map(|&facet| FacetCount {
            facet,
            count: records
                .iter()
                .filter(|r| r.bridge_type == BridgeType::Pc && r.tension_facet() == facet)
                .count(),
        })
        .collect()
}

/// Sub-forms of post-tensioned PC records.
///
/// `Other` is counted; records with no detail text have no category and are
/// not.
pub fn post_totals(records: &[&Record]) -> Vec<FacetCount<PostCategory>> {
    PostCategory::ALL
        .iter()
        .map(|&facet| FacetCount {
            facet,
            count: records
                .iter()
                .filter(|r| {
                    r.bridge_type == BridgeType::Pc
                        && r.is_post_tensioned()
                        && r.pc_post_category == Some(facet)
                })
                .count(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CulvertTotals {
    pub culvert: usize,
    pub non_culvert: usize,
}

/// Expects records filtered with the culvert filter skipped.
pub fn culvert_totals(records: &[&Record]) -> CulvertTotals {
    let culvert = records.iter().filter(|record| record.is_culvert).count();
    CulvertTotals {
        culvert,
        non_culvert: records.len() - culvert,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub active_datasets: usize,
    pub bridges: usize,
    /// Kilometres to two decimals.
    pub total_length_km: f64,
    /// Grade III or IV.
    pub flagged: usize,
}

pub fn kpi_summary<'a, I>(datasets: I, records: &[&Record]) -> KpiSummary
where
    I: IntoIterator<Item = &'a Dataset>,
{
    KpiSummary {
        active_datasets: datasets
            .into_iter()
            .filter(|dataset| dataset.is_active())
            .count(),
        bridges: records.len(),
        total_length_km: round_to(records.iter().map(|record| record.length_km()).sum(), 2),
        flagged: records
            .iter()
            .filter(|record| record.inspection_level.is_flagged())
            .count(),
    }
}
