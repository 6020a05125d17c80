//! Facet filtering over active datasets.

use bridge_model::{BridgeType, Dataset, FilterState, Record};

/// Per-call switches of the facet filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Ignore `exclude_culvert`; used by views that report on culverts.
    pub skip_culvert_filter: bool,
}

impl FilterOptions {
    pub fn skip_culvert_filter() -> Self {
        Self {
            skip_culvert_filter: true,
        }
    }
}

/// Whether one record passes every facet of `state`.
///
/// Tension membership is checked only for PC records, and post-category
/// membership only for post-tensioned PC records. Deselecting PC therefore
/// makes the PC sub-facets inert, in every call path.
pub fn record_matches(record: &Record, state: &FilterState, options: FilterOptions) -> bool {
    if !state.bridge_types.contains(&record.bridge_type) {
        return false;
    }
    if record.bridge_type == BridgeType::Pc {
        if !state.pc_tension_types.contains(&record.tension_facet()) {
            return false;
        }
        if record.is_post_tensioned()
            && !state
                .pc_post_categories
                .contains(&record.post_category_facet())
        {
            return false;
        }
    }
    if !state.inspection_levels.contains(&record.inspection_level) {
        return false;
    }
    if state.exclude_culvert && !options.skip_culvert_filter && record.is_culvert {
        return false;
    }
    true
}

/// Records of active datasets passing `state`, in dataset then row order.
pub fn filter_records<'a, I>(datasets: I, state: &FilterState, options: FilterOptions) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Dataset>,
{
    datasets
        .into_iter()
        .filter(|dataset| dataset.is_active())
        .flat_map(Dataset::records)
        .filter(|record| record_matches(record, state, options))
        .collect()
}
