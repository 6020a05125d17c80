//! Filter state consumed by the facet filter and the aggregators.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::enums::{
    BridgeType, InspectionLevel, PostCategoryFacet, StockMode, StockScope, TensionFacet,
    YearGrouping,
};
use crate::error::{ModelError, Result};

/// Histogram bin width used when no other width is configured.
pub const DEFAULT_LENGTH_BIN_SIZE_M: f64 = 10.0;

/// Caller-owned selection across every facet plus the chart options.
///
/// The PC sub-facets (`pc_tension_types`, `pc_post_categories`) only take
/// part in filtering for PC records, and the post-tension sub-facet only for
/// post-tensioned ones. Deserialization fills missing fields with defaults so
/// partial presets load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterState {
    pub bridge_types: BTreeSet<BridgeType>,
    pub inspection_levels: BTreeSet<InspectionLevel>,
    pub pc_tension_types: BTreeSet<TensionFacet>,
    pub pc_post_categories: BTreeSet<PostCategoryFacet>,
    pub exclude_culvert: bool,
    pub length_bin_size_m: f64,
    pub year_grouping: YearGrouping,
    pub stock_mode: StockMode,
    pub stock_scope: StockScope,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            bridge_types: BridgeType::ALL.into_iter().collect(),
            inspection_levels: InspectionLevel::ALL.into_iter().collect(),
            pc_tension_types: TensionFacet::ALL.into_iter().collect(),
            pc_post_categories: PostCategoryFacet::ALL.into_iter().collect(),
            exclude_culvert: false,
            length_bin_size_m: DEFAULT_LENGTH_BIN_SIZE_M,
            year_grouping: YearGrouping::default(),
            stock_mode: StockMode::default(),
            stock_scope: StockScope::default(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects option values no aggregation can work with.
    pub fn validate(&self) -> Result<()> {
        if !(self.length_bin_size_m.is_finite() && self.length_bin_size_m > 0.0) {
            return Err(ModelError::InvalidBinWidth(self.length_bin_size_m));
        }
        Ok(())
    }

    /// The PC sub-facets are meaningful only while PC bridges are selected.
    pub fn pc_facets_applicable(&self) -> bool {
        self.bridge_types.contains(&BridgeType::Pc)
    }

    /// The post-tension sub-facet additionally needs post-tension selected.
    pub fn post_facet_applicable(&self) -> bool {
        self.pc_facets_applicable() && self.pc_tension_types.contains(&TensionFacet::Posttension)
    }

    /// Flips membership of a bridge type, returning whether it is now selected.
    pub fn toggle_bridge_type(&mut self, bridge_type: BridgeType) -> bool {
        toggle(&mut self.bridge_types, bridge_type)
    }

    pub fn toggle_inspection_level(&mut self, level: InspectionLevel) -> bool {
        toggle(&mut self.inspection_levels, level)
    }

    pub fn toggle_tension(&mut self, facet: TensionFacet) -> bool {
        toggle(&mut self.pc_tension_types, facet)
    }

    pub fn toggle_post_category(&mut self, facet: PostCategoryFacet) -> bool {
        toggle(&mut self.pc_post_categories, facet)
    }

    pub fn with_bridge_types(mut self, types: impl IntoIterator<Item = BridgeType>) -> Self {
        self.bridge_types = types.into_iter().collect();
        self
    }

    pub fn with_inspection_levels(
        mut self,
        levels: impl IntoIterator<Item = InspectionLevel>,
    ) -> Self {
        self.inspection_levels = levels.into_iter().collect();
        self
    }

    pub fn with_tension_types(mut self, facets: impl IntoIterator<Item = TensionFacet>) -> Self {
        self.pc_tension_types = facets.into_iter().collect();
        self
    }

    pub fn with_post_categories(
        mut self,
        facets: impl IntoIterator<Item = PostCategoryFacet>,
    ) -> Self {
        self.pc_post_categories = facets.into_iter().collect();
        self
    }

    pub fn with_exclude_culvert(mut self, exclude: bool) -> Self {
        self.exclude_culvert = exclude;
        self
    }

    /// Sets the histogram bin width after checking it is usable.
    pub fn with_length_bin_size(mut self, metres: f64) -> Result<Self> {
        self.length_bin_size_m = metres;
        self.validate()?;
        Ok(self)
    }

    pub fn with_year_grouping(mut self, grouping: YearGrouping) -> Self {
        self.year_grouping = grouping;
        self
    }

    pub fn with_stock_mode(mut self, mode: StockMode) -> Self {
        self.stock_mode = mode;
        self
    }

    pub fn with_stock_scope(mut self, scope: StockScope) -> Self {
        self.stock_scope = scope;
        self
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) -> bool {
    if set.remove(&value) {
        false
    } else {
        set.insert(value);
        true
    }
}
