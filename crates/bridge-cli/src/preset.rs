//! Filter state assembly from a JSON preset plus command line overrides.

use std::path::Path;

use anyhow::{Context, Result};
use bridge_model::{
    BridgeType, FilterState, InspectionLevel, PostCategoryFacet, StockMode, StockScope,
    TensionFacet, YearGrouping,
};
use tracing::debug;

/// Fields given on the command line; `None` keeps the preset value.
#[derive(Debug, Clone, Default)]
pub struct FilterOverrides {
    pub bridge_types: Option<Vec<BridgeType>>,
    pub inspection_levels: Option<Vec<InspectionLevel>>,
    pub tension: Option<Vec<TensionFacet>>,
    pub post_categories: Option<Vec<PostCategoryFacet>>,
    pub exclude_culvert: Option<bool>,
    pub length_bin_size_m: Option<f64>,
    pub year_grouping: Option<YearGrouping>,
    pub stock_mode: Option<StockMode>,
    pub stock_scope: Option<StockScope>,
}

impl FilterOverrides {
    pub fn apply(&self, mut state: FilterState) -> Result<FilterState> {
        if let Some(types) = &self.bridge_types {
            state = state.with_bridge_types(types.iter().copied());
        }
        if let Some(levels) = &self.inspection_levels {
            state = state.with_inspection_levels(levels.iter().copied());
        }
        if let Some(tension) = &self.tension {
            state = state.with_tension_types(tension.iter().copied());
        }
        if let Some(categories) = &self.post_categories {
            state = state.with_post_categories(categories.iter().copied());
        }
        if let Some(exclude) = self.exclude_culvert {
            state = state.with_exclude_culvert(exclude);
        }
        if let Some(grouping) = self.year_grouping {
            state = state.with_year_grouping(grouping);
        }
        if let Some(mode) = self.stock_mode {
            state = state.with_stock_mode(mode);
        }
        if let Some(scope) = self.stock_scope {
            state = state.with_stock_scope(scope);
        }
        if let Some(metres) = self.length_bin_size_m {
            state = state
                .with_length_bin_size(metres)
                .context("invalid --bin-size")?;
        }
        state.validate().context("invalid filter")?;
        Ok(state)
    }
}

/// Reads a JSON preset; missing fields take their defaults.
pub fn read_preset(path: &Path) -> Result<FilterState> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read preset {}", path.display()))?;
    let state: FilterState = serde_json::from_str(&text)
        .with_context(|| format!("parse preset {}", path.display()))?;
    debug!(path = %path.display(), "loaded filter preset");
    Ok(state)
}

/// The preset (or defaults) with overrides applied, validated.
pub fn load_filter(preset: Option<&Path>, overrides: &FilterOverrides) -> Result<FilterState> {
    let base = match preset {
        Some(path) => read_preset(path)?,
        None => FilterState::default(),
    };
    overrides.apply(base)
}
