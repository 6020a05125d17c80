//! The canonical inspected-asset record.

use serde::Serialize;

use crate::enums::{
    BridgeType, InspectionLevel, PostCategory, PostCategoryFacet, TensionFacet, TensionMethod,
};
use crate::ids::{DatasetId, RecordId};

/// Placeholder stored when the facility name column is empty.
pub const UNNAMED_FACILITY: &str = "名称未設定";
/// Placeholder stored when the route name column is empty.
pub const UNNAMED_ROUTE: &str = "路線名未設定";

/// One inspected bridge, produced by the record normalizer.
///
/// Records are never mutated after construction. `lat`/`lng` stay `None` when
/// the source has no usable coordinate; they are never defaulted to zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    pub dataset_id: DatasetId,
    pub facility_name: String,
    pub route_name: String,
    pub built_year: Option<i32>,
    /// Bridge length in metres; 0 when the source value was absent.
    pub bridge_length_m: f64,
    pub spans: Option<i32>,
    pub material_raw: String,
    pub superstructure_type: String,
    pub superstructure_form: String,
    pub bridge_type: BridgeType,
    pub pc_tension_type: Option<TensionMethod>,
    pub pc_post_category: Option<PostCategory>,
    pub is_culvert: bool,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub inspection_year: Option<i32>,
    pub inspection_level: InspectionLevel,
    pub management_name: String,
    pub management_office: String,
}

impl Record {
    /// Both coordinates, when the record can be placed on a map.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => Some((lat, lng)),
            _ => None,
        }
    }

    pub fn has_coordinates(&self) -> bool {
        self.coordinates().is_some()
    }

    pub fn tension_facet(&self) -> TensionFacet {
        TensionFacet::of(self.pc_tension_type)
    }

    pub fn post_category_facet(&self) -> PostCategoryFacet {
        PostCategoryFacet::of(self.pc_post_category)
    }

    pub fn is_post_tensioned(&self) -> bool {
        self.pc_tension_type == Some(TensionMethod::Posttension)
    }

    pub fn length_km(&self) -> f64 {
        if self.bridge_length_m.is_finite() {
            self.bridge_length_m / 1000.0
        } else {
            0.0
        }
    }
}
