//! Map marker extraction.

use bridge_model::{BridgeType, InspectionLevel, Record, RecordId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapPoint {
    pub id: RecordId,
    pub lat: f64,
    pub lng: f64,
    pub facility_name: String,
    pub route_name: String,
    pub bridge_type: BridgeType,
    pub inspection_level: InspectionLevel,
    pub built_year: Option<i32>,
    pub bridge_length_m: f64,
    /// Marker shape: `pc`, `rc`, `steel` or `other`.
    pub marker_key: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapPoints {
    pub points: Vec<MapPoint>,
    /// Records left off the map for lack of coordinates.
    pub missing: usize,
}

pub fn map_points(records: &[&Record]) -> MapPoints {
    let points: Vec<MapPoint> = records
        .iter()
        .filter_map(|record| {
            let (lat, lng) = record.coordinates()?;
            Some(MapPoint {
                id: record.id,
                lat,
                lng,
                facility_name: record.facility_name.clone(),
                route_name: record.route_name.clone(),
                bridge_type: record.bridge_type,
                inspection_level: record.inspection_level,
                built_year: record.built_year,
                bridge_length_m: record.bridge_length_m,
                marker_key: record.bridge_type.marker_key(),
            })
        })
        .collect();
    MapPoints {
        missing: records.len() - points.len(),
        points,
    }
}
