#![allow(dead_code)]

use bridge_model::{
    BridgeType, Dataset, DatasetId, InspectionLevel, PostCategory, Record, RecordId,
    TensionMethod,
};

/// A plain RC record graded I with no year, length or coordinates.
pub fn record(dataset: u64, ordinal: u32) -> Record {
    let dataset_id = DatasetId::new(dataset);
    Record {
        id: RecordId::new(dataset_id, ordinal),
        dataset_id,
        facility_name: format!("橋{ordinal}"),
        route_name: "県道1号".to_string(),
        built_year: None,
        bridge_length_m: 0.0,
        spans: Some(1),
        material_raw: "RC".to_string(),
        superstructure_type: String::new(),
        superstructure_form: String::new(),
        bridge_type: BridgeType::Rc,
        pc_tension_type: None,
        pc_post_category: None,
        is_culvert: false,
        lat: None,
        lng: None,
        inspection_year: Some(2020),
        inspection_level: InspectionLevel::I,
        management_name: String::new(),
        management_office: String::new(),
    }
}

pub fn with_length(mut record: Record, metres: f64) -> Record {
    record.bridge_length_m = metres;
    record
}

pub fn with_year(mut record: Record, year: i32) -> Record {
    record.built_year = Some(year);
    record
}

pub fn with_type(mut record: Record, bridge_type: BridgeType) -> Record {
    record.bridge_type = bridge_type;
    record
}

pub fn with_grade(mut record: Record, level: InspectionLevel) -> Record {
    record.inspection_level = level;
    record
}

pub fn post_tensioned(mut record: Record, category: Option<PostCategory>) -> Record {
    record.bridge_type = BridgeType::Pc;
    record.pc_tension_type = Some(TensionMethod::Posttension);
    record.pc_post_category = category;
    record
}

pub fn culvert(mut record: Record) -> Record {
    record.is_culvert = true;
    record
}

pub fn dataset(id: u64, records: Vec<Record>) -> Dataset {
    Dataset::new(DatasetId::new(id), format!("source-{id}"), records)
}
