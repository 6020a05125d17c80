mod common;

use bridge_core::{FilterOptions, filter_records, record_matches};
use bridge_model::{
    BridgeType, FilterState, InspectionLevel, PostCategory, PostCategoryFacet, Record,
    TensionFacet,
};
use common::{culvert, dataset, post_tensioned, record, with_grade, with_type};

fn ids(records: &[&Record]) -> Vec<String> {
    records.iter().map(|record| record.id.to_string()).collect()
}

fn mixed() -> Vec<Record> {
    vec![
        record(1, 0),
        post_tensioned(record(1, 1), Some(PostCategory::TGirder)),
        post_tensioned(record(1, 2), None),
        with_type(record(1, 3), BridgeType::Steel),
        culvert(record(1, 4)),
        with_grade(record(1, 5), InspectionLevel::Unknown),
    ]
}

#[test]
fn default_state_keeps_everything() {
    let datasets = vec![dataset(1, mixed())];
    let records = filter_records(&datasets, &FilterState::default(), FilterOptions::default());
    assert_eq!(records.len(), 6);
}

#[test]
fn inactive_datasets_are_skipped() {
    let mut datasets = vec![dataset(1, mixed()), dataset(2, vec![record(2, 0)])];
    datasets[0].set_active(false);
    let records = filter_records(&datasets, &FilterState::default(), FilterOptions::default());
    assert_eq!(ids(&records), vec!["dataset-2-0"]);
}

#[test]
fn pc_sub_facets_are_inert_without_pc() {
    let datasets = vec![dataset(1, mixed())];
    let base = FilterState::default().with_bridge_types([BridgeType::Rc, BridgeType::Steel]);
    let narrowed = base
        .clone()
        .with_tension_types([TensionFacet::Pretension])
        .with_post_categories([PostCategoryFacet::BoxGirder]);

    let expected = filter_records(&datasets, &base, FilterOptions::default());
    let actual = filter_records(&datasets, &narrowed, FilterOptions::default());
    assert_eq!(ids(&expected), ids(&actual));
    assert_eq!(expected.len(), 4);
}

#[test]
fn post_category_applies_only_to_post_tensioned_pc() {
    let datasets = vec![dataset(1, mixed())];
    let state = FilterState::default().with_post_categories([PostCategoryFacet::TGirder]);
    let records = filter_records(&datasets, &state, FilterOptions::default());
    assert_eq!(
        ids(&records),
        vec![
            "dataset-1-0",
            "dataset-1-1",
            "dataset-1-3",
            "dataset-1-4",
            "dataset-1-5"
        ]
    );

    let state = FilterState::default().with_post_categories([PostCategoryFacet::Unspecified]);
    let records = filter_records(&datasets, &state, FilterOptions::default());
    assert!(ids(&records).contains(&"dataset-1-2".to_string()));
    assert!(!ids(&records).contains(&"dataset-1-1".to_string()));
}

#[test]
fn tension_facet_excludes_unknown_pc() {
    let mut pc_unknown = record(1, 9);
    pc_unknown.bridge_type = BridgeType::Pc;
    let state = FilterState::default().with_tension_types([TensionFacet::Posttension]);
    assert!(!record_matches(&pc_unknown, &state, FilterOptions::default()));
    assert!(record_matches(&record(1, 0), &state, FilterOptions::default()));
}

#[test]
fn culvert_exclusion_can_be_skipped() {
    let datasets = vec![dataset(1, mixed())];
    let state = FilterState::default().with_exclude_culvert(true);
    let filtered = filter_records(&datasets, &state, FilterOptions::default());
    let skipped = filter_records(&datasets, &state, FilterOptions::skip_culvert_filter());
    assert_eq!(filtered.len(), 5);
    assert_eq!(skipped.len(), 6);
}

#[test]
fn inspection_level_facet_includes_unknown_only_when_selected() {
    let datasets = vec![dataset(1, mixed())];
    let state = FilterState::default().with_inspection_levels([InspectionLevel::Unknown]);
    let records = filter_records(&datasets, &state, FilterOptions::default());
    assert_eq!(ids(&records), vec!["dataset-1-5"]);
}
