use bridge_core::{CoreError, DatasetStore, Ingested};
use bridge_ingest::{LogicalColumn, RawRow, RawValue, SchemaTable, SourceTable};
use bridge_model::{BridgeType, DatasetId, Record, RecordId};

const PRIMARY: [&str; 14] = [
    "施設名",
    "路線名",
    "架設年度_西暦",
    "橋長(m)",
    "径間数",
    "上部工（使用材料）",
    "道路管理者名称",
    "道路管理者_管理事務所名",
    "起点側位置_緯度",
    "起点側位置_経度",
    "点検記録_点検実施年度",
    "点検記録_判定区分",
    "上部工（構造形式）",
    "上部工（断面形式）",
];

const ALIASED: [&str; 14] = [
    "施設名",
    "路線名",
    "架設年",
    "橋長",
    "径間",
    "上部工_使用材料",
    "道路管理者名",
    "道路管理事務所名",
    "緯度",
    "経度",
    "点検実施年度",
    "判定区分",
    "構造形式",
    "断面形式",
];

fn rows() -> Vec<Vec<&'static str>> {
    vec![
        vec![
            "朝日橋", "国道1号", "1968", "24.5", "2", "ＰＣ", "北市", "北土木事務所", "35.1",
            "139.2", "2021", "Ⅱ", "ポストテンション", "T桁",
        ],
        vec!["", "", "", "", "", "", "", "", "", "", "", "", "", ""],
        vec![
            "夕日橋", "", "1982年", "1,120", "", "鋼", "", "", "", "", "", "3", "", "",
        ],
    ]
}

fn table(name: &str, headers: &[&str]) -> SourceTable {
    SourceTable::from_text_rows(
        name,
        headers.iter().map(|h| (*h).to_string()).collect(),
        rows(),
    )
}

fn without_ids(records: &[Record]) -> Vec<Record> {
    records
        .iter()
        .cloned()
        .map(|mut record| {
            record.dataset_id = DatasetId::new(0);
            record.id = RecordId::new(record.dataset_id, record.id.ordinal());
            record
        })
        .collect()
}

#[test]
fn alias_headers_yield_identical_records() {
    let mut store = DatasetStore::default();
    let primary = store.ingest(&table("primary", &PRIMARY)).unwrap();
    let aliased = store.ingest(&table("aliased", &ALIASED)).unwrap();
    let primary = store.get(primary.dataset_id().unwrap()).unwrap();
    let aliased = store.get(aliased.dataset_id().unwrap()).unwrap();

    assert_eq!(primary.records().len(), 2);
    assert_eq!(
        without_ids(primary.records()),
        without_ids(aliased.records())
    );
    assert_eq!(primary.stats(), aliased.stats());
}

#[test]
fn ingested_records_are_parsed_and_classified() {
    let mut store = DatasetStore::default();
    let outcome = store.ingest(&table("north", &PRIMARY)).unwrap();
    assert_eq!(outcome, Ingested::Created(DatasetId::new(1)));
    let dataset = store.get(DatasetId::new(1)).unwrap();
    assert_eq!(dataset.label(), "北市");

    let first = &dataset.records()[0];
    assert_eq!(first.bridge_type, BridgeType::Pc);
    assert!(first.is_post_tensioned());
    assert_eq!(first.coordinates(), Some((35.1, 139.2)));

    let second = &dataset.records()[1];
    assert_eq!(second.id.to_string(), "dataset-1-2");
    assert_eq!(second.built_year, Some(1982));
    assert_eq!(second.bridge_length_m, 1120.0);
    assert_eq!(second.bridge_type, BridgeType::Steel);
    assert_eq!(second.route_name, "路線名未設定");
    assert_eq!(second.spans, None);
}

#[test]
fn missing_columns_leave_store_untouched() {
    let mut store = DatasetStore::default();
    store.ingest(&table("first", &PRIMARY)).unwrap();

    let err = store.ingest(&table("broken", &PRIMARY[..3])).unwrap_err();
    let missing = err.missing_columns().unwrap();
    assert_eq!(missing.len(), 9);
    assert_eq!(missing[0].logical, LogicalColumn::BridgeLength);
    assert_eq!(missing[0].primary, "橋長(m)");
    assert_eq!(store.len(), 1);
}

#[test]
fn ingest_all_reports_each_source_in_order() {
    let mut store = DatasetStore::default();
    let empty = SourceTable::from_text_rows(
        "blank",
        PRIMARY.iter().map(|h| (*h).to_string()).collect(),
        vec![vec!["  "]],
    );
    let sources = vec![
        table("a", &PRIMARY),
        table("bad", &["施設名"]),
        empty,
        table("b", &ALIASED),
    ];
    let reports = store.ingest_all(&sources);

    let names: Vec<&str> = reports.iter().map(|r| r.source_name.as_str()).collect();
    assert_eq!(names, vec!["a", "bad", "blank", "b"]);
    assert_eq!(reports[0].created(), Some(DatasetId::new(1)));
    assert!(matches!(reports[1].outcome, Err(CoreError::Ingest(_))));
    assert!(matches!(reports[2].outcome, Ok(Ingested::Empty(_))));
    assert_eq!(reports[3].created(), Some(DatasetId::new(2)));

    let ids: Vec<String> = store
        .datasets()
        .iter()
        .map(|dataset| dataset.id().to_string())
        .collect();
    assert_eq!(ids, vec!["dataset-1", "dataset-2"]);
}

#[test]
fn toggling_and_removal_never_touch_other_stats() {
    let mut store = DatasetStore::default();
    store.ingest(&table("a", &PRIMARY)).unwrap();
    store.ingest(&table("b", &ALIASED)).unwrap();
    let first = DatasetId::new(1);
    let second = DatasetId::new(2);
    let before = store.get(second).unwrap().stats().clone();

    assert!(!store.toggle(first).unwrap());
    assert_eq!(store.active_datasets().count(), 1);
    assert_eq!(store.get(second).unwrap().stats(), &before);

    store.remove(first).unwrap();
    assert_eq!(store.get(second).unwrap().stats(), &before);
    assert!(store.get(first).is_none());

    store.set_active(second, false).unwrap();
    assert_eq!(store.summaries()[0].stats, before);
    assert!(!store.summaries()[0].active);
}

#[test]
fn identifiers_are_not_reused_after_removal() {
    let mut store = DatasetStore::new(SchemaTable::standard());
    store.ingest(&table("a", &PRIMARY)).unwrap();
    store.remove(DatasetId::new(1)).unwrap();
    let outcome = store.ingest(&table("b", &PRIMARY)).unwrap();
    assert_eq!(outcome.dataset_id(), Some(DatasetId::new(2)));
    assert!(matches!(
        store.remove(DatasetId::new(1)),
        Err(CoreError::UnknownDataset { .. })
    ));
}

#[test]
fn caller_rows_keyed_with_marked_headers_keep_their_values() {
    let headers: Vec<String> = PRIMARY
        .iter()
        .map(|header| match *header {
            "施設名" => "\u{feff}施設名".to_string(),
            "路線名" => " 路線名 ".to_string(),
            other => other.to_string(),
        })
        .collect();
    let mut row = RawRow::new();
    row.insert("\u{feff}施設名".to_string(), RawValue::from("朝日橋"));
    row.insert(" 路線名 ".to_string(), RawValue::from("国道1号"));

    let mut store = DatasetStore::default();
    let outcome = store.ingest_rows("bom", &headers, &[row]).unwrap();
    let dataset = store.get(outcome.dataset_id().unwrap()).unwrap();
    let record = &dataset.records()[0];
    assert_eq!(record.facility_name, "朝日橋");
    assert_eq!(record.route_name, "国道1号");
}
