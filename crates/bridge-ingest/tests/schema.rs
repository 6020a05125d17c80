use bridge_ingest::{LogicalColumn, RawRow, RawValue, SchemaTable};

const PRIMARY: [&str; 12] = [
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
];

const ALIASED: [&str; 12] = [
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
];

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

#[test]
fn primary_and_alias_headers_both_resolve() {
    let table = SchemaTable::standard();
    assert!(table.resolve("primary", &headers(&PRIMARY)).is_ok());
    assert!(table.resolve("aliased", &headers(&ALIASED)).is_ok());
}

#[test]
fn aliased_schema_reads_same_values() {
    let table = SchemaTable::standard();
    let primary = table.resolve("primary", &headers(&PRIMARY)).unwrap();
    let aliased = table.resolve("aliased", &headers(&ALIASED)).unwrap();

    let mut left = RawRow::new();
    left.insert("橋長(m)".to_string(), RawValue::from("42"));
    let mut right = RawRow::new();
    right.insert("橋長".to_string(), RawValue::from("42"));

    assert_eq!(
        primary.value(&left, LogicalColumn::BridgeLength),
        aliased.value(&right, LogicalColumn::BridgeLength)
    );
}

#[test]
fn optional_columns_never_block_resolution() {
    let table = SchemaTable::standard();
    let schema = table.resolve("primary", &headers(&PRIMARY)).unwrap();
    assert_eq!(schema.header(LogicalColumn::SuperstructureType), None);
    let row = RawRow::new();
    assert!(schema.value(&row, LogicalColumn::SuperstructureType).is_missing());
}

#[test]
fn headers_are_trimmed_before_matching() {
    let table = SchemaTable::standard();
    let mut padded = headers(&PRIMARY);
    padded[0] = " 施設名 ".to_string();
    let schema = table.resolve("padded", &padded).unwrap();
    assert_eq!(schema.header(LogicalColumn::FacilityName), Some("施設名"));
}

#[test]
fn values_follow_untrimmed_row_keys() {
    let table = SchemaTable::standard();
    let mut marked = headers(&PRIMARY);
    marked[0] = "\u{feff}施設名".to_string();
    marked[3] = " 橋長(m) ".to_string();
    let schema = table.resolve("marked", &marked).unwrap();

    let mut row = RawRow::new();
    row.insert("\u{feff}施設名".to_string(), RawValue::from("朝日橋"));
    row.insert(" 橋長(m) ".to_string(), RawValue::from("12"));
    assert_eq!(
        schema.value(&row, LogicalColumn::FacilityName),
        &RawValue::from("朝日橋")
    );
    assert_eq!(
        schema.value(&row, LogicalColumn::BridgeLength),
        &RawValue::from("12")
    );
    assert!(schema.value(&row, LogicalColumn::RouteName).is_missing());
}

#[test]
fn single_missing_column_rejects_source() {
    let table = SchemaTable::standard();
    let without_grade: Vec<&str> = PRIMARY[..11].to_vec();
    let err = table.resolve("no-grade", &headers(&without_grade)).unwrap_err();
    let missing = err.missing_columns().unwrap();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].logical, LogicalColumn::InspectionGrade);
    assert_eq!(missing[0].primary, "点検記録_判定区分");
}
