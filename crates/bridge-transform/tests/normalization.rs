use bridge_ingest::RawValue;
use bridge_model::InspectionLevel;
use bridge_transform::normalization::parse_integer;
use bridge_transform::{normalize_inspection_grade, normalize_text, parse_number};
use proptest::prelude::*;

#[test]
fn grade_variants_share_a_level() {
    for raw in ["Ⅲ", "3", "iii", "III", "３", "判定Ⅲ"] {
        assert_eq!(
            normalize_inspection_grade(&RawValue::from(raw)),
            InspectionLevel::III,
            "{raw}"
        );
    }
    for raw in ["V", "", "5", "Ⅴ", "不明"] {
        assert_eq!(
            normalize_inspection_grade(&RawValue::from(raw)),
            InspectionLevel::Unknown,
            "{raw}"
        );
    }
    assert_eq!(
        normalize_inspection_grade(&RawValue::Number(2.0)),
        InspectionLevel::II
    );
}

proptest! {
    #[test]
    fn grade_canonicalization_is_total(raw in any::<String>()) {
        let value = RawValue::from(raw.as_str());
        let first = normalize_inspection_grade(&value);
        prop_assert_eq!(first, normalize_inspection_grade(&value));
    }

    #[test]
    fn number_parsing_never_yields_non_finite(raw in any::<String>()) {
        if let Some(number) = parse_number(&RawValue::from(raw.as_str())) {
            prop_assert!(number.is_finite());
        }
        let _ = parse_integer(&RawValue::from(raw.as_str()));
    }

    #[test]
    fn plain_decimals_parse_exactly(value in -1.0e6f64..1.0e6f64) {
        let text = format!("{value:.3}");
        let expected: f64 = text.parse().unwrap();
        prop_assert_eq!(parse_number(&RawValue::from(text.as_str())), Some(expected));
    }

    #[test]
    fn normalization_is_idempotent(raw in "[ -~ぁ-ヿｦ-ﾟＡ-ｚ]{0,24}") {
        let once = normalize_text(&raw);
        prop_assert_eq!(normalize_text(&once), once.clone());
    }
}
