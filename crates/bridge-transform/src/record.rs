//! Raw row to typed [`Record`] conversion.

use bridge_ingest::{LogicalColumn, RawRow, ResolvedSchema};
use bridge_model::{
    DatasetId, InspectionLevel, Record, RecordId, UNNAMED_FACILITY, UNNAMED_ROUTE,
};
use tracing::trace;

use crate::classification::{ClassificationInput, classify};
use crate::normalization::{normalize_inspection_grade, parse_integer, parse_number, sanitize_text};

/// Converts rows of one resolved source into records.
///
/// Malformed field values degrade to absent or empty; only a row whose every
/// meaningful field is absent is discarded.
#[derive(Debug, Clone, Copy)]
pub struct RecordNormalizer<'a> {
    schema: &'a ResolvedSchema,
}

impl<'a> RecordNormalizer<'a> {
    pub fn new(schema: &'a ResolvedSchema) -> Self {
        Self { schema }
    }

    /// Normalizes the row at `ordinal` of a dataset, or `None` to discard it.
    pub fn normalize(&self, row: &RawRow, dataset_id: DatasetId, ordinal: u32) -> Option<Record> {
        use LogicalColumn as C;
        let text = |column| sanitize_text(self.schema.value(row, column));
        let integer = |column| parse_integer(self.schema.value(row, column));
        let number = |column| parse_number(self.schema.value(row, column));

        let facility_name = text(C::FacilityName);
        let route_name = text(C::RouteName);
        let built_year = integer(C::BuiltYear);
        let bridge_length_m = number(C::BridgeLength);
        let material_raw = text(C::Material);
        let management_name = text(C::ManagementName);
        let inspection_year = integer(C::InspectionYear);
        let inspection_level =
            normalize_inspection_grade(self.schema.value(row, C::InspectionGrade));

        let discard = facility_name.is_empty()
            && route_name.is_empty()
            && built_year.is_none()
            && bridge_length_m.is_none()
            && material_raw.is_empty()
            && management_name.is_empty()
            && inspection_year.is_none()
            && inspection_level == InspectionLevel::Unknown;
        if discard {
            trace!(dataset = %dataset_id, ordinal, "discarding row without meaningful fields");
            return None;
        }

        let superstructure_type = text(C::SuperstructureType);
        let superstructure_form = text(C::SuperstructureForm);
        let classification = classify(&ClassificationInput {
            material: &material_raw,
            superstructure_type: &superstructure_type,
            superstructure_form: &superstructure_form,
        });

        Some(Record {
            id: RecordId::new(dataset_id, ordinal),
            dataset_id,
            facility_name: or_placeholder(facility_name, UNNAMED_FACILITY),
            route_name: or_placeholder(route_name, UNNAMED_ROUTE),
            built_year,
            bridge_length_m: bridge_length_m.unwrap_or(0.0),
            spans: integer(C::SpanCount),
            material_raw,
            superstructure_type,
            superstructure_form,
            bridge_type: classification.bridge_type,
            pc_tension_type: classification.pc_tension_type,
            pc_post_category: classification.pc_post_category,
            is_culvert: classification.is_culvert,
            lat: number(C::Latitude),
            lng: number(C::Longitude),
            inspection_year,
            inspection_level,
            management_name,
            management_office: text(C::ManagementOffice),
        })
    }

    /// Normalizes every row in order, dropping discards.
    ///
    /// Ordinals are row positions, so ids stay stable when earlier rows are
    /// discarded.
    pub fn normalize_all<'r, I>(&self, rows: I, dataset_id: DatasetId) -> Vec<Record>
    where
        I: IntoIterator<Item = &'r RawRow>,
    {
        rows.into_iter()
            .zip(0u32..)
            .filter_map(|(row, ordinal)| self.normalize(row, dataset_id, ordinal))
            .collect()
    }
}

fn or_placeholder(value: String, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use bridge_ingest::{RawValue, SchemaTable};
    use bridge_model::{BridgeType, TensionMethod};

    use super::*;

    fn schema() -> ResolvedSchema {
        let table = SchemaTable::standard();
        let headers: Vec<String> = table
            .columns()
            .iter()
            .map(|spec| spec.primary().to_string())
            .collect();
        table.resolve("test", &headers).unwrap()
    }

    fn row(cells: &[(&str, RawValue)]) -> RawRow {
        cells
            .iter()
            .map(|(header, value)| ((*header).to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn blank_row_is_discarded() {
        let schema = schema();
        let normalizer = RecordNormalizer::new(&schema);
        let blank = row(&[("施設名", RawValue::from("  ")), ("橋長(m)", RawValue::from("-"))]);
        assert!(normalizer.normalize(&blank, DatasetId::new(1), 0).is_none());
    }

    #[test]
    fn single_grade_keeps_row_with_placeholders() {
        let schema = schema();
        let normalizer = RecordNormalizer::new(&schema);
        let record = normalizer
            .normalize(&row(&[("点検記録_判定区分", RawValue::from("III"))]), DatasetId::new(1), 4)
            .unwrap();
        assert_eq!(record.inspection_level, InspectionLevel::III);
        assert_eq!(record.facility_name, UNNAMED_FACILITY);
        assert_eq!(record.route_name, UNNAMED_ROUTE);
        assert_eq!(record.bridge_length_m, 0.0);
        assert_eq!(record.lat, None);
        assert_eq!(record.id.to_string(), "dataset-1-4");
    }

    #[test]
    fn malformed_fields_degrade_to_absent() {
        let schema = schema();
        let normalizer = RecordNormalizer::new(&schema);
        let record = normalizer
            .normalize(
                &row(&[
                    ("施設名", RawValue::from("朝日橋")),
                    ("架設年度_西暦", RawValue::from("不明")),
                    ("起点側位置_緯度", RawValue::from("")),
                    ("径間数", RawValue::Number(f64::NAN)),
                ]),
                DatasetId::new(2),
                0,
            )
            .unwrap();
        assert_eq!(record.built_year, None);
        assert_eq!(record.spans, None);
        assert_eq!(record.lat, None);
    }

    #[test]
    fn classification_uses_structure_columns() {
        let schema = schema();
        let normalizer = RecordNormalizer::new(&schema);
        let record = normalizer
            .normalize(
                &row(&[
                    ("上部工（使用材料）", RawValue::from("ＰＣ")),
                    ("上部工（構造形式）", RawValue::from("ﾎﾟｽﾃﾝ箱桁")),
                ]),
                DatasetId::new(3),
                0,
            )
            .unwrap();
        assert_eq!(record.bridge_type, BridgeType::Pc);
        assert_eq!(record.pc_tension_type, Some(TensionMethod::Posttension));
        assert!(record.is_post_tensioned());
    }

    #[test]
    fn normalize_all_keeps_row_ordinals() {
        let schema = schema();
        let normalizer = RecordNormalizer::new(&schema);
        let rows = vec![
            row(&[("施設名", RawValue::from("A"))]),
            row(&[]),
            row(&[("施設名", RawValue::from("C"))]),
        ];
        let records = normalizer.normalize_all(&rows, DatasetId::new(5));
        let ordinals: Vec<u32> = records.iter().map(|r| r.id.ordinal()).collect();
        assert_eq!(ordinals, vec![0, 2]);
    }
}
