//! Inspection grade canonicalization.

use bridge_ingest::RawValue;
use bridge_model::InspectionLevel;

use super::numeric::format_numeric;
use super::text::normalize_text;

fn grade_token(token: &str) -> Option<InspectionLevel> {
    match token {
        "I" | "1" => Some(InspectionLevel::I),
        "II" | "2" => Some(InspectionLevel::II),
        "III" | "3" => Some(InspectionLevel::III),
        "IV" | "4" => Some(InspectionLevel::IV),
        _ => None,
    }
}

/// Maps a raw grade (判定区分) to its canonical level.
///
/// Accepts Roman numerals in ASCII or glyph form (`Ⅲ`) and Arabic digits
/// 1-4 in either width, case-insensitively. When the whole value is not a
/// grade, a second attempt keeps only `I`, `V` and digits, so decorated values
/// such as `判定III` still resolve. Anything else is `Unknown`; this never
/// fails.
pub fn normalize_inspection_grade(value: &RawValue) -> InspectionLevel {
    let text = match value {
        RawValue::Text(text) => normalize_text(text),
        RawValue::Number(number) if number.is_finite() => format_numeric(*number),
        RawValue::Number(_) | RawValue::Missing => return InspectionLevel::Unknown,
    };
    if text.is_empty() {
        return InspectionLevel::Unknown;
    }
    if let Some(level) = grade_token(&text) {
        return level;
    }
    let stripped: String = text
        .chars()
        .filter(|ch| matches!(ch, 'I' | 'V') || ch.is_ascii_digit())
        .collect();
    grade_token(&stripped).unwrap_or(InspectionLevel::Unknown)
}
