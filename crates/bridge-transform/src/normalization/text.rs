//! Text canonicalization for keyword matching.
//!
//! Inventory exports mix full-width and half-width forms of the same token
//! (`ＰＣ` / `PC`, `ｶﾙﾊﾞｰﾄ` / `カルバート`, `Ⅲ` / `III`). Every comparison in the
//! classification rules goes through [`normalize_text`] on both sides so those
//! variants match identically.

use bridge_ingest::RawValue;

use super::numeric::format_numeric;

/// Half-width katakana block U+FF61..=U+FF9F mapped to standard forms.
const HALF_WIDTH_KANA: [char; 63] = [
    '。', '「', '」', '、', '・', 'ヲ', 'ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ャ', 'ュ', 'ョ', 'ッ',
    'ー', 'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ',
    'ソ', 'タ', 'チ', 'ツ', 'テ', 'ト', 'ナ', 'ニ', 'ヌ', 'ネ', 'ノ', 'ハ', 'ヒ', 'フ', 'ヘ',
    'ホ', 'マ', 'ミ', 'ム', 'メ', 'モ', 'ヤ', 'ユ', 'ヨ', 'ラ', 'リ', 'ル', 'レ', 'ロ', 'ワ',
    'ン', '゛', '゜',
];

const HALF_WIDTH_VOICED_MARK: char = '\u{ff9e}';
const HALF_WIDTH_SEMI_VOICED_MARK: char = '\u{ff9f}';

const ROMAN_NUMERALS: [&str; 12] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII",
];

fn half_width_kana(ch: char) -> Option<char> {
    let code = ch as u32;
    (0xff61..=0xff9f)
        .contains(&code)
        .then(|| HALF_WIDTH_KANA[(code - 0xff61) as usize])
}

/// Composes a kana with a following (half-width) voicing mark.
fn compose_voiced(base: char, mark: char) -> Option<char> {
    let code = base as u32;
    match mark {
        HALF_WIDTH_VOICED_MARK => match base {
            'ウ' => Some('ヴ'),
            'カ' | 'キ' | 'ク' | 'ケ' | 'コ' | 'サ' | 'シ' | 'ス' | 'セ' | 'ソ' | 'タ' | 'チ'
            | 'ツ' | 'テ' | 'ト' | 'ハ' | 'ヒ' | 'フ' | 'ヘ' | 'ホ' => char::from_u32(code + 1),
            _ => None,
        },
        HALF_WIDTH_SEMI_VOICED_MARK => match base {
            'ハ' | 'ヒ' | 'フ' | 'ヘ' | 'ホ' => char::from_u32(code + 2),
            _ => None,
        },
        _ => None,
    }
}

/// Folds width variants to their standard forms without changing case.
///
/// Covers full-width ASCII, the ideographic space, half-width katakana with
/// voicing marks, Roman numeral glyphs, and dash variants.
pub fn fold_width(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        let code = ch as u32;
        match code {
            0xff01..=0xff5e => {
                if let Some(ascii) = char::from_u32(code - 0xfee0) {
                    out.push(ascii);
                }
            }
            0x3000 => out.push(' '),
            0x2160..=0x216b => out.push_str(ROMAN_NUMERALS[(code - 0x2160) as usize]),
            0x2170..=0x217b => {
                out.push_str(&ROMAN_NUMERALS[(code - 0x2170) as usize].to_lowercase());
            }
            0x2010..=0x2015 | 0x2212 => out.push('-'),
            0xff61..=0xff9f => {
                let Some(kana) = half_width_kana(ch) else {
                    continue;
                };
                let composed = chars
                    .peek()
                    .and_then(|&mark| compose_voiced(kana, mark));
                match composed {
                    Some(voiced) => {
                        chars.next();
                        out.push(voiced);
                    }
                    None => out.push(kana),
                }
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Canonical matching form: width-folded, trimmed, uppercased.
///
/// Empty input yields an empty string.
pub fn normalize_text(text: &str) -> String {
    fold_width(text).trim().to_uppercase()
}

/// Whether `text` contains any of `keywords`, both sides normalized.
///
/// Stops at the first matching keyword. Empty keywords never match.
pub fn contains_any_keyword<S: AsRef<str>>(text: &str, keywords: &[S]) -> bool {
    let haystack = normalize_text(text);
    if haystack.is_empty() {
        return false;
    }
    keywords.iter().any(|keyword| {
        let needle = normalize_text(keyword.as_ref());
        !needle.is_empty() && haystack.contains(&needle)
    })
}

/// Trimmed text of a raw field; typed numbers are rendered, missing is empty.
pub fn sanitize_text(value: &RawValue) -> String {
    match value {
        RawValue::Text(text) => text.trim().to_string(),
        RawValue::Number(number) if number.is_finite() => format_numeric(*number),
        RawValue::Number(number) => number.to_string(),
        RawValue::Missing => String::new(),
    }
}
