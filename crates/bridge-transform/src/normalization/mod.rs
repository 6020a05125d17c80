//! Field-level normalization: text, numbers, and inspection grades.

pub mod grade;
pub mod numeric;
pub mod text;

pub use grade::normalize_inspection_grade;
pub use numeric::{format_numeric, parse_integer, parse_number, round_to};
pub use text::{contains_any_keyword, fold_width, normalize_text, sanitize_text};
