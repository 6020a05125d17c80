//! Bridge record transformation.
//!
//! - **normalization**: width folding, number and grade parsing
//! - **classification**: ordered keyword rules for construction type,
//!   prestressing method, post-tension sub-form and culverts
//! - **record**: raw row to typed [`bridge_model::Record`] conversion

pub mod classification;
pub mod normalization;
pub mod record;

pub use classification::{Classification, ClassificationInput, classify};
pub use normalization::{
    contains_any_keyword, normalize_inspection_grade, normalize_text, parse_number, round_to,
    sanitize_text,
};
pub use record::RecordNormalizer;
