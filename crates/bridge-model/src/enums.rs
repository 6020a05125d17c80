//! Type-safe enumerations for bridge inspection records.
//!
//! Source data carries these concepts as free text in two locales
//! (Japanese inventory vocabulary and English codes). The enums below are
//! the canonical forms every downstream component works with.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bridge construction type derived from material and structure descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BridgeType {
    /// Prestressed concrete (PC橋).
    #[serde(rename = "PC")]
    Pc,
    /// Reinforced concrete (RC橋).
    #[serde(rename = "RC")]
    Rc,
    /// Steel (鋼橋).
    #[serde(rename = "STEEL")]
    Steel,
    /// Anything no classification rule matched (その他).
    #[serde(rename = "OTHER")]
    Other,
}

impl BridgeType {
    /// Display and aggregation order.
    pub const ALL: [BridgeType; 4] = [
        BridgeType::Pc,
        BridgeType::Rc,
        BridgeType::Steel,
        BridgeType::Other,
    ];

    /// Returns the stable code used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            BridgeType::Pc => "PC",
            BridgeType::Rc => "RC",
            BridgeType::Steel => "STEEL",
            BridgeType::Other => "OTHER",
        }
    }

    /// Returns the inventory label used by the source data.
    pub fn label(&self) -> &'static str {
        match self {
            BridgeType::Pc => "PC橋",
            BridgeType::Rc => "RC橋",
            BridgeType::Steel => "鋼橋",
            BridgeType::Other => "その他",
        }
    }

    /// Short lowercase key used for map marker shapes.
    pub fn marker_key(&self) -> &'static str {
        match self {
            BridgeType::Pc => "pc",
            BridgeType::Rc => "rc",
            BridgeType::Steel => "steel",
            BridgeType::Other => "other",
        }
    }
}

impl fmt::Display for BridgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for BridgeType {
    type Err = String;

    /// Accepts the code, the English name, or the inventory label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "PC" | "PC橋" => Ok(BridgeType::Pc),
            "RC" | "RC橋" => Ok(BridgeType::Rc),
            "STEEL" | "鋼橋" => Ok(BridgeType::Steel),
            "OTHER" | "その他" => Ok(BridgeType::Other),
            _ => Err(format!("Unknown bridge type: {s}")),
        }
    }
}

/// Canonical periodic-inspection grade (判定区分).
///
/// Grades I to IV follow the national inspection guideline; anything that
/// cannot be read as one of them is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InspectionLevel {
    #[serde(rename = "I")]
    I,
    #[serde(rename = "II")]
    II,
    #[serde(rename = "III")]
    III,
    #[serde(rename = "IV")]
    IV,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl InspectionLevel {
    pub const ALL: [InspectionLevel; 5] = [
        InspectionLevel::I,
        InspectionLevel::II,
        InspectionLevel::III,
        InspectionLevel::IV,
        InspectionLevel::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InspectionLevel::I => "I",
            InspectionLevel::II => "II",
            InspectionLevel::III => "III",
            InspectionLevel::IV => "IV",
            InspectionLevel::Unknown => "UNKNOWN",
        }
    }

    /// Grades III and IV require early or urgent measures.
    pub fn is_flagged(&self) -> bool {
        matches!(self, InspectionLevel::III | InspectionLevel::IV)
    }

    pub fn is_inspected(&self) -> bool {
        !matches!(self, InspectionLevel::Unknown)
    }
}

impl fmt::Display for InspectionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InspectionLevel {
    type Err = String;

    /// Parses the canonical code only. Raw source values go through the
    /// lenient grade normalizer instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "I" => Ok(InspectionLevel::I),
            "II" => Ok(InspectionLevel::II),
            "III" => Ok(InspectionLevel::III),
            "IV" => Ok(InspectionLevel::IV),
            "UNKNOWN" => Ok(InspectionLevel::Unknown),
            _ => Err(format!("Unknown inspection level: {s}")),
        }
    }
}

/// Prestressing method of a PC bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TensionMethod {
    /// Pre-tensioned (プレテンション).
    Pretension,
    /// Post-tensioned (ポストテンション).
    Posttension,
}

impl TensionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            TensionMethod::Pretension => "pretension",
            TensionMethod::Posttension => "posttension",
        }
    }
}

impl fmt::Display for TensionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sub-form of a post-tensioned PC superstructure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostCategory {
    /// Hollow slab (中空床版).
    HollowSlab,
    /// T-girder (T桁).
    TGirder,
    /// Box girder (箱桁).
    BoxGirder,
    /// Detail text present but no sub-form keyword matched.
    Other,
}

impl PostCategory {
    pub const ALL: [PostCategory; 4] = [
        PostCategory::HollowSlab,
        PostCategory::TGirder,
        PostCategory::BoxGirder,
        PostCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostCategory::HollowSlab => "hollow_slab",
            PostCategory::TGirder => "t_girder",
            PostCategory::BoxGirder => "box_girder",
            PostCategory::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PostCategory::HollowSlab => "中空床版",
            PostCategory::TGirder => "T桁",
            PostCategory::BoxGirder => "箱桁",
            PostCategory::Other => "その他",
        }
    }
}

impl fmt::Display for PostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Selectable value of the tension-method facet.
///
/// Records without a resolved tension method fall into `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TensionFacet {
    Pretension,
    Posttension,
    Unknown,
}

impl TensionFacet {
    pub const ALL: [TensionFacet; 3] = [
        TensionFacet::Pretension,
        TensionFacet::Posttension,
        TensionFacet::Unknown,
    ];

    pub fn of(method: Option<TensionMethod>) -> Self {
        match method {
            Some(TensionMethod::Pretension) => TensionFacet::Pretension,
            Some(TensionMethod::Posttension) => TensionFacet::Posttension,
            None => TensionFacet::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TensionFacet::Pretension => "pretension",
            TensionFacet::Posttension => "posttension",
            TensionFacet::Unknown => "unknown",
        }
    }
}

impl FromStr for TensionFacet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretension" | "pre" => Ok(TensionFacet::Pretension),
            "posttension" | "post" => Ok(TensionFacet::Posttension),
            "unknown" => Ok(TensionFacet::Unknown),
            _ => Err(format!("Unknown tension facet: {s}")),
        }
    }
}

/// Selectable value of the post-tension sub-form facet.
///
/// `Unspecified` holds post-tensioned records whose structure detail text was
/// empty. It is distinct from `Other`, which means the detail text existed but
/// matched no sub-form keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostCategoryFacet {
    HollowSlab,
    TGirder,
    BoxGirder,
    Other,
    Unspecified,
}

impl PostCategoryFacet {
    pub const ALL: [PostCategoryFacet; 5] = [
        PostCategoryFacet::HollowSlab,
        PostCategoryFacet::TGirder,
        PostCategoryFacet::BoxGirder,
        PostCategoryFacet::Other,
        PostCategoryFacet::Unspecified,
    ];

    pub fn of(category: Option<PostCategory>) -> Self {
        match category {
            Some(PostCategory::HollowSlab) => PostCategoryFacet::HollowSlab,
            Some(PostCategory::TGirder) => PostCategoryFacet::TGirder,
            Some(PostCategory::BoxGirder) => PostCategoryFacet::BoxGirder,
            Some(PostCategory::Other) => PostCategoryFacet::Other,
            None => PostCategoryFacet::Unspecified,
        }
    }
}

impl FromStr for PostCategoryFacet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "hollow_slab" | "hollow" => Ok(PostCategoryFacet::HollowSlab),
            "t_girder" | "t" => Ok(PostCategoryFacet::TGirder),
            "box_girder" | "box" => Ok(PostCategoryFacet::BoxGirder),
            "other" => Ok(PostCategoryFacet::Other),
            "unspecified" | "none" => Ok(PostCategoryFacet::Unspecified),
            _ => Err(format!("Unknown post-tension category: {s}")),
        }
    }
}

/// Bucket granularity of the built-year chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearGrouping {
    Year,
    #[default]
    Decade,
}

/// Quantity summed by the stock chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockMode {
    /// Number of bridges.
    #[default]
    Count,
    /// Total bridge length in kilometres.
    Length,
}

/// Dimension the stock chart groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockScope {
    #[default]
    BridgeType,
    Dataset,
}
