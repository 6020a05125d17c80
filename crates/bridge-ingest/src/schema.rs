//! Column aliasing: logical columns to whichever physical header a source uses.
//!
//! Bridge inventories exported by different road authorities spell the same
//! column in several ways. [`SchemaTable`] declares the accepted spellings for
//! each logical column; [`SchemaTable::resolve`] checks a header list against
//! it and yields a [`ResolvedSchema`] used for value extraction.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{IngestError, MissingColumn, Result};
use crate::raw::{RawRow, RawValue, normalize_header};

/// A semantic field, independent of its header spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalColumn {
    FacilityName,
    RouteName,
    BuiltYear,
    BridgeLength,
    SpanCount,
    Material,
    ManagementName,
    ManagementOffice,
    Latitude,
    Longitude,
    InspectionYear,
    InspectionGrade,
    SuperstructureType,
    SuperstructureForm,
}

impl LogicalColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalColumn::FacilityName => "facility_name",
            LogicalColumn::RouteName => "route_name",
            LogicalColumn::BuiltYear => "built_year",
            LogicalColumn::BridgeLength => "bridge_length",
            LogicalColumn::SpanCount => "span_count",
            LogicalColumn::Material => "material",
            LogicalColumn::ManagementName => "management_name",
            LogicalColumn::ManagementOffice => "management_office",
            LogicalColumn::Latitude => "latitude",
            LogicalColumn::Longitude => "longitude",
            LogicalColumn::InspectionYear => "inspection_year",
            LogicalColumn::InspectionGrade => "inspection_grade",
            LogicalColumn::SuperstructureType => "superstructure_type",
            LogicalColumn::SuperstructureForm => "superstructure_form",
        }
    }
}

impl fmt::Display for LogicalColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepted header spellings for one logical column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSpec {
    pub logical: LogicalColumn,
    /// Primary name first, then aliases in preference order.
    pub names: Vec<String>,
    pub required: bool,
}

impl ColumnSpec {
    pub fn required(logical: LogicalColumn, primary: &str, aliases: &[&str]) -> Self {
        Self::build(logical, primary, aliases, true)
    }

    pub fn optional(logical: LogicalColumn, primary: &str, aliases: &[&str]) -> Self {
        Self::build(logical, primary, aliases, false)
    }

    fn build(logical: LogicalColumn, primary: &str, aliases: &[&str], required: bool) -> Self {
        let mut names = Vec::with_capacity(aliases.len() + 1);
        names.push(primary.to_string());
        names.extend(aliases.iter().map(|alias| (*alias).to_string()));
        Self {
            logical,
            names,
            required,
        }
    }

    pub fn primary(&self) -> &str {
        &self.names[0]
    }

    pub fn aliases(&self) -> &[String] {
        &self.names[1..]
    }

    /// First accepted name present in `fields`.
    fn find_in<'a>(&self, fields: &'a [String]) -> Option<&'a String> {
        self.names
            .iter()
            .find_map(|name| fields.iter().find(|field| field.as_str() == name))
    }
}

/// Declared alias table.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaTable {
    columns: Vec<ColumnSpec>,
}

impl Default for SchemaTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl SchemaTable {
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self { columns }
    }

    /// Alias table for the national bridge inspection inventory layout.
    pub fn standard() -> Self {
        use LogicalColumn as C;
        Self::new(vec![
            ColumnSpec::required(C::FacilityName, "施設名", &[]),
            ColumnSpec::required(C::RouteName, "路線名", &[]),
            ColumnSpec::required(C::BuiltYear, "架設年度_西暦", &["架設年度", "架設年"]),
            ColumnSpec::required(
                C::BridgeLength,
                "橋長(m)",
                &["橋長", "橋長【m】", "橋長(ｍ)"],
            ),
            ColumnSpec::required(C::SpanCount, "径間数", &["径間", "径間数（径間）"]),
            ColumnSpec::required(
                C::Material,
                "上部工（使用材料）",
                &["上部工_使用材料等", "上部工_使用材料", "上部工使用材料"],
            ),
            ColumnSpec::required(
                C::ManagementName,
                "道路管理者名称",
                &["道路管理者名", "道路管理者_名称"],
            ),
            ColumnSpec::required(
                C::ManagementOffice,
                "道路管理者_管理事務所名",
                &["道路管理者管理事務所名", "道路管理事務所名"],
            ),
            ColumnSpec::required(C::Latitude, "起点側位置_緯度", &["緯度"]),
            ColumnSpec::required(C::Longitude, "起点側位置_経度", &["経度"]),
            ColumnSpec::required(
                C::InspectionYear,
                "点検記録_点検実施年度",
                &["点検記録_点検実施年次", "点検実施年度"],
            ),
            ColumnSpec::required(
                C::InspectionGrade,
                "点検記録_判定区分",
                &["点検判定区分", "判定区分"],
            ),
            ColumnSpec::optional(
                C::SuperstructureType,
                "上部工（構造形式）",
                &["上部工_構造形式", "上部構造形式", "構造形式"],
            ),
            ColumnSpec::optional(
                C::SuperstructureForm,
                "上部工（断面形式）",
                &["上部工_断面形式", "断面形式"],
            ),
        ])
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn spec(&self, logical: LogicalColumn) -> Option<&ColumnSpec> {
        self.columns.iter().find(|spec| spec.logical == logical)
    }

    /// Reports whether any accepted name for `logical` appears in `fields`.
    pub fn resolve_column(&self, fields: &[String], logical: LogicalColumn) -> bool {
        self.spec(logical)
            .is_some_and(|spec| spec.find_in(fields).is_some())
    }

    /// Resolves every column against a header list.
    ///
    /// Fails with [`IngestError::MissingColumns`] when any required column is
    /// unresolved; optional columns are simply left out.
    pub fn resolve(&self, source_name: &str, fields: &[String]) -> Result<ResolvedSchema> {
        let fields: Vec<String> = fields.iter().map(|f| normalize_header(f)).collect();
        let mut headers = BTreeMap::new();
        let mut missing = Vec::new();
        for spec in &self.columns {
            match spec.find_in(&fields) {
                Some(header) => {
                    if header != spec.primary() {
                        debug!(
                            source = source_name,
                            column = %spec.logical,
                            header = %header,
                            "resolved column through alias"
                        );
                    }
                    headers.insert(spec.logical, header.clone());
                }
                None if spec.required => missing.push(MissingColumn {
                    logical: spec.logical,
                    primary: spec.primary().to_string(),
                }),
                None => {}
            }
        }
        if !missing.is_empty() {
            return Err(IngestError::MissingColumns {
                source_name: source_name.to_string(),
                missing,
            });
        }
        Ok(ResolvedSchema { headers })
    }
}

/// Physical header chosen for each resolved logical column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSchema {
    headers: BTreeMap<LogicalColumn, String>,
}

impl ResolvedSchema {
    pub fn header(&self, logical: LogicalColumn) -> Option<&str> {
        self.headers.get(&logical).map(String::as_str)
    }

    /// The value a row holds for a logical column, `Missing` when unresolved.
    ///
    /// Row keys are matched after the same header normalization used during
    /// resolution, so a row keyed `"\u{feff}施設名"` still yields its value.
    pub fn value<'a>(&self, row: &'a RawRow, logical: LogicalColumn) -> &'a RawValue {
        const MISSING: &RawValue = &RawValue::Missing;
        let Some(header) = self.header(logical) else {
            return MISSING;
        };
        row.get(header)
            .or_else(|| {
                row.iter()
                    .find(|(key, _)| normalize_header(key) == header)
                    .map(|(_, value)| value)
            })
            .unwrap_or(MISSING)
    }
}
