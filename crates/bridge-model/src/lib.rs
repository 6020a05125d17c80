pub mod dataset;
pub mod enums;
pub mod error;
pub mod filter;
pub mod ids;
pub mod record;

pub use dataset::{Dataset, DatasetStats, DatasetSummary, UNKNOWN_YEAR_RANGE, YearRange};
pub use enums::{
    BridgeType, InspectionLevel, PostCategory, PostCategoryFacet, StockMode, StockScope,
    TensionFacet, TensionMethod, YearGrouping,
};
pub use error::{ModelError, Result};
pub use filter::{DEFAULT_LENGTH_BIN_SIZE_M, FilterState};
pub use ids::{DatasetId, RecordId};
pub use record::{Record, UNNAMED_FACILITY, UNNAMED_ROUTE};
