/// Categories and the catalog that groups them.
pub mod category;
/// Catalog validation errors.
pub mod error;
/// Per-tool feature values.
pub mod featurevalue;
/// JSON document walking and validation.
pub mod parse;
/// Pricing descriptors.
pub mod pricing;
/// Reviewed tool records.
pub mod toolrecord;

pub use category::{Catalog, Category};
pub use error::{CatalogError, Result};
pub use featurevalue::FeatureValue;
pub use pricing::{BillingPeriod, PriceBasis, Pricing};
pub use toolrecord::{FeatureKey, ToolRecord};
