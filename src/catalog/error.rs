use thiserror::Error;

/// Rejection raised while loading authored catalog data.
///
/// `path` fields locate the offending value as `category/tool/field`.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{path}: expected {expected}")]
    Shape { path: String, expected: &'static str },

    #[error("{path}: missing required field '{field}'")]
    MissingField { path: String, field: &'static str },

    #[error("{path}: field '{field}' must not be empty")]
    EmptyField { path: String, field: &'static str },

    #[error("{path}: feature value must be a boolean or a string, found {found}")]
    InvalidFeatureValue { path: String, found: &'static str },

    #[error("{path}: feature filed under '{key}' declares name '{name}'")]
    FeatureNameMismatch {
        path: String,
        key: String,
        name: String,
    },

    #[error("{path}: invalid review date '{value}': {source}")]
    InvalidDate {
        path: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("category '{category}': duplicate tool id '{id}'")]
    DuplicateToolId { category: String, id: String },

    #[error("category '{category}': feature '{feature}' listed twice in compareFeatures")]
    DuplicateCompareFeature { category: String, feature: String },

    #[error("duplicate category slug '{0}'")]
    DuplicateCategory(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
