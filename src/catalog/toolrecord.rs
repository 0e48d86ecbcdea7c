use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::featurevalue::FeatureValue;
use crate::catalog::pricing::Pricing;
use crate::render::stars::clamp_rating;

/// Feature name used as a comparison row key.
pub type FeatureKey = String;

/// One reviewed AI product.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolRecord {
    /// Unique key within its category.
    pub id: String,
    pub name: String,
    /// Logo reference, passed through as an opaque `src`.
    pub logo: String,
    pub description: String,
    pub pricing: Pricing,
    /// "Best for" category tags.
    pub best_for: Vec<String>,
    /// Always within `[0.0, 5.0]`.
    pub rating: f64,
    pub features: HashMap<FeatureKey, FeatureValue>,
    /// Outbound affiliate link, opaque.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate_url: Option<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_on: Option<NaiveDate>,
}

impl ToolRecord {
    /// Create a record with no features and a zero rating.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        ToolRecord {
            id: id.into(),
            name: name.into(),
            logo: String::new(),
            description: String::new(),
            pricing: Pricing::default(),
            best_for: Vec::new(),
            rating: 0.0,
            features: HashMap::new(),
            affiliate_url: None,
            pros: Vec::new(),
            cons: Vec::new(),
            reviewed_on: None,
        }
    }

    /// Set the rating, clamped into `[0.0, 5.0]`.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = clamp_rating(rating);
        self
    }

    pub fn with_pricing(mut self, pricing: Pricing) -> Self {
        self.pricing = pricing;
        self
    }

    pub fn with_feature(mut self, key: impl Into<FeatureKey>, value: FeatureValue) -> Self {
        self.features.insert(key.into(), value);
        self
    }

    pub fn feature(&self, key: &str) -> Option<&FeatureValue> {
        self.features.get(key)
    }
}
