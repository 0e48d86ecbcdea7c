use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::error::Result;
use crate::catalog::parse::parse_catalog;
use crate::catalog::toolrecord::{FeatureKey, ToolRecord};
use crate::render::comparisontable::ComparisonGrid;

/// A named group of tools compared against each other, e.g. image generators.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub slug: String,
    pub name: String,
    /// Default row order for this category's comparison table.
    pub compare_features: Vec<FeatureKey>,
    pub tools: Vec<ToolRecord>,
}

impl Category {
    pub fn tool(&self, id: &str) -> Option<&ToolRecord> {
        self.tools.iter().find(|tool| tool.id == id)
    }

    /// Every feature key present across the category's tools, in first-seen
    /// order. Keys within one tool are visited alphabetically.
    pub fn feature_key_union(&self) -> Vec<FeatureKey> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut keys: Vec<FeatureKey> = vec![];

        for tool in &self.tools {
            let mut tool_keys: Vec<&FeatureKey> = tool.features.keys().collect();
            tool_keys.sort();
            for key in tool_keys {
                if seen.insert(key.as_str()) {
                    keys.push(key.clone());
                }
            }
        }

        keys
    }

    /// Grid of all tools against the category's default feature keys.
    pub fn comparison_grid(&self) -> ComparisonGrid {
        ComparisonGrid::build(&self.tools, &self.compare_features, &self.name)
    }
}

/// All categories of the site, loaded once and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Parse and validate a catalog document.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        parse_catalog(&json)
    }

    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.slug == slug)
    }

    pub fn tool_count(&self) -> usize {
        self.categories.iter().map(|category| category.tools.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::featurevalue::FeatureValue;

    fn category() -> Category {
        Category {
            slug: "video".to_string(),
            name: "AI Video Generators".to_string(),
            compare_features: vec!["Lip sync".to_string()],
            tools: vec![
                ToolRecord::new("runway", "Runway")
                    .with_feature("Max resolution", FeatureValue::text("4K"))
                    .with_feature("Lip sync", FeatureValue::flag(true)),
                ToolRecord::new("pika", "Pika")
                    .with_feature("Lip sync", FeatureValue::flag(true))
                    .with_feature("Camera controls", FeatureValue::flag(true)),
            ],
        }
    }

    #[test]
    fn union_is_deduplicated_in_first_seen_order() {
        assert_eq!(
            category().feature_key_union(),
            vec!["Lip sync", "Max resolution", "Camera controls"]
        );
    }

    #[test]
    fn looks_up_tools_by_id() {
        let category = category();
        assert_eq!(category.tool("pika").map(|t| t.name.as_str()), Some("Pika"));
        assert!(category.tool("sora").is_none());
    }
}
