use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use log::{debug, warn};
use serde_json::{Map, Value};

use crate::catalog::category::{Catalog, Category};
use crate::catalog::error::{CatalogError, Result};
use crate::catalog::featurevalue::FeatureValue;
use crate::catalog::pricing::Pricing;
use crate::catalog::toolrecord::{FeatureKey, ToolRecord};
use crate::render::stars::clamp_rating;

type Object = Map<String, Value>;

/// Parse a catalog document: `{ "categories": [ <category>, ... ] }`.
pub fn parse_catalog(json: &Value) -> Result<Catalog> {
    let root = as_object(json, "catalog")?;
    let entries = root
        .get("categories")
        .ok_or_else(|| CatalogError::MissingField {
            path: "catalog".to_string(),
            field: "categories",
        })?
        .as_array()
        .ok_or_else(|| shape("catalog/categories", "an array of categories"))?;

    let mut slugs: HashSet<String> = HashSet::new();
    let mut categories: Vec<Category> = vec![];

    for entry in entries {
        let category = parse_category(entry)?;
        if !slugs.insert(category.slug.clone()) {
            return Err(CatalogError::DuplicateCategory(category.slug));
        }
        categories.push(category);
    }

    let catalog = Catalog { categories };
    debug!(
        "Loaded catalog: {} categories, {} tools",
        catalog.categories.len(),
        catalog.tool_count()
    );
    Ok(catalog)
}

/// Parse one category: slug, name, `compareFeatures` and its `tools`.
pub fn parse_category(json: &Value) -> Result<Category> {
    let record = as_object(json, "category")?;
    let slug = required_str(record, "category", "slug")?;
    let path = slug.clone();
    let name = required_str(record, &path, "name")?;
    let compare_features = parse_compare_features(record, &path)?;

    let tool_values = record
        .get("tools")
        .ok_or_else(|| CatalogError::MissingField {
            path: path.clone(),
            field: "tools",
        })?
        .as_array()
        .ok_or_else(|| shape(format!("{path}/tools"), "an array of tools"))?;

    let mut ids: HashSet<String> = HashSet::new();
    let mut tools: Vec<ToolRecord> = vec![];

    for tool_value in tool_values {
        let tool = parse_tool(tool_value, &path)?;
        if !ids.insert(tool.id.clone()) {
            return Err(CatalogError::DuplicateToolId {
                category: slug,
                id: tool.id,
            });
        }
        tools.push(tool);
    }

    let category = Category {
        slug,
        name,
        compare_features,
        tools,
    };

    let known = category.feature_key_union();
    for key in &category.compare_features {
        if !known.contains(key) {
            warn!(
                "Category '{}': compare feature '{}' is not present on any tool",
                category.slug, key
            );
        }
    }

    debug!(
        "Parsed category '{}': {} tools, {} compare features",
        category.slug,
        category.tools.len(),
        category.compare_features.len()
    );
    Ok(category)
}

fn parse_compare_features(record: &Object, path: &str) -> Result<Vec<FeatureKey>> {
    let Some(value) = record.get("compareFeatures") else {
        return Ok(vec![]);
    };
    let field_path = format!("{path}/compareFeatures");
    let entries = value
        .as_array()
        .ok_or_else(|| shape(field_path.clone(), "an array of feature names"))?;

    let mut seen: HashSet<&str> = HashSet::new();
    let mut keys: Vec<FeatureKey> = vec![];

    for entry in entries {
        let key = entry
            .as_str()
            .ok_or_else(|| shape(field_path.clone(), "feature names as strings"))?;
        if key.trim().is_empty() {
            return Err(CatalogError::EmptyField {
                path: path.to_string(),
                field: "compareFeatures",
            });
        }
        if !seen.insert(key) {
            return Err(CatalogError::DuplicateCompareFeature {
                category: path.to_string(),
                feature: key.to_string(),
            });
        }
        keys.push(key.to_string());
    }

    Ok(keys)
}

/// Parse one tool record filed under `category`.
pub fn parse_tool(json: &Value, category: &str) -> Result<ToolRecord> {
    let record = as_object(json, category)?;
    let id = required_str(record, category, "id")?;
    if id.trim().is_empty() {
        return Err(CatalogError::EmptyField {
            path: category.to_string(),
            field: "id",
        });
    }

    let path = format!("{category}/{id}");
    let mut tool = ToolRecord::new(id, required_str(record, &path, "name")?);

    tool.logo = optional_str(record, &path, "logo")?.unwrap_or_default();
    tool.description = optional_str(record, &path, "description")?.unwrap_or_default();
    tool.pricing = parse_pricing(record, &path)?;
    tool.best_for = string_list(record, &path, "bestFor")?;
    tool.rating = parse_rating(record, &path)?;
    tool.features = parse_features(record, &path)?;
    tool.affiliate_url = optional_str(record, &path, "affiliateUrl")?;
    tool.pros = string_list(record, &path, "pros")?;
    tool.cons = string_list(record, &path, "cons")?;
    tool.reviewed_on = parse_review_date(record, &path)?;

    Ok(tool)
}

fn parse_pricing(record: &Object, path: &str) -> Result<Pricing> {
    let Some(value) = record.get("pricing") else {
        return Ok(Pricing::default());
    };
    let pricing_path = format!("{path}/pricing");
    let pricing = as_object(value, &pricing_path)?;

    Ok(Pricing {
        starting_price: optional_str(pricing, &pricing_path, "startingPrice")?.unwrap_or_default(),
        has_free_version: optional_bool(pricing, &pricing_path, "hasFreeVersion")?
            .unwrap_or(false),
        has_free_trial: optional_bool(pricing, &pricing_path, "hasFreeTrial")?.unwrap_or(false),
    })
}

fn parse_rating(record: &Object, path: &str) -> Result<f64> {
    // serde_json never yields a non-finite number, so only range needs checking.
    let rating = match record.get("rating") {
        None | Some(Value::Null) => return Ok(0.0),
        Some(value) => value
            .as_f64()
            .ok_or_else(|| shape(format!("{path}/rating"), "a number"))?,
    };

    let clamped = clamp_rating(rating);
    if clamped != rating {
        warn!("{path}: rating {rating} outside 0-5, clamped to {clamped}");
    }
    Ok(clamped)
}

fn parse_features(record: &Object, path: &str) -> Result<HashMap<FeatureKey, FeatureValue>> {
    let mut features: HashMap<FeatureKey, FeatureValue> = HashMap::new();
    let Some(value) = record.get("features") else {
        return Ok(features);
    };
    let features_path = format!("{path}/features");
    let entries = as_object(value, &features_path)?;

    for (key, value) in entries {
        let feature = parse_feature_value(&format!("{features_path}/{key}"), key, value)?;
        features.insert(key.clone(), feature);
    }

    Ok(features)
}

/// Convert an authored feature entry into a `FeatureValue`.
///
/// Accepts the long form `{ "name": key, "value": bool|string, "info": string }`
/// and the bare scalar short form. Anything else is rejected.
pub fn parse_feature_value(path: &str, key: &str, value: &Value) -> Result<FeatureValue> {
    let (inner, info) = match value {
        Value::Object(entry) => {
            if let Some(name) = entry.get("name") {
                let name = name
                    .as_str()
                    .ok_or_else(|| shape(format!("{path}/name"), "a string"))?;
                if name != key {
                    return Err(CatalogError::FeatureNameMismatch {
                        path: path.to_string(),
                        key: key.to_string(),
                        name: name.to_string(),
                    });
                }
            }
            let inner = entry.get("value").ok_or_else(|| CatalogError::MissingField {
                path: path.to_string(),
                field: "value",
            })?;
            (inner, optional_str(entry, path, "info")?)
        }
        other => (other, None),
    };

    match inner {
        Value::Bool(flag) => Ok(FeatureValue::Bool { value: *flag, info }),
        Value::String(text) => Ok(FeatureValue::Text {
            value: text.clone(),
            info,
        }),
        other => Err(CatalogError::InvalidFeatureValue {
            path: path.to_string(),
            found: kind_of(other),
        }),
    }
}

fn parse_review_date(record: &Object, path: &str) -> Result<Option<NaiveDate>> {
    let Some(value) = optional_str(record, path, "reviewedOn")? else {
        return Ok(None);
    };

    NaiveDate::parse_from_str(&value, "%Y-%m-%d")
        .map(Some)
        .map_err(|source| CatalogError::InvalidDate {
            path: path.to_string(),
            value,
            source,
        })
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Object> {
    value.as_object().ok_or_else(|| shape(path, "an object"))
}

fn required_str(record: &Object, path: &str, field: &'static str) -> Result<String> {
    optional_str(record, path, field)?.ok_or_else(|| CatalogError::MissingField {
        path: path.to_string(),
        field,
    })
}

fn optional_str(record: &Object, path: &str, field: &'static str) -> Result<Option<String>> {
    match record.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(shape(format!("{path}/{field}"), "a string")),
    }
}

fn optional_bool(record: &Object, path: &str, field: &'static str) -> Result<Option<bool>> {
    match record.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(flag)) => Ok(Some(*flag)),
        Some(_) => Err(shape(format!("{path}/{field}"), "a boolean")),
    }
}

fn string_list(record: &Object, path: &str, field: &'static str) -> Result<Vec<String>> {
    let entries = match record.get(field) {
        None | Some(Value::Null) => return Ok(vec![]),
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(shape(format!("{path}/{field}"), "an array of strings")),
    };

    entries
        .iter()
        .map(|entry| {
            entry
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| shape(format!("{path}/{field}"), "an array of strings"))
        })
        .collect()
}

fn shape(path: impl Into<String>, expected: &'static str) -> CatalogError {
    CatalogError::Shape {
        path: path.into(),
        expected,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn long_and_short_feature_forms() {
        let long = json!({ "name": "Upscaling", "value": true, "info": "Up to 4x" });
        assert_eq!(
            parse_feature_value("c/t/features/Upscaling", "Upscaling", &long).unwrap(),
            FeatureValue::flag(true).with_info("Up to 4x")
        );

        let short = json!("1080p");
        assert_eq!(
            parse_feature_value("c/t/features/Resolution", "Resolution", &short).unwrap(),
            FeatureValue::text("1080p")
        );
    }

    #[test]
    fn rejects_numbers_and_null_as_feature_values() {
        let err = parse_feature_value("p", "Seats", &json!({ "name": "Seats", "value": 5 }))
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidFeatureValue { found: "number", .. }
        ));

        let err = parse_feature_value("p", "Seats", &Value::Null).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidFeatureValue { found: "null", .. }
        ));
    }

    #[test]
    fn rejects_name_that_disagrees_with_key() {
        let err = parse_feature_value(
            "p",
            "Inpainting",
            &json!({ "name": "Outpainting", "value": true }),
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::FeatureNameMismatch { .. }));
    }

    #[test]
    fn clamps_out_of_range_rating() {
        let tool = parse_tool(&json!({ "id": "x", "name": "X", "rating": 6.5 }), "c").unwrap();
        assert_eq!(tool.rating, 5.0);
    }

    #[test]
    fn rejects_duplicate_tool_ids() {
        let category = json!({
            "slug": "writing",
            "name": "AI Writing Tools",
            "tools": [
                { "id": "jasper", "name": "Jasper" },
                { "id": "jasper", "name": "Jasper 2" }
            ]
        });
        let err = parse_category(&category).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateToolId { .. }));
    }

    #[test]
    fn rejects_malformed_review_date() {
        let err = parse_tool(
            &json!({ "id": "x", "name": "X", "reviewedOn": "March 2024" }),
            "c",
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidDate { .. }));
    }

    #[test]
    fn rejects_duplicate_category_slug() {
        let catalog = json!({
            "categories": [
                { "slug": "writing", "name": "Writing", "tools": [] },
                { "slug": "writing", "name": "Writing again", "tools": [] }
            ]
        });
        let err = parse_catalog(&catalog).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCategory(slug) if slug == "writing"));
    }

    #[test]
    fn rejects_repeated_compare_feature() {
        let category = json!({
            "slug": "writing",
            "name": "Writing",
            "compareFeatures": ["Templates", "Languages", "Templates"],
            "tools": []
        });
        let err = parse_category(&category).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateCompareFeature { feature, .. } if feature == "Templates"
        ));
    }

    #[test]
    fn rejects_blank_compare_feature() {
        let category = json!({
            "slug": "writing",
            "name": "Writing",
            "compareFeatures": ["Templates", "  "],
            "tools": []
        });
        let err = parse_category(&category).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyField { field: "compareFeatures", .. }));
    }

    #[test]
    fn rejects_blank_tool_id() {
        let err = parse_tool(&json!({ "id": " ", "name": "X" }), "c").unwrap_err();
        assert!(matches!(err, CatalogError::EmptyField { field: "id", .. }));
    }

    #[test]
    fn overflowing_rating_fails_as_json() {
        let text = r#"{ "categories": [ { "slug": "c", "name": "C",
            "tools": [ { "id": "x", "name": "X", "rating": 1e400 } ] } ] }"#;
        let err = Catalog::from_json_str(text).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }
}
