use aitools_comparator::catalog::Catalog;

/// The catalog shipped under `data/`.
pub const SITE_CATALOG: &str = include_str!("../../data/catalog.json");

pub fn load_site_catalog() -> Result<Catalog, String> {
    Catalog::from_json_str(SITE_CATALOG).map_err(|e| format!("Invalid site catalog: {e}"))
}

/// Catalog text with one category holding `tools_json` (a JSON array literal).
pub fn single_category(compare_features: &[&str], tools_json: &str) -> String {
    let features = serde_json::to_string(compare_features).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"{{ "categories": [ {{ "slug": "test", "name": "Test Tools",
            "compareFeatures": {features}, "tools": {tools_json} }} ] }}"#
    )
}
