use log::debug;
use serde::Serialize;

use crate::catalog::featurevalue::FeatureValue;
use crate::catalog::toolrecord::ToolRecord;
use crate::config::RenderConfig;
use crate::render::badges::{Badge, badges_for};
use crate::render::markup::{attr, class_attr, escape};
use crate::render::stars::{Star, render_stars, render_stars_html};

const FEATURE_HEADING: &str = "Feature";
const PRICE_HEADING: &str = "Starting price";

/// One tool's column header.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnHeader {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub rating: f64,
    pub stars: [Star; 5],
    pub badges: Vec<Badge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate_url: Option<String>,
}

/// One tool's cell in the name/price row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceCell {
    pub starting_price: String,
    pub free_version: bool,
    pub free_trial: bool,
}

/// A feature cell, formatted by the variant of the tool's value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Cell {
    /// The tool has no value for this feature.
    Empty,
    Indicator {
        supported: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        info: Option<String>,
    },
    Text {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        info: Option<String>,
    },
}

impl Cell {
    fn from_value(value: Option<&FeatureValue>) -> Self {
        match value {
            None => Cell::Empty,
            Some(FeatureValue::Bool { value, info }) => Cell::Indicator {
                supported: *value,
                info: info.clone(),
            },
            Some(FeatureValue::Text { value, info }) => Cell::Text {
                text: value.clone(),
                info: info.clone(),
            },
        }
    }

    pub fn info(&self) -> Option<&str> {
        match self {
            Cell::Empty => None,
            Cell::Indicator { info, .. } | Cell::Text { info, .. } => info.as_deref(),
        }
    }
}

/// One feature row: a cell per tool, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureRow {
    pub feature: String,
    pub cells: Vec<Cell>,
}

/// Normalized comparison of tools (columns) against feature keys (rows).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonGrid {
    pub category_name: String,
    pub columns: Vec<ColumnHeader>,
    pub prices: Vec<PriceCell>,
    pub rows: Vec<FeatureRow>,
}

impl ComparisonGrid {
    /// Normalize `tools` against `compare_features`.
    ///
    /// Produces exactly one row per feature key, in the given order, and one
    /// cell per tool in each row. Missing features become `Cell::Empty`.
    pub fn build<K: AsRef<str>>(
        tools: &[ToolRecord],
        compare_features: &[K],
        category_name: &str,
    ) -> Self {
        let columns = tools
            .iter()
            .map(|tool| ColumnHeader {
                id: tool.id.clone(),
                name: tool.name.clone(),
                logo: tool.logo.clone(),
                rating: tool.rating,
                stars: render_stars(tool.rating),
                badges: badges_for(tool, tools),
                affiliate_url: tool.affiliate_url.clone(),
            })
            .collect();

        let prices = tools
            .iter()
            .map(|tool| PriceCell {
                starting_price: tool.pricing.starting_price.clone(),
                free_version: tool.pricing.has_free_version,
                free_trial: tool.pricing.has_free_trial,
            })
            .collect();

        let rows = compare_features
            .iter()
            .map(|key| {
                let key = key.as_ref();
                FeatureRow {
                    feature: key.to_string(),
                    cells: tools
                        .iter()
                        .map(|tool| Cell::from_value(tool.feature(key)))
                        .collect(),
                }
            })
            .collect::<Vec<FeatureRow>>();

        let empty = rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter(|cell| **cell == Cell::Empty)
            .count();
        debug!(
            "Built comparison grid for '{}': {} tools x {} features, {} empty cells",
            category_name,
            tools.len(),
            rows.len(),
            empty
        );

        ComparisonGrid {
            category_name: category_name.to_string(),
            columns,
            prices,
            rows,
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn feature_row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell for `(feature, tool id)`, if both exist in the grid.
    pub fn cell(&self, feature: &str, tool_id: &str) -> Option<&Cell> {
        let column = self.columns.iter().position(|column| column.id == tool_id)?;
        self.rows
            .iter()
            .find(|row| row.feature == feature)
            .and_then(|row| row.cells.get(column))
    }
}

/// Build and render in one step.
pub fn render_comparison_table<K: AsRef<str>>(
    tools: &[ToolRecord],
    compare_features: &[K],
    category_name: &str,
    config: &RenderConfig,
) -> String {
    render_table_html(&ComparisonGrid::build(tools, compare_features, category_name), config)
}

/// Render a grid as an HTML `<table>` fragment.
pub fn render_table_html(grid: &ComparisonGrid, config: &RenderConfig) -> String {
    let prefix = config.class_prefix.as_str();
    let mut out = String::new();

    out.push_str("<table");
    out.push_str(&class_attr(prefix, &["table"]));
    out.push('>');

    out.push_str("<caption");
    out.push_str(&class_attr(prefix, &["caption"]));
    out.push('>');
    out.push_str(&escape(&grid.category_name));
    out.push_str("</caption>");

    out.push_str("<thead><tr><th scope=\"col\"");
    out.push_str(&class_attr(prefix, &["feature-head"]));
    out.push('>');
    out.push_str(FEATURE_HEADING);
    out.push_str("</th>");
    for column in &grid.columns {
        push_column_header(&mut out, column, prefix);
    }
    out.push_str("</tr></thead><tbody>");

    out.push_str("<tr");
    out.push_str(&class_attr(prefix, &["price-row"]));
    out.push_str("><th scope=\"row\">");
    out.push_str(PRICE_HEADING);
    out.push_str("</th>");
    for price in &grid.prices {
        push_price_cell(&mut out, price, prefix);
    }
    out.push_str("</tr>");

    for row in &grid.rows {
        out.push_str("<tr");
        out.push_str(&class_attr(prefix, &["feature-row"]));
        out.push_str("><th scope=\"row\">");
        out.push_str(&escape(&row.feature));
        out.push_str("</th>");
        for cell in &row.cells {
            push_cell(&mut out, cell, config);
        }
        out.push_str("</tr>");
    }

    out.push_str("</tbody></table>");
    out
}

fn push_column_header(out: &mut String, column: &ColumnHeader, prefix: &str) {
    out.push_str("<th scope=\"col\"");
    out.push_str(&class_attr(prefix, &["tool"]));
    out.push_str(&attr("data-tool", &column.id));
    out.push('>');

    if !column.logo.is_empty() {
        out.push_str("<img");
        out.push_str(&class_attr(prefix, &["logo"]));
        out.push_str(&attr("src", &column.logo));
        out.push_str(&attr("alt", &format!("{} logo", column.name)));
        out.push('>');
    }

    out.push_str("<span");
    out.push_str(&class_attr(prefix, &["tool-name"]));
    out.push('>');
    match &column.affiliate_url {
        Some(url) => {
            out.push_str("<a");
            out.push_str(&attr("href", url));
            out.push_str(" rel=\"sponsored noopener\" target=\"_blank\">");
            out.push_str(&escape(&column.name));
            out.push_str("</a>");
        }
        None => out.push_str(&escape(&column.name)),
    }
    out.push_str("</span>");

    out.push_str(&render_stars_html(column.rating, prefix));

    for badge in &column.badges {
        let variant = format!("badge-{}", badge.slug());
        out.push_str("<span");
        out.push_str(&class_attr(prefix, &["badge", variant.as_str()]));
        out.push('>');
        out.push_str(badge.label());
        out.push_str("</span>");
    }

    out.push_str("</th>");
}

fn push_price_cell(out: &mut String, price: &PriceCell, prefix: &str) {
    out.push_str("<td");
    out.push_str(&class_attr(prefix, &["price"]));
    out.push('>');
    out.push_str(&escape(&price.starting_price));
    if price.free_version {
        push_note(out, "Free plan", prefix);
    }
    if price.free_trial {
        push_note(out, "Free trial", prefix);
    }
    out.push_str("</td>");
}

fn push_cell(out: &mut String, cell: &Cell, config: &RenderConfig) {
    let prefix = config.class_prefix.as_str();

    match cell {
        Cell::Empty => {
            out.push_str("<td");
            out.push_str(&class_attr(prefix, &["cell", "empty"]));
            out.push('>');
            out.push_str(&escape(&config.placeholder));
        }
        Cell::Indicator { supported, .. } => {
            let (state, symbol, label) = if *supported {
                ("yes", &config.check_symbol, "Supported")
            } else {
                ("no", &config.cross_symbol, "Not supported")
            };
            out.push_str("<td");
            out.push_str(&class_attr(prefix, &["cell", state]));
            out.push_str("><span");
            out.push_str(&class_attr(prefix, &["indicator"]));
            out.push_str(&attr("aria-label", label));
            out.push('>');
            out.push_str(&escape(symbol));
            out.push_str("</span>");
        }
        Cell::Text { text, .. } => {
            out.push_str("<td");
            out.push_str(&class_attr(prefix, &["cell", "text"]));
            out.push('>');
            out.push_str(&escape(text));
        }
    }

    if let Some(info) = cell.info() {
        push_note(out, info, prefix);
    }
    out.push_str("</td>");
}

fn push_note(out: &mut String, note: &str, prefix: &str) {
    out.push_str("<small");
    out.push_str(&class_attr(prefix, &["info"]));
    out.push('>');
    out.push_str(&escape(note));
    out.push_str("</small>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::pricing::Pricing;

    fn tools() -> Vec<ToolRecord> {
        vec![
            ToolRecord::new("a", "A").with_feature("X", FeatureValue::flag(true)),
            ToolRecord::new("b", "B"),
        ]
    }

    #[test]
    fn missing_feature_is_empty_cell() {
        let grid = ComparisonGrid::build(&tools(), &["X"], "Test");
        assert_eq!(
            grid.cell("X", "a"),
            Some(&Cell::Indicator {
                supported: true,
                info: None
            })
        );
        assert_eq!(grid.cell("X", "b"), Some(&Cell::Empty));
    }

    #[test]
    fn one_row_per_key_and_one_cell_per_tool() {
        let keys = ["X", "Y", "Z"];
        let grid = ComparisonGrid::build(&tools(), &keys, "Test");
        assert_eq!(grid.feature_row_count(), 3);
        assert_eq!(grid.column_count(), 2);
        assert!(grid.rows.iter().all(|row| row.cells.len() == 2));
        assert_eq!(
            grid.rows.iter().map(|row| row.feature.as_str()).collect::<Vec<_>>(),
            keys
        );
    }

    #[test]
    fn text_cell_keeps_info() {
        let tool = ToolRecord::new("a", "A").with_feature(
            "Resolution",
            FeatureValue::text("1080p").with_info("4K on Pro plan"),
        );
        let grid = ComparisonGrid::build(std::slice::from_ref(&tool), &["Resolution"], "Video");
        let cell = grid.cell("Resolution", "a").unwrap();
        assert_eq!(cell.info(), Some("4K on Pro plan"));
    }

    #[test]
    fn no_tools_and_no_features() {
        let grid = ComparisonGrid::build(&[], &[] as &[&str], "Empty");
        assert_eq!(grid.column_count(), 0);
        assert_eq!(grid.feature_row_count(), 0);
        let html = render_table_html(&grid, &RenderConfig::default());
        assert!(html.starts_with("<table"));
        assert!(html.ends_with("</table>"));
    }

    #[test]
    fn false_indicator_still_shows_info() {
        let tool = ToolRecord::new("a", "A")
            .with_feature("API", FeatureValue::flag(false).with_info("Enterprise only"));
        let html = render_comparison_table(
            std::slice::from_ref(&tool),
            &["API"],
            "Writing",
            &RenderConfig::default(),
        );
        assert!(html.contains("ct-cell ct-no"));
        assert!(html.contains("✗"));
        assert!(html.contains("Enterprise only"));
    }

    #[test]
    fn price_row_notes_free_plan_and_trial() {
        let mut pricing = Pricing::new("$12/month");
        pricing.has_free_version = true;
        pricing.has_free_trial = true;
        let tools = vec![
            ToolRecord::new("a", "A").with_pricing(pricing),
            ToolRecord::new("b", "B").with_pricing(Pricing::new("$20/month")),
        ];
        let html = render_comparison_table(&tools, &["X"], "Image", &RenderConfig::default());

        assert!(html.contains(concat!(
            r#"<td class="ct-price">$12/month"#,
            r#"<small class="ct-info">Free plan</small>"#,
            r#"<small class="ct-info">Free trial</small></td>"#,
        )));
        assert!(html.contains(r#"<td class="ct-price">$20/month</td>"#));
        assert_eq!(html.matches(">Free plan<").count(), 1);
    }
}
