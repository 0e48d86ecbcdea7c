use std::fs;

use aitools_comparator::catalog::Catalog;
use aitools_comparator::render::markup::escape;
use aitools_comparator::render::{badges_for, render_pros_cons, render_stars_html};

use crate::config::PreviewSettings;

/// Writes one review summary fragment per tool.
pub fn run(catalog: &Catalog, settings: &PreviewSettings) -> Result<(), String> {
    println!("Scenario: review summaries");

    let prefix = settings.render.class_prefix.as_str();
    let mut written = 0usize;

    for category in &catalog.categories {
        for tool in &category.tools {
            let mut html = String::new();
            html.push_str("<article>");
            html.push_str(&format!("<h2>{}</h2>", escape(&tool.name)));
            html.push_str(&render_stars_html(tool.rating, prefix));
            for badge in badges_for(tool, &category.tools) {
                html.push_str(&format!("<span>{}</span>", badge.label()));
            }
            if let Some(date) = tool.reviewed_on {
                html.push_str(&format!("<p>Reviewed {}</p>", date.format("%B %Y")));
            }
            html.push_str(&format!("<p>{}</p>", escape(&tool.description)));
            html.push_str(&render_pros_cons(&tool.pros, &tool.cons, prefix));
            html.push_str("</article>");

            let path = settings
                .output_dir
                .join(format!("{}-{}-review.html", category.slug, tool.id));
            fs::write(&path, html)
                .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
            written += 1;
        }
    }

    println!("Review summaries written: {}", written);
    Ok(())
}
