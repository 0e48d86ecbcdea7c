use std::fs;

use aitools_comparator::catalog::Catalog;
use aitools_comparator::render::render_table_html;

use crate::config::PreviewSettings;

pub fn run(catalog: &Catalog, settings: &PreviewSettings) -> Result<(), String> {
    println!("Scenario: comparison tables");

    for category in &catalog.categories {
        let grid = category.comparison_grid();
        let html = render_table_html(&grid, &settings.render);

        let path = settings.output_dir.join(format!("{}-comparison.html", category.slug));
        fs::write(&path, html).map_err(|e| format!("Failed to write {}: {e}", path.display()))?;

        println!(
            "{}: {} tools x {} features -> {}",
            category.name,
            grid.column_count(),
            grid.feature_row_count(),
            path.display()
        );

        let unlisted: Vec<String> = category
            .feature_key_union()
            .into_iter()
            .filter(|key| !category.compare_features.contains(key))
            .collect();
        if !unlisted.is_empty() {
            println!("  not compared: {}", unlisted.join(", "));
        }
    }

    Ok(())
}
