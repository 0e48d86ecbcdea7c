mod config;
mod scenarios;

use std::fs;

use aitools_comparator::LogLevel;
use aitools_comparator::catalog::Catalog;

use config::load_settings;

fn main() -> Result<(), String> {
    let settings = load_settings()?;

    let level = match settings.render.log_level {
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Information => tracing::Level::INFO,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let text = fs::read_to_string(&settings.catalog_path).map_err(|e| {
        format!(
            "Failed to read catalog {}: {e}",
            settings.catalog_path.display()
        )
    })?;
    let catalog = Catalog::from_json_str(&text).map_err(|e| e.to_string())?;

    fs::create_dir_all(&settings.output_dir).map_err(|e| e.to_string())?;

    scenarios::comparison::run(&catalog, &settings)?;
    scenarios::review::run(&catalog, &settings)?;

    Ok(())
}
