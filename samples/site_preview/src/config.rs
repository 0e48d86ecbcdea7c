use std::fs;
use std::path::PathBuf;

use aitools_comparator::config::RenderConfig;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewSettings {
    pub catalog_path: PathBuf,
    pub output_dir: PathBuf,
    #[serde(default)]
    pub render: RenderConfig,
}

pub fn load_settings() -> Result<PreviewSettings, String> {
    let mut path = std::env::current_dir().map_err(|e| e.to_string())?;
    path.push("preview.json");
    read_settings(&path)
}

fn read_settings(path: &PathBuf) -> Result<PreviewSettings, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read preview.json: {e}"))?;
    serde_json::from_str(&contents).map_err(|e| format!("Invalid preview.json: {e}"))
}
