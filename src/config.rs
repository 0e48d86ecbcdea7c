use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::LogLevel;

/// Markup options shared by every renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    pub log_level: LogLevel,
    /// Indicator for a supported feature.
    pub check_symbol: String,
    /// Indicator for an unsupported feature.
    pub cross_symbol: String,
    /// Content of a cell whose tool has no value for the feature.
    pub placeholder: String,
    /// Prefix of every emitted CSS class; empty for none.
    pub class_prefix: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            log_level: LogLevel::default(),
            check_symbol: "✓".to_string(),
            cross_symbol: "✗".to_string(),
            placeholder: "—".to_string(),
            class_prefix: "ct".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load render options from a JSON file. Missing keys keep their defaults.
pub fn load_config(path: &Path) -> Result<RenderConfig, ConfigError> {
    let display = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: display.clone(),
        source,
    })?;
    parse_config(&contents).map_err(|source| ConfigError::Parse {
        path: display,
        source,
    })
}

pub fn parse_config(contents: &str) -> Result<RenderConfig, serde_json::Error> {
    serde_json::from_str(contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_keeps_defaults() {
        let config = parse_config(r#"{ "classPrefix": "cmp", "logLevel": "debug" }"#).unwrap();
        assert_eq!(config.class_prefix, "cmp");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.check_symbol, "✓");
        assert_eq!(config.placeholder, "—");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_config(Path::new("does/not/exist/comparator.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
