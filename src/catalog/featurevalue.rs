use serde::Serialize;

/// One comparison cell's worth of data for a tool.
///
/// Authored data may carry a redundant `name` equal to the key the value is
/// filed under; the loader checks it and drops it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FeatureValue {
    /// Supported / not supported.
    Bool {
        value: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        info: Option<String>,
    },
    /// Descriptive label such as "Excellent" or "1080p".
    Text {
        value: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        info: Option<String>,
    },
}

impl FeatureValue {
    pub fn flag(value: bool) -> Self {
        FeatureValue::Bool { value, info: None }
    }

    pub fn text(value: impl Into<String>) -> Self {
        FeatureValue::Text {
            value: value.into(),
            info: None,
        }
    }

    /// Attach a tooltip/footnote annotation.
    pub fn with_info(self, note: impl Into<String>) -> Self {
        let note = Some(note.into());
        match self {
            FeatureValue::Bool { value, .. } => FeatureValue::Bool { value, info: note },
            FeatureValue::Text { value, .. } => FeatureValue::Text { value, info: note },
        }
    }

    pub fn info(&self) -> Option<&str> {
        match self {
            FeatureValue::Bool { info, .. } | FeatureValue::Text { info, .. } => info.as_deref(),
        }
    }
}
