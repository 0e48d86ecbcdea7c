/// Tool records, feature values and the category catalogs they are authored in.
pub mod catalog;
/// Render options and their JSON loader.
pub mod config;
/// Markup generation: comparison tables, star ratings, badges, pros/cons lists.
pub mod render;

/// Logging verbosity for catalog loading and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Emit verbose debug output.
    Debug,
    /// Emit standard informational output.
    Information,
}

impl Default for LogLevel {
    /// Defaults to `Information` logging.
    fn default() -> Self {
        LogLevel::Information
    }
}
