use serde::Deserialize;
use std::path::PathBuf;

/// Settings for the `campus` demo binary.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Display name of the demo university.
    pub university: String,
    pub logging: LoggingConfig,
}

/// Logger settings, mapped onto `uni_logger::LoggerBuilder`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level name understood by `tracing` (`error`..`trace`, or `off`).
    pub level: String,
    pub console: bool,
    /// JSON lines for file output; ignored without `path`.
    pub json: bool,
    pub path: Option<PathBuf>,
    pub env_filter: Option<String>,
}

// --- Default ---

impl Default for ShellConfig {
    fn default() -> Self {
        Self { university: "Web Master".to_owned(), logging: LoggingConfig::default() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), console: true, json: false, path: None, env_filter: None }
    }
}
