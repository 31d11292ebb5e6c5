use std::path::PathBuf;

/// Errors that can occur when loading configuration.
///
/// The board layer has no error type: "column full" and "column out of
/// range" surface as silent no-ops so the search hot path never unwinds.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
