//! Error types for Tessera

use thiserror::Error;

/// The main error type for Tessera operations
#[derive(Debug, Error)]
pub enum TesseraError {
    #[error("Unknown component type: {0}")]
    UnknownType(String),

    #[error("Object '{0}' has no 'type' attribute")]
    MissingType(String),

    #[error("Component type already registered: {0}")]
    DuplicateType(String),

    #[error("Alias '{alias}' already resolves to '{existing}'")]
    DuplicateAlias { alias: String, existing: String },

    #[error("Unknown scene check: {0}")]
    UnknownCheck(String),

    #[error("Scene check already registered: {0}")]
    DuplicateCheck(String),

    #[error("Scene error: {0}")]
    SceneError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),
}

/// Result type alias for Tessera operations
pub type Result<T> = std::result::Result<T, TesseraError>;

impl From<toml::de::Error> for TesseraError {
    fn from(err: toml::de::Error) -> Self {
        TesseraError::TomlParseError(err.to_string())
    }
}
