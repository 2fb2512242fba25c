//! Error types for Ember

use thiserror::Error;

/// The main error type for Ember operations
#[derive(Debug, Error)]
pub enum EmberError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Scene cycle detected: {0}")]
    SceneCycle(String),

    #[error("Node already attached: {0}")]
    AlreadyAttached(String),

    #[error("Scene error: {0}")]
    SceneError(String),

    #[error("Animation error: {0}")]
    AnimationError(String),

    #[error("Resource error: {0}")]
    ResourceError(String),

    #[error("Runtime error: {0}")]
    RuntimeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),
}

/// Result type alias for Ember operations
pub type Result<T> = std::result::Result<T, EmberError>;

impl From<toml::de::Error> for EmberError {
    fn from(err: toml::de::Error) -> Self {
        EmberError::TomlParseError(err.to_string())
    }
}
