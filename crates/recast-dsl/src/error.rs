use thiserror::Error;

/// Result type local to recast-dsl.
pub type Result<T> = std::result::Result<T, DslError>;

#[derive(Debug, Error)]
pub enum DslError {
    /// Malformed YAML, or a section missing a required field.
    #[error("invalid configuration document (yaml): {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid configuration document (json): {0}")]
    Json(#[from] serde_json::Error),

    /// Errors raised while building components or shaping records pass through unchanged.
    #[error(transparent)]
    Core(#[from] recast_core::Error),
}
