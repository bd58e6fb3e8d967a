use thiserror::Error;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Raised while building a component, never during expansion.
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Key out of bounds: {0}")]
    KeyOutOfBounds(String),

    #[error("Coalesce field '{field}' is written by more than one pivot")]
    CoalesceCollision { field: String },
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}
