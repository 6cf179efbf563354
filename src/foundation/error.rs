use std::path::Path;

/// Convenience result type used across the generator.
pub type GenResult<T> = Result<T, GenError>;

/// Top-level error taxonomy. Every variant is fatal for the batch.
#[derive(thiserror::Error, Debug)]
pub enum GenError {
    /// Invalid geometry or template parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Filesystem failure while creating directories or writing outputs.
    #[error("io error: {0}")]
    Io(String),

    /// An icon could not be read or decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// A canvas could not be encoded.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GenError {
    /// Build a [`GenError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GenError::Io`] value naming the path involved.
    pub fn io(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Io(format!("'{}': {err}", path.display()))
    }

    /// Build a [`GenError::Decode`] value naming the offending file.
    pub fn decode(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Decode(format!("'{}': {err}", path.display()))
    }

    /// Build a [`GenError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
