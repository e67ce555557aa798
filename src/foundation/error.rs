/// Convenience result type used across toonface.
pub type ToonResult<T> = Result<T, ToonError>;

/// Top-level error taxonomy used by library APIs.
///
/// The avatar renderer itself never fails: a missing surface degrades to a no-op. Errors surface at
/// the boundaries instead (parsing options, acquiring surfaces, encoding output).
#[derive(thiserror::Error, Debug)]
pub enum ToonError {
    /// Invalid user-provided options or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A drawing surface could not be created or read back.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ToonError {
    /// Build a [`ToonError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ToonError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ToonError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
