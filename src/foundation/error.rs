/// Convenience result type used across Lumark.
pub type LumarkResult<T> = Result<T, LumarkError>;

/// Top-level error taxonomy used by the fetch-boundary APIs.
///
/// Scene resolution itself is total and never returns these; they cover the
/// operations that guard it (JSON decode, record shape validation) and the
/// inspection CLI.
#[derive(thiserror::Error, Debug)]
pub enum LumarkError {
    /// Invalid user-provided or backend-authored record data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LumarkError {
    /// Build a [`LumarkError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LumarkError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
