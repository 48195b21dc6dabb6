/// Convenience result type used across pathtext.
pub type PathTextResult<T> = Result<T, PathTextError>;

/// Top-level error taxonomy used by the configuration boundary.
///
/// The geometry, layout and animation core never fails: degenerate input yields empty output.
#[derive(thiserror::Error, Debug)]
pub enum PathTextError {
    /// Invalid user-provided parameters (negative radius, bad pulse timing, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while locating or reading a scene configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PathTextError {
    /// Build a [`PathTextError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PathTextError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`PathTextError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
