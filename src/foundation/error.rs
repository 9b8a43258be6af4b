/// Convenience result type used across pathmotion.
pub type MotionResult<T> = Result<T, MotionError>;

/// Top-level error taxonomy used by pipeline APIs.
///
/// Malformed snapshots, unparsable colors and out-of-range options are recovered in place and
/// never surface here; these variants cover broken internal invariants and I/O at the edges.
#[derive(thiserror::Error, Debug)]
pub enum MotionError {
    /// Invalid caller-provided data that could not be recovered.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing or compositing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem errors while reading inputs or writing outputs.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotionError {
    /// Build a [`MotionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MotionError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`MotionError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for MotionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
