/// Convenience result alias used by fallible artforge APIs.
pub type ArtResult<T> = Result<T, ArtError>;

/// Top-level error type for artforge.
///
/// Only the canvas, file and configuration boundaries produce these. Pure color,
/// sampling and geometry helpers signal bad input with `None` instead.
#[derive(thiserror::Error, Debug)]
pub enum ArtError {
    /// Invalid caller input (for example, a non-positive image count).
    #[error("validation error: {0}")]
    Validation(String),

    /// Canvas allocation or rasterization failure.
    #[error("render error: {0}")]
    Render(String),

    /// PNG encoding or output directory failure.
    #[error("encode error: {0}")]
    Encode(String),

    /// Configuration file could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ArtError {
    /// Construct an [`ArtError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Construct an [`ArtError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Construct an [`ArtError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Construct an [`ArtError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
