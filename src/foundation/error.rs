/// Convenience alias used across the crate.
pub type MarqueeResult<T> = Result<T, MarqueeError>;

/// Errors surfaced by the marquee library.
///
/// Degenerate slider configurations (no items, non-positive duration) are never errors; they
/// render to defined, if visually empty, output. Only malformed scalar inputs and unknown mount
/// handles are reported.
#[derive(thiserror::Error, Debug)]
pub enum MarqueeError {
    /// Malformed configuration value.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Operation referenced a slider that is not mounted on the surface.
    #[error("mount error: {0}")]
    Mount(String),

    /// Anything else, with the source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MarqueeError {
    /// Build a [`MarqueeError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MarqueeError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`MarqueeError::Mount`].
    pub fn mount(msg: impl Into<String>) -> Self {
        Self::Mount(msg.into())
    }
}

impl From<serde_json::Error> for MarqueeError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
