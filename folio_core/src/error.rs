//! Error types for folio-core.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FolioError>;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("typewriter needs at least one phrase")]
    NoPhrases,

    #[error("typewriter phrase #{index} is empty")]
    EmptyPhrase { index: usize },

    #[error("`{field}` must be greater than zero")]
    ZeroDuration { field: &'static str },

    #[error("visibility threshold {0} is outside 0.0..=1.0")]
    InvalidThreshold(f64),

    #[error("counter target `{raw}` is not an integer")]
    InvalidCounterTarget { raw: String },
}
