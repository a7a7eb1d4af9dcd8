//! Error type for the slider core.

use thiserror::Error;

/// Contract violations surfaced to the host.
///
/// Numeric input never produces an error; it is clamped instead.
#[derive(Debug, Error)]
pub enum SliderError {
    #[error("Unsupported palette mode: {0}")]
    UnsupportedPaletteMode(String),
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for slider operations.
pub type Result<T> = std::result::Result<T, SliderError>;
