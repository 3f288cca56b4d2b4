//! Error types for the dubplay engine.

use thiserror::Error;

/// Errors produced by the engine.
///
/// Playback operations themselves never fail: invalid arguments are clamped
/// and missing media metadata degrades behavior instead of raising. Errors
/// only surface at the data boundary, when a segment manifest cannot be read
/// or decoded.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// IO error while reading a segment manifest
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Structurally valid JSON that is not a usable segment manifest
    #[error("Segment manifest error: {0}")]
    SegmentManifest(String),

    /// Other error
    #[error("Other error: {0}")]
    Other(String),
}

impl From<&str> for PlayerError {
    fn from(s: &str) -> Self {
        PlayerError::Other(s.to_string())
    }
}

impl From<String> for PlayerError {
    fn from(s: String) -> Self {
        PlayerError::Other(s)
    }
}

/// Result type for the dubplay library
pub type Result<T> = std::result::Result<T, PlayerError>;
