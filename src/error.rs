//! Error types for canvas configuration.
//!
//! Interaction handlers never fail: drag, zoom and snap arithmetic is clamped
//! at every step. Errors only come from loading or validating settings and
//! from the settings file watcher.

use thiserror::Error;

/// Errors that can occur while configuring a canvas
#[derive(Error, Debug)]
pub enum CanvasError {
    /// Slot metrics that cannot produce a usable grid
    #[error("Invalid slot metrics: {0}")]
    InvalidMetrics(String),

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// File watcher error from notify
    #[error("Settings watch error: {0}")]
    Watch(#[from] notify::Error),
}

/// Result type alias for canvas configuration
pub type CanvasResult<T> = Result<T, CanvasError>;
