//! Error types for the choros library.
//!
//! The classification and color core itself never fails: every degenerate
//! input resolves to a documented fallback value. Errors only arise at the
//! edges, when a caller hands over an unknown colormap name or an invalid
//! style configuration.

use thiserror::Error;

/// The main error type for choros operations.
#[derive(Error, Debug)]
pub enum ChorosError {
    /// Style configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with ChorosError
pub type Result<T> = std::result::Result<T, ChorosError>;
