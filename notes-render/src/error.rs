//! Renderer error types.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while building the font matrix. Any one of these aborts the whole load.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("rasterizer rejected {path} at {size}px: {reason}")]
    Rasterize {
        path: PathBuf,
        size: f32,
        reason: String,
    },

    #[error("invalid font size: {size}")]
    InvalidSize { size: f32 },
}

/// Failure while loading typography configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
