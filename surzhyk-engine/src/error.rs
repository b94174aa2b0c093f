//! Layered error types

use surzhyk_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core primitive error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Invalid engine configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
