//! Simscore Error Types
//!
//! Scoring itself never fails; these cover matcher setup, input bounds
//! and configuration.

use thiserror::Error;

/// Central error type for simscore
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Cutoff must be within [0, 1], got {0}")]
    InvalidCutoff(f64),

    #[error("Input too long: {len} chars (max {max})")]
    InputTooLong { len: usize, max: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for simscore operations
pub type SimResult<T> = Result<T, SimError>;
