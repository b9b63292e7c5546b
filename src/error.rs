//! Error types for lbprobe

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Transport-level failure talking to the target (connect, DNS, decode)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The target answered with a status other than 200
    #[error("unexpected status: {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    /// Configuration or builder error
    #[error("configuration error: {0}")]
    Config(String),
}

impl ProbeError {
    /// Construct a Config error for a missing builder field
    pub fn missing_config(field: &str) -> Self {
        Self::Config(format!("missing required field: {field}"))
    }
}

/// Result type alias
pub type ProbeResult<T> = std::result::Result<T, ProbeError>;
