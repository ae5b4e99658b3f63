//! Error types for clearcity-sla

use thiserror::Error;

/// SLA calculation errors
#[derive(Debug, Error)]
pub enum SlaError {
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SlaError {
    pub fn invalid_timestamp(msg: impl Into<String>) -> Self {
        Self::InvalidTimestamp(msg.into())
    }

    pub fn invalid_policy(msg: impl Into<String>) -> Self {
        Self::InvalidPolicy(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, SlaError>;
