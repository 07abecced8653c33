//! Error types for rugwatch

use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Redis error (URL parse, connect, or command)
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Trade entry could not be decoded
    #[error("Invalid trade entry: {0}")]
    InvalidTrade(String),

    /// The mint has no recorded trade history
    ///
    /// The message must stay stable: callers match on it in `debug_info.error`.
    #[error("No trade data found")]
    NoTradeData,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
