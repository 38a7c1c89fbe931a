//! Widget configuration errors

use thiserror::Error;

/// Rejected [`LoopConfig`](crate::config::LoopConfig) values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The slide animation must take some time
    #[error("Animation duration must be greater than zero")]
    ZeroAnimationDuration,

    /// A pixel dimension was negative
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: i32 },
}

/// Result type for configuration validation
pub type Result<T> = std::result::Result<T, ConfigError>;
