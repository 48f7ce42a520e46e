//! Domain errors surfaced to API clients

use thiserror::Error;

/// Errors produced by timer operations and registry management
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    /// Start attempted on a countdown with a zero duration
    #[error("countdown duration must be greater than zero")]
    InvalidDuration,

    /// Create attempted while the registry is at its configured bound
    #[error("timer limit of {0} reached")]
    CapacityExceeded(usize),

    /// Operation addressed at an id that is not in the registry
    #[error("no timer with id {0}")]
    NotFound(u64),

    /// Shared state lock failure
    #[error("internal state error: {0}")]
    Internal(String),
}
