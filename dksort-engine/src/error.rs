//! Error types for the engine.

use crate::waiter::ReadinessTimeout;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while running the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A readiness gate expired before its condition held.
    #[error("readiness gate timed out: {0}")]
    Readiness(#[from] ReadinessTimeout),

    /// Channel closed.
    #[error("channel closed")]
    ChannelClosed,
}
