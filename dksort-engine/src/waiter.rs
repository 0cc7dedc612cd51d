//! Polling-based readiness gate.
//!
//! The host renders asynchronously and offers no completion signal, so
//! the only observable readiness channel is polling: evaluate a
//! predicate on a fixed cadence until it holds or a deadline passes.
//! Each call owns its own timer, so concurrent waits are fully
//! independent. Dropping the returned future cancels the wait.

use std::time::Duration;
use thiserror::Error;
use tokio::time::{self, MissedTickBehavior};

/// Polling cadence and deadline for a readiness gate.
#[derive(Debug, Clone)]
pub struct WaitConfig {
    /// How often the predicate is evaluated.
    pub poll_interval: Duration,

    /// Total time allowed before the wait is abandoned.
    pub timeout: Duration,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(500),
            timeout: Duration::from_secs(120),
        }
    }
}

/// The deadline elapsed before the condition held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("condition not met within {timeout:?}")]
pub struct ReadinessTimeout {
    /// The deadline that elapsed.
    pub timeout: Duration,
}

/// Waits until `predicate` returns true.
///
/// The predicate is evaluated immediately and then once per poll tick;
/// the first `true` resolves the wait. If the deadline elapses first,
/// the wait fails with [`ReadinessTimeout`] and is not retried.
pub async fn wait_until<F>(config: &WaitConfig, predicate: F) -> Result<(), ReadinessTimeout>
where
    F: Fn() -> bool,
{
    let poll = async {
        let mut ticker = time::interval(config.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if predicate() {
                return;
            }
        }
    };

    time::timeout(config.timeout, poll).await.map_err(|_| ReadinessTimeout {
        timeout: config.timeout,
    })
}
