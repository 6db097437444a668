//! Readiness poller.
//!
//! # Responsibilities
//! - Probe the target until it reports ready
//! - Sleep a fixed interval between failed probes
//! - Optionally give up after N attempts or a deadline
//!
//! # Design Decisions
//! - Strictly sequential: one probe in flight, sleep only between probes
//! - Unbounded by default; the caller's orchestrator owns the timeout
//! - Deadline is checked before sleeping, never by cancelling a probe

use std::num::NonZeroU32;
use std::time::Duration;

use thiserror::Error;
use tokio::time::{self, Instant};

use crate::config::PollConfig;
use crate::health::probe::Probe;
use crate::health::state::PollState;

/// Why the poller stopped without seeing the target ready.
#[derive(Debug, Error)]
pub enum WaitError {
    #[error("target not ready after {attempts} attempts")]
    AttemptsExhausted { attempts: u32 },

    #[error("target not ready after {attempts} attempts within {elapsed:?}")]
    DeadlineElapsed { attempts: u32, elapsed: Duration },
}

/// Summary of a successful wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollReport {
    /// Probes issued, including the one that saw the target ready.
    pub attempts: u32,
    pub elapsed: Duration,
}

/// Blocks until a probe reports ready.
pub struct ReadinessPoller<P> {
    probe: P,
    interval: Duration,
    max_attempts: Option<NonZeroU32>,
    deadline: Option<Duration>,
}

impl<P: Probe> ReadinessPoller<P> {
    pub fn new(probe: P, config: &PollConfig) -> Self {
        Self {
            probe,
            interval: Duration::from_millis(config.interval_ms),
            max_attempts: config.max_attempts.and_then(NonZeroU32::new),
            deadline: config.deadline_secs.map(Duration::from_secs),
        }
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Poll until ready. Without bounds this only returns `Ok`.
    pub async fn run(&self) -> Result<PollReport, WaitError> {
        let started = Instant::now();
        let mut state = PollState::new();

        tracing::info!(
            interval_ms = self.interval.as_millis() as u64,
            max_attempts = self.max_attempts.map(NonZeroU32::get),
            deadline_secs = self.deadline.map(|d| d.as_secs()),
            "Waiting for target to become ready"
        );

        loop {
            let outcome = self.probe.check().await;
            state = state.record(&outcome);
            let attempts = state.attempts();

            if state.is_ready() {
                let elapsed = started.elapsed();
                tracing::info!(attempts, elapsed_ms = elapsed.as_millis() as u64, "Target ready");
                return Ok(PollReport { attempts, elapsed });
            }

            tracing::debug!(attempt = attempts, outcome = %outcome, "Target not ready");

            if let Some(max) = self.max_attempts {
                if attempts >= max.get() {
                    tracing::error!(attempts, "Giving up: attempt limit reached");
                    return Err(WaitError::AttemptsExhausted { attempts });
                }
            }

            // Durations saturate where `Instant` arithmetic would overflow.
            if let Some(deadline) = self.deadline {
                if started.elapsed().saturating_add(self.interval) > deadline {
                    let elapsed = started.elapsed();
                    tracing::error!(
                        attempts,
                        elapsed_ms = elapsed.as_millis() as u64,
                        "Giving up: deadline elapsed"
                    );
                    return Err(WaitError::DeadlineElapsed { attempts, elapsed });
                }
            }

            time::sleep(self.interval).await;
        }
    }
}
