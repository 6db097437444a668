//! Poll state machine.
//!
//! # States
//! - Polling: target not yet seen healthy
//! - Ready: target answered 200 (terminal)
//!
//! # State Transitions
//! ```text
//! Polling → Polling: probe not ready, attempt counted
//! Polling → Ready:   probe ready
//! ```

use crate::health::probe::ProbeOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Polling { attempts: u32 },
    Ready { attempts: u32 },
}

impl PollState {
    pub fn new() -> Self {
        PollState::Polling { attempts: 0 }
    }

    /// Fold one probe outcome into the state. Ready is absorbing.
    pub fn record(self, outcome: &ProbeOutcome) -> Self {
        match self {
            PollState::Ready { .. } => self,
            PollState::Polling { attempts } => {
                let attempts = attempts.saturating_add(1);
                if outcome.is_ready() {
                    PollState::Ready { attempts }
                } else {
                    PollState::Polling { attempts }
                }
            }
        }
    }

    pub fn attempts(&self) -> u32 {
        match *self {
            PollState::Polling { attempts } | PollState::Ready { attempts } => attempts,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, PollState::Ready { .. })
    }
}

impl Default for PollState {
    fn default() -> Self {
        Self::new()
    }
}
