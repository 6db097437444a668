//! Readiness checking subsystem.
//!
//! # Data Flow
//! ```text
//! poller.rs:
//!     loop
//!     → probe.rs (one HTTP request, classified)
//!     → state.rs (Polling → Ready)
//!     → ready? return : sleep interval, repeat
//! ```
//!
//! # Design Decisions
//! - Only HTTP 200 counts as ready
//! - Every failure mode collapses into "not ready yet"
//! - The poller is generic over `Probe` so the loop can be driven without a network

pub mod poller;
pub mod probe;
pub mod state;

pub use poller::{PollReport, ReadinessPoller, WaitError};
pub use probe::{HttpProbe, Probe, ProbeMethod, ProbeOutcome};
pub use state::PollState;
