//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! poller / probe
//!     → tracing events (probe outcomes at debug, readiness at info, give-up at error)
//!     → logging.rs subscriber
//!     → stderr (pretty or JSON)
//! ```

pub mod logging;

pub use logging::init_logging;
