//! Node readiness gate library.
//!
//! Blocks until a node's HTTP healthcheck answers 200.
//!
//! # Architecture Overview
//!
//! ```text
//!     ┌──────────────────────────────────────────────────────┐
//!     │                   wait-for-node                      │
//!     │                                                      │
//!     │  ┌──────────┐    ┌──────────────┐    ┌───────────┐   │        HEAD /api/v0/node/healthcheck
//!     │  │  config  │───▶│    health    │───▶│   probe   │───┼──────────────────────────────▶ Node
//!     │  │ defaults │    │    poller    │◀───│  (HTTP)   │◀──┼────────────── status ─────────
//!     │  │ + toml   │    │ Polling→Ready│    └───────────┘   │
//!     │  └──────────┘    └──────┬───────┘                    │
//!     │                         │ 200? exit 0 : sleep 1s     │
//!     │  ┌──────────────────────┴───────────────────────┐    │
//!     │  │ observability: tracing → stderr              │    │
//!     │  └──────────────────────────────────────────────┘    │
//!     └──────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod health;
pub mod observability;

pub use config::WaitConfig;
pub use health::{HttpProbe, ReadinessPoller, WaitError};
