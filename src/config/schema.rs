//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every field has a default, so an empty file (or no file at all) yields
//! the stock behavior: probe the local node forever, once per second.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::health::probe::ProbeMethod;

/// Base URL of the node's HTTP API, loopback IP form.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:7071";

/// Base URL of the node's HTTP API, symbolic hostname form.
pub const LOCALHOST_BASE_URL: &str = "http://localhost:7071";

/// Healthcheck route on the node's HTTP API.
pub const HEALTHCHECK_PATH: &str = "/api/v0/node/healthcheck";

/// Root configuration for the readiness gate.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct WaitConfig {
    /// Endpoint to probe.
    pub target: TargetConfig,

    /// Polling cadence and optional bounds.
    pub poll: PollConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Probe target.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Scheme, host and port of the node API (e.g., "http://localhost:7071").
    pub base_url: String,

    /// Healthcheck path, joined onto `base_url`.
    pub path: String,
}

impl TargetConfig {
    /// Full URL of the healthcheck endpoint.
    pub fn endpoint(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)?.join(&self.path)
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            path: HEALTHCHECK_PATH.to_string(),
        }
    }
}

/// Polling configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PollConfig {
    /// Pause between a failed probe and the next one, in milliseconds.
    pub interval_ms: u64,

    /// Per-request timeout in milliseconds. A timed-out probe counts as not ready.
    /// `None` waits on each request as long as the connection stays open.
    pub request_timeout_ms: Option<u64>,

    /// HTTP method used for the probe.
    pub method: ProbeMethod,

    /// Give up after this many probes. `None` polls forever.
    pub max_attempts: Option<u32>,

    /// Give up once this many seconds have passed. `None` polls forever.
    pub deadline_secs: Option<u64>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            request_timeout_ms: None,
            method: ProbeMethod::Head,
            max_attempts: None,
            deadline_secs: None,
        }
    }
}

/// Log output encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Output encoding for log lines on stderr.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
