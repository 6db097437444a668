//! Readiness probing.
//!
//! # Responsibilities
//! - Issue one request against the healthcheck endpoint
//! - Classify the result: exactly HTTP 200 is ready, anything else is not
//!
//! # Design Decisions
//! - Probe failures are values, never errors; the poller retries all of them alike
//! - HEAD by default (headers only, body discarded)
//! - No idle connections kept between probes

use std::fmt;
use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde::{Deserialize, Serialize};
use url::Url;

/// Result of a single probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Endpoint answered 200.
    Ready,
    /// Endpoint answered with some other status.
    NotReady(StatusCode),
    /// No response within the request timeout.
    TimedOut,
    /// Connection refused, DNS failure, malformed response, ...
    Unreachable(String),
}

impl ProbeOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, ProbeOutcome::Ready)
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeOutcome::Ready => write!(f, "ready"),
            ProbeOutcome::NotReady(status) => write!(f, "not ready ({status})"),
            ProbeOutcome::TimedOut => write!(f, "timed out"),
            ProbeOutcome::Unreachable(reason) => write!(f, "unreachable: {reason}"),
        }
    }
}

/// HTTP method used to probe.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ProbeMethod {
    #[default]
    Head,
    Get,
}

impl From<ProbeMethod> for Method {
    fn from(method: ProbeMethod) -> Self {
        match method {
            ProbeMethod::Head => Method::HEAD,
            ProbeMethod::Get => Method::GET,
        }
    }
}

/// Something that can report whether the target is ready.
pub trait Probe {
    fn check(&self) -> impl Future<Output = ProbeOutcome> + Send;
}

/// Probe backed by a real HTTP request.
pub struct HttpProbe {
    client: Client,
    url: Url,
    method: ProbeMethod,
}

impl HttpProbe {
    /// Build a probe. Without `timeout` a request waits until the node answers or drops it.
    pub fn new(
        url: Url,
        method: ProbeMethod,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .pool_max_idle_per_host(0)
            .no_proxy()
            .user_agent(concat!("wait-for-node/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, url, method })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Probe for HttpProbe {
    async fn check(&self) -> ProbeOutcome {
        let request = self.client.request(self.method.into(), self.url.clone());

        match request.send().await {
            Ok(response) if response.status() == StatusCode::OK => ProbeOutcome::Ready,
            Ok(response) => ProbeOutcome::NotReady(response.status()),
            Err(e) if e.is_timeout() => ProbeOutcome::TimedOut,
            Err(e) => ProbeOutcome::Unreachable(e.to_string()),
        }
    }
}
