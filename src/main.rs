//! `wait-for-node`: block until the local node's healthcheck answers 200.
//!
//! Run with no arguments to probe `http://127.0.0.1:7071/api/v0/node/healthcheck`
//! once a second, forever, and exit 0 as soon as it is ready.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use wait_for_node::config::{load_config, validate_config, ConfigError, LogFormat, WaitConfig};
use wait_for_node::health::{HttpProbe, ProbeMethod, ReadinessPoller};
use wait_for_node::observability::init_logging;

#[derive(Parser)]
#[command(name = "wait-for-node")]
#[command(about = "Wait until a node's HTTP healthcheck reports ready", long_about = None)]
struct Cli {
    /// TOML config file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Node API base URL (e.g. http://localhost:7071)
    #[arg(long, env = "CERAMIC_URL")]
    base_url: Option<String>,

    /// Healthcheck path on the node API
    #[arg(long)]
    path: Option<String>,

    /// Milliseconds to sleep between probes
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Per-probe request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// HTTP method used to probe
    #[arg(long, value_enum)]
    method: Option<ProbeMethod>,

    /// Give up after this many probes
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Give up after this many seconds
    #[arg(long)]
    deadline_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

impl Cli {
    /// Resolve defaults < config file < flags/environment.
    fn into_config(self) -> Result<WaitConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => WaitConfig::default(),
        };

        if let Some(base_url) = self.base_url {
            config.target.base_url = base_url;
        }
        if let Some(path) = self.path {
            config.target.path = path;
        }
        if let Some(interval_ms) = self.interval_ms {
            config.poll.interval_ms = interval_ms;
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.poll.request_timeout_ms = Some(timeout_ms);
        }
        if let Some(method) = self.method {
            config.poll.method = method;
        }
        if self.max_attempts.is_some() {
            config.poll.max_attempts = self.max_attempts;
        }
        if self.deadline_secs.is_some() {
            config.poll.deadline_secs = self.deadline_secs;
        }
        if let Some(log_level) = self.log_level {
            config.observability.log_level = log_level;
        }
        if let Some(log_format) = self.log_format {
            config.observability.log_format = log_format;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.into_config()?;

    init_logging(&config.observability);

    let probe = HttpProbe::new(
        config.target.endpoint()?,
        config.poll.method,
        config.poll.request_timeout_ms.map(Duration::from_millis),
    )?;
    tracing::debug!(
        url = %probe.url(),
        method = ?config.poll.method,
        request_timeout_ms = config.poll.request_timeout_ms,
        "Configuration loaded"
    );

    let poller = ReadinessPoller::new(probe, &config.poll);
    poller.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let argv = std::iter::once("wait-for-node").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn no_arguments_reproduce_stock_gate() {
        let mut cli = cli(&[]);
        cli.base_url = None; // ignore CERAMIC_URL from the environment
        let config = cli.into_config().unwrap();

        assert_eq!(
            config.target.endpoint().unwrap().as_str(),
            "http://127.0.0.1:7071/api/v0/node/healthcheck"
        );
        assert_eq!(config.poll.interval_ms, 1000);
        assert!(config.poll.request_timeout_ms.is_none());
        assert!(config.poll.max_attempts.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let config = cli(&[
            "--base-url",
            "http://localhost:7071",
            "--interval-ms",
            "250",
            "--timeout-ms",
            "3000",
            "--method",
            "get",
            "--max-attempts",
            "10",
        ])
        .into_config()
        .unwrap();

        assert_eq!(config.target.base_url, "http://localhost:7071");
        assert_eq!(config.poll.interval_ms, 250);
        assert_eq!(config.poll.request_timeout_ms, Some(3000));
        assert_eq!(config.poll.method, ProbeMethod::Get);
        assert_eq!(config.poll.max_attempts, Some(10));
    }

    #[test]
    fn invalid_flag_value_reads_as_message() {
        let err = cli(&["--interval-ms", "0"]).into_config().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: poll.interval_ms must be greater than zero"
        );
    }
}
