//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the target resolves to an http(s) URL
//! - Validate value ranges (interval > 0, timeout and bounds >= 1 when set)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: WaitConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::WaitConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("target URL is invalid: {0}")]
    InvalidUrl(String),

    #[error("target URL scheme must be http or https, got {0}")]
    UnsupportedScheme(String),

    #[error("poll.interval_ms must be greater than zero")]
    ZeroInterval,

    #[error("poll.request_timeout_ms must be greater than zero when set")]
    ZeroTimeout,

    #[error("poll.max_attempts must be at least 1 when set")]
    ZeroMaxAttempts,

    #[error("poll.deadline_secs must be greater than zero when set")]
    ZeroDeadline,

    #[error("unknown log level {0:?}")]
    UnknownLogLevel(String),
}

/// Check a configuration for semantic errors.
pub fn validate_config(config: &WaitConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match config.target.endpoint() {
        Ok(url) if !matches!(url.scheme(), "http" | "https") => {
            errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string()));
        }
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::InvalidUrl(format!(
            "{}{}: {}",
            config.target.base_url, config.target.path, e
        ))),
    }

    if config.poll.interval_ms == 0 {
        errors.push(ValidationError::ZeroInterval);
    }
    if config.poll.request_timeout_ms == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }
    if config.poll.max_attempts == Some(0) {
        errors.push(ValidationError::ZeroMaxAttempts);
    }
    if config.poll.deadline_secs == Some(0) {
        errors.push(ValidationError::ZeroDeadline);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
