//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! built-in defaults
//!     → optional TOML file: loader.rs (parse & deserialize)
//!     → environment / CLI overrides (main.rs)
//!     → validation.rs (semantic checks)
//!     → WaitConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    LogFormat, ObservabilityConfig, PollConfig, TargetConfig, WaitConfig, DEFAULT_BASE_URL,
    HEALTHCHECK_PATH, LOCALHOST_BASE_URL,
};
pub use validation::{validate_config, ValidationError};
