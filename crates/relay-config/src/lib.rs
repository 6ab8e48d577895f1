//! Configuration for building a relay contract registry.
//!
//! Configuration is read from a TOML file. `${VAR}` placeholders are replaced
//! with environment variables before parsing, the raw document is checked
//! against [`RelayConfigSchema`], and `RELAY_*` environment variables may
//! override individual settings afterwards.

use thiserror::Error;

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{NetworkConfig, RelayConfig, RelayConfigSchema};

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("File not found: {0}")]
	FileNotFound(String),

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Validation error: {0}")]
	ValidationError(String),

	#[error("Environment variable not found: {0}")]
	EnvVarNotFound(String),

	#[error("IO error: {0}")]
	IoError(#[from] std::io::Error),
}

impl From<relay_types::ValidationError> for ConfigError {
	fn from(err: relay_types::ValidationError) -> Self {
		ConfigError::ValidationError(err.to_string())
	}
}
