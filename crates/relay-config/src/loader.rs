//! Configuration loading from files and environment.

use crate::types::{validate_rpc_url, RelayConfig, RelayConfigSchema};
use crate::ConfigError;
use regex::Regex;
use relay_types::{ChainId, ConfigSchema, ContractRole};
use std::env;
use std::path::Path;
use tracing::{debug, info};

/// Configuration loader with environment variable substitution
pub struct ConfigLoader {
	file_path: Option<String>,
	env_prefix: String,
}

impl Default for ConfigLoader {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigLoader {
	pub fn new() -> Self {
		Self {
			file_path: None,
			env_prefix: "RELAY_".to_string(),
		}
	}

	pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
		self.file_path = Some(path.as_ref().to_string_lossy().to_string());
		self
	}

	pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.env_prefix = prefix.into();
		self
	}

	pub fn load(&self) -> Result<RelayConfig, ConfigError> {
		let file_path = self.file_path.as_ref().ok_or_else(|| {
			ConfigError::FileNotFound("No configuration file specified".to_string())
		})?;

		info!("Loading configuration from {}", file_path);
		let content = match std::fs::read_to_string(file_path) {
			Ok(content) => content,
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
				return Err(ConfigError::FileNotFound(file_path.clone()))
			}
			Err(e) => return Err(e.into()),
		};

		self.load_from_str(&content)
	}

	/// Parses configuration from TOML text, applying the same substitution,
	/// validation and overrides as [`ConfigLoader::load`].
	pub fn load_from_str(&self, content: &str) -> Result<RelayConfig, ConfigError> {
		let substituted = self.substitute_env_vars(content)?;

		let table: toml::Table =
			toml::from_str(&substituted).map_err(|e| ConfigError::ParseError(e.to_string()))?;
		let value = toml::Value::Table(table);

		RelayConfigSchema.validate(&value)?;

		let mut config: RelayConfig = value
			.try_into()
			.map_err(|e: toml::de::Error| ConfigError::ParseError(e.to_string()))?;

		self.apply_env_overrides(&mut config)?;
		self.validate_config(&config)?;

		Ok(config)
	}

	fn substitute_env_vars(&self, content: &str) -> Result<String, ConfigError> {
		let mut result = content.to_string();

		let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConfigError::ParseError(e.to_string()))?;

		for cap in re.captures_iter(content) {
			let full_match = &cap[0];
			let var_name = &cap[1];

			let env_value = env::var(var_name)
				.map_err(|_| ConfigError::EnvVarNotFound(var_name.to_string()))?;

			result = result.replace(full_match, &env_value);
		}

		Ok(result)
	}

	fn apply_env_overrides(&self, config: &mut RelayConfig) -> Result<(), ConfigError> {
		if let Ok(log_level) = env::var(format!("{}LOG_LEVEL", self.env_prefix)) {
			debug!("Overriding log level from environment");
			config.log_level = log_level;
		}

		if let Ok(chain_id) = env::var(format!("{}CHAIN_ID", self.env_prefix)) {
			debug!("Overriding chain id from environment");
			config.network.chain_id = chain_id
				.parse::<u64>()
				.map(ChainId)
				.map_err(|e| ConfigError::ValidationError(format!("Invalid chain id: {}", e)))?;
		}

		if let Ok(rpc_url) = env::var(format!("{}RPC_URL", self.env_prefix)) {
			debug!("Overriding RPC URL from environment");
			config.network.rpc_url = rpc_url;
		}

		for role in ContractRole::ALL {
			let key = format!("{}{}", self.env_prefix, role.config_key().to_uppercase());
			if let Ok(address) = env::var(&key) {
				debug!("Overriding {} address from environment", role);
				config.contracts.set(role, address);
			}
		}

		Ok(())
	}

	fn validate_config(&self, config: &RelayConfig) -> Result<(), ConfigError> {
		if config.network.chain_id.as_u64() == 0 {
			return Err(ConfigError::ValidationError(
				"Chain id must be greater than zero".to_string(),
			));
		}

		validate_rpc_url(&toml::Value::String(config.network.rpc_url.clone()))
			.map_err(ConfigError::ValidationError)?;

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;
	use tempfile::NamedTempFile;

	const CONFIG: &str = r#"
log_level = "debug"

[network]
chain_id = 31
rpc_url = "https://public-node.testnet.rsk.co"

[contracts]
smart_wallet_factory = "0x1111111111111111111111111111111111111111"
"#;

	#[test]
	fn test_load_from_file() {
		let mut file = NamedTempFile::new().unwrap();
		file.write_all(CONFIG.as_bytes()).unwrap();

		let config = ConfigLoader::new()
			.with_env_prefix("RELAY_TEST_FILE_")
			.with_file(file.path())
			.load()
			.unwrap();

		assert_eq!(config.log_level, "debug");
		assert_eq!(config.network.chain_id, ChainId(31));
		assert_eq!(
			config.contracts.get(ContractRole::SmartWalletFactory),
			Some("0x1111111111111111111111111111111111111111")
		);
	}

	#[test]
	fn test_missing_file() {
		let result = ConfigLoader::new()
			.with_file("/nonexistent/relay.toml")
			.load();
		assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
	}

	#[test]
	fn test_no_file_specified() {
		assert!(matches!(
			ConfigLoader::new().load(),
			Err(ConfigError::FileNotFound(_))
		));
	}

	#[test]
	fn test_env_substitution() {
		env::set_var("RELAY_TEST_SUBST_URL", "http://127.0.0.1:4444");
		let config = ConfigLoader::new()
			.with_env_prefix("RELAY_TEST_SUBST_")
			.load_from_str(
				r#"
				[network]
				chain_id = 33
				rpc_url = "${RELAY_TEST_SUBST_URL}"
				"#,
			)
			.unwrap();

		assert_eq!(config.network.rpc_url, "http://127.0.0.1:4444");
	}

	#[test]
	fn test_missing_env_var() {
		let result = ConfigLoader::new().load_from_str(
			r#"
			[network]
			chain_id = 33
			rpc_url = "${RELAY_TEST_DEFINITELY_UNSET}"
			"#,
		);
		assert!(matches!(
			result,
			Err(ConfigError::EnvVarNotFound(name)) if name == "RELAY_TEST_DEFINITELY_UNSET"
		));
	}

	#[test]
	fn test_env_overrides() {
		env::set_var("RELAY_TEST_OVR_CHAIN_ID", "33");
		env::set_var("RELAY_TEST_OVR_LOG_LEVEL", "warn");
		env::set_var(
			"RELAY_TEST_OVR_SMART_WALLET_DEPLOY_VERIFIER",
			"0x3333333333333333333333333333333333333333",
		);

		let config = ConfigLoader::new()
			.with_env_prefix("RELAY_TEST_OVR_")
			.load_from_str(CONFIG)
			.unwrap();

		assert_eq!(config.network.chain_id, ChainId(33));
		assert_eq!(config.log_level, "warn");
		assert_eq!(
			config.contracts.get(ContractRole::SmartWalletDeployVerifier),
			Some("0x3333333333333333333333333333333333333333")
		);
		assert_eq!(
			config.contracts.get(ContractRole::SmartWalletFactory),
			Some("0x1111111111111111111111111111111111111111")
		);
	}

	#[test]
	fn test_invalid_chain_id_override() {
		env::set_var("RELAY_TEST_BADID_CHAIN_ID", "testnet");
		let result = ConfigLoader::new()
			.with_env_prefix("RELAY_TEST_BADID_")
			.load_from_str(CONFIG);
		assert!(matches!(result, Err(ConfigError::ValidationError(_))));
	}

	#[test]
	fn test_invalid_rpc_url_override() {
		env::set_var("RELAY_TEST_BADURL_RPC_URL", "localhost:4444");
		let result = ConfigLoader::new()
			.with_env_prefix("RELAY_TEST_BADURL_")
			.load_from_str(CONFIG);
		assert!(matches!(result, Err(ConfigError::ValidationError(_))));
	}

	#[test]
	fn test_schema_errors_are_reported() {
		let result = ConfigLoader::new().with_env_prefix("RELAY_TEST_SCHEMA_").load_from_str(
			r#"
			[network]
			chain_id = 0
			rpc_url = "http://localhost:4444"
			"#,
		);
		assert!(matches!(result, Err(ConfigError::ValidationError(_))));
	}

	#[test]
	fn test_invalid_toml() {
		let result = ConfigLoader::new().load_from_str("[network");
		assert!(matches!(result, Err(ConfigError::ParseError(_))));
	}
}
