//! Configuration types and their schema.

use relay_types::{
	AddressSet, ChainId, ConfigSchema, ContractRole, Field, FieldType, Schema, ValidationError,
};
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
	/// Default tracing filter for binaries built on this configuration.
	#[serde(default = "default_log_level")]
	pub log_level: String,
	pub network: NetworkConfig,
	/// Addresses overriding the network defaults. Every key is optional.
	#[serde(default)]
	pub contracts: AddressSet,
}

/// Chain connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
	pub chain_id: ChainId,
	pub rpc_url: String,
}

fn default_log_level() -> String {
	"info".to_string()
}

/// Schema of the raw TOML document.
pub struct RelayConfigSchema;

impl ConfigSchema for RelayConfigSchema {
	fn validate(&self, config: &toml::Value) -> Result<(), ValidationError> {
		let network = Schema::new(
			vec![
				Field::new(
					"chain_id",
					FieldType::Integer {
						min: Some(1),
						max: None,
					},
				),
				Field::new("rpc_url", FieldType::String).with_validator(validate_rpc_url),
			],
			vec![],
		)
		.strict();

		let contracts = Schema::new(
			vec![],
			ContractRole::ALL
				.into_iter()
				.map(|role| {
					Field::new(role.config_key(), FieldType::String)
						.with_validator(validate_address)
				})
				.collect(),
		)
		.strict();

		let schema = Schema::new(
			vec![Field::new("network", FieldType::Table(network))],
			vec![
				Field::new("log_level", FieldType::String),
				Field::new("contracts", FieldType::Table(contracts)),
			],
		)
		.strict();

		schema.validate(config)
	}
}

pub(crate) fn validate_rpc_url(value: &toml::Value) -> Result<(), String> {
	let url = value.as_str().unwrap_or_default();
	if url.starts_with("http://") || url.starts_with("https://") {
		Ok(())
	} else {
		Err("RPC URL must start with http:// or https://".to_string())
	}
}

/// Accepts empty strings (meaning "use the network default") and 0x-prefixed
/// 20-byte hex addresses.
pub(crate) fn validate_address(value: &toml::Value) -> Result<(), String> {
	let address = value.as_str().unwrap_or_default();
	if address.is_empty() {
		return Ok(());
	}

	let digits = address
		.strip_prefix("0x")
		.ok_or_else(|| "Address must start with 0x".to_string())?;

	if digits.len() != 40 {
		return Err("Address must be 40 hex characters (20 bytes)".to_string());
	}

	if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
		return Err("Address must be valid hexadecimal".to_string());
	}

	Ok(())
}
