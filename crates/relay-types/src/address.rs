//! Contract roles and the address sets that map them to deployments.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical role of a contract deployed for the relaying services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractRole {
	SmartWalletFactory,
	SmartWalletRelayVerifier,
	SmartWalletDeployVerifier,
}

impl ContractRole {
	/// Every role, in declaration order.
	pub const ALL: [ContractRole; 3] = [
		ContractRole::SmartWalletFactory,
		ContractRole::SmartWalletRelayVerifier,
		ContractRole::SmartWalletDeployVerifier,
	];

	/// Key used for this role in TOML configuration and environment overrides.
	pub fn config_key(&self) -> &'static str {
		match self {
			ContractRole::SmartWalletFactory => "smart_wallet_factory",
			ContractRole::SmartWalletRelayVerifier => "smart_wallet_relay_verifier",
			ContractRole::SmartWalletDeployVerifier => "smart_wallet_deploy_verifier",
		}
	}

	/// Name of the role as published in deployment registries.
	pub fn registry_name(&self) -> &'static str {
		match self {
			ContractRole::SmartWalletFactory => "smartWalletFactory",
			ContractRole::SmartWalletRelayVerifier => "smartWalletRelayVerifier",
			ContractRole::SmartWalletDeployVerifier => "smartWalletDeployVerifier",
		}
	}
}

impl fmt::Display for ContractRole {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.registry_name())
	}
}

/// Deployed contract addresses, one optional slot per [`ContractRole`].
///
/// Addresses are kept as the raw strings they were configured with. Parsing
/// happens only when a contract handle is bound to the address, so a set may
/// legitimately hold partial or malformed values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AddressSet {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub smart_wallet_factory: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub smart_wallet_relay_verifier: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub smart_wallet_deploy_verifier: Option<String>,
}

impl AddressSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style setter.
	pub fn with(mut self, role: ContractRole, address: impl Into<String>) -> Self {
		self.set(role, address);
		self
	}

	/// Returns the address configured for a role, treating empty strings as absent.
	pub fn get(&self, role: ContractRole) -> Option<&str> {
		self.slot(role).as_deref().filter(|address| !address.is_empty())
	}

	pub fn set(&mut self, role: ContractRole, address: impl Into<String>) {
		*self.slot_mut(role) = Some(address.into());
	}

	/// Roles with no usable address.
	pub fn missing_roles(&self) -> Vec<ContractRole> {
		ContractRole::ALL
			.into_iter()
			.filter(|role| self.get(*role).is_none())
			.collect()
	}

	/// True when every role holds a non-empty address.
	pub fn is_complete(&self) -> bool {
		self.missing_roles().is_empty()
	}

	pub fn is_empty(&self) -> bool {
		ContractRole::ALL
			.into_iter()
			.all(|role| self.get(role).is_none())
	}

	/// Iterates over every role together with its address, if any.
	pub fn iter(&self) -> impl Iterator<Item = (ContractRole, Option<&str>)> {
		ContractRole::ALL
			.into_iter()
			.map(move |role| (role, self.get(role)))
	}

	fn slot(&self, role: ContractRole) -> &Option<String> {
		match role {
			ContractRole::SmartWalletFactory => &self.smart_wallet_factory,
			ContractRole::SmartWalletRelayVerifier => &self.smart_wallet_relay_verifier,
			ContractRole::SmartWalletDeployVerifier => &self.smart_wallet_deploy_verifier,
		}
	}

	fn slot_mut(&mut self, role: ContractRole) -> &mut Option<String> {
		match role {
			ContractRole::SmartWalletFactory => &mut self.smart_wallet_factory,
			ContractRole::SmartWalletRelayVerifier => &mut self.smart_wallet_relay_verifier,
			ContractRole::SmartWalletDeployVerifier => &mut self.smart_wallet_deploy_verifier,
		}
	}
}
