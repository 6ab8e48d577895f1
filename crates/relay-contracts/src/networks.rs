//! Known deployments of the relaying service contracts.
//!
//! The default table ships inside the crate (`resources/networks.toml`) and is
//! parsed at most once per process. Resolution is a pure lookup over the
//! parsed table.

use relay_types::{AddressSet, ChainId};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use thiserror::Error;

const BUILTIN_NETWORKS: &str = include_str!("../resources/networks.toml");

/// Errors that can occur while resolving the default addresses of a network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
	/// The network has no entry in the registry.
	#[error("Contracts not found for network {0}")]
	UnknownNetwork(ChainId),
	/// The registry itself is unusable.
	#[error("Network registry error: {0}")]
	Registry(String),
}

/// Source of the default contract addresses of a network.
pub trait AddressResolver: Send + Sync {
	fn resolve(&self, chain_id: ChainId) -> Result<AddressSet, ResolveError>;
}

#[derive(Debug, Deserialize)]
struct RegistryFile {
	#[serde(default)]
	networks: BTreeMap<String, AddressSet>,
}

/// Table of complete address sets indexed by chain id.
#[derive(Debug, Clone, Default)]
pub struct NetworkRegistry {
	networks: BTreeMap<ChainId, AddressSet>,
}

impl NetworkRegistry {
	/// Parses a registry from TOML.
	///
	/// Each `[networks.<chain id>]` table must provide an address for every
	/// contract role.
	pub fn from_toml(source: &str) -> Result<Self, ResolveError> {
		let file: RegistryFile =
			toml::from_str(source).map_err(|e| ResolveError::Registry(e.to_string()))?;

		let mut networks = BTreeMap::new();
		for (key, addresses) in file.networks {
			let chain_id = key.parse::<u64>().map(ChainId).map_err(|e| {
				ResolveError::Registry(format!("Invalid chain id '{}': {}", key, e))
			})?;

			if let Some(role) = addresses.missing_roles().first() {
				return Err(ResolveError::Registry(format!(
					"Network {} is missing an address for {}",
					chain_id, role
				)));
			}

			networks.insert(chain_id, addresses);
		}

		Ok(Self { networks })
	}

	/// The table embedded in the crate, parsed on first use.
	pub fn builtin() -> Result<&'static NetworkRegistry, ResolveError> {
		static BUILTIN: OnceLock<Result<NetworkRegistry, ResolveError>> = OnceLock::new();
		BUILTIN
			.get_or_init(|| NetworkRegistry::from_toml(BUILTIN_NETWORKS))
			.as_ref()
			.map_err(|e| e.clone())
	}

	pub fn contains(&self, chain_id: ChainId) -> bool {
		self.networks.contains_key(&chain_id)
	}

	/// Chain ids with a known deployment, in ascending order.
	pub fn chain_ids(&self) -> Vec<ChainId> {
		self.networks.keys().copied().collect()
	}
}

impl AddressResolver for NetworkRegistry {
	fn resolve(&self, chain_id: ChainId) -> Result<AddressSet, ResolveError> {
		self.networks
			.get(&chain_id)
			.cloned()
			.ok_or(ResolveError::UnknownNetwork(chain_id))
	}
}

/// Resolver backed by [`NetworkRegistry::builtin`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinNetworks;

impl AddressResolver for BuiltinNetworks {
	fn resolve(&self, chain_id: ChainId) -> Result<AddressSet, ResolveError> {
		NetworkRegistry::builtin()?.resolve(chain_id)
	}
}

/// Looks up the default addresses of a network in the built-in table.
pub fn resolve(chain_id: impl Into<ChainId>) -> Result<AddressSet, ResolveError> {
	BuiltinNetworks.resolve(chain_id.into())
}
