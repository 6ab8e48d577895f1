//! Registry of the relaying service contracts for one network.
//!
//! The `Contracts` registry resolves the default deployment of a network,
//! overlays caller supplied addresses, and binds alloy contract handles to
//! the result. The two verifiers are bound during construction; the smart
//! wallet factory is bound on first access. Every handle is built at most
//! once and lives as long as the registry.

use crate::abi::{
	DeployVerifier, DeployVerifierContract, RelayVerifier, RelayVerifierContract,
	SmartWalletFactory, SmartWalletFactoryContract,
};
use crate::error::{BindingError, ContractsError};
use crate::merge::merge;
use crate::networks::{AddressResolver, BuiltinNetworks, ResolveError};
use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider};
use once_cell::sync::OnceCell;
use relay_types::{AddressSet, ChainId, ContractRole};
use std::fmt;
use tracing::{debug, warn};

/// Contract handles of the relaying services, bound to one chain client.
pub struct Contracts {
	provider: DynProvider,
	chain_id: ChainId,
	addresses: AddressSet,
	smart_wallet_factory: OnceCell<SmartWalletFactoryContract>,
	smart_wallet_relay_verifier: OnceCell<RelayVerifierContract>,
	smart_wallet_deploy_verifier: OnceCell<DeployVerifierContract>,
}

impl Contracts {
	/// Creates a registry using the built-in network table.
	///
	/// # Errors
	///
	/// Returns `ContractsError::Initialization` if the network table is
	/// unusable or if either verifier cannot be bound to its merged address.
	/// An unknown chain id alone is not an error: it is logged and only the
	/// overrides are used.
	pub fn new<P>(
		provider: P,
		chain_id: impl Into<ChainId>,
		overrides: Option<AddressSet>,
	) -> Result<Self, ContractsError>
	where
		P: Provider + 'static,
	{
		Self::with_resolver(provider, &BuiltinNetworks, chain_id, overrides)
	}

	/// Creates a registry resolving default addresses through `resolver`.
	pub fn with_resolver<P, R>(
		provider: P,
		resolver: &R,
		chain_id: impl Into<ChainId>,
		overrides: Option<AddressSet>,
	) -> Result<Self, ContractsError>
	where
		P: Provider + 'static,
		R: AddressResolver + ?Sized,
	{
		let chain_id = chain_id.into();

		let defaults = match resolver.resolve(chain_id) {
			Ok(defaults) => defaults,
			Err(e @ ResolveError::UnknownNetwork(_)) => {
				warn!(chain_id = %chain_id, "{}, continuing with configured addresses only", e);
				AddressSet::new()
			}
			Err(e @ ResolveError::Registry(_)) => {
				return Err(ContractsError::Initialization(e.to_string()));
			}
		};

		let addresses = merge(&overrides.unwrap_or_default(), &defaults);

		let contracts = Self {
			provider: provider.erased(),
			chain_id,
			addresses,
			smart_wallet_factory: OnceCell::new(),
			smart_wallet_relay_verifier: OnceCell::new(),
			smart_wallet_deploy_verifier: OnceCell::new(),
		};
		contracts.initialize()?;

		Ok(contracts)
	}

	fn initialize(&self) -> Result<(), ContractsError> {
		self.smart_wallet_relay_verifier()
			.and_then(|_| self.smart_wallet_deploy_verifier())
			.map_err(|e| ContractsError::Initialization(e.to_string()))?;

		debug!(chain_id = %self.chain_id, "Contracts initialized correctly");
		Ok(())
	}

	/// Returns the smart wallet factory, binding it on first use.
	pub fn smart_wallet_factory(&self) -> Result<&SmartWalletFactoryContract, BindingError> {
		self.smart_wallet_factory.get_or_try_init(|| {
			let address = self.bind(ContractRole::SmartWalletFactory)?;
			Ok(SmartWalletFactory::new(address, self.provider.clone()))
		})
	}

	/// Returns the relay verifier, binding it on first use.
	pub fn smart_wallet_relay_verifier(&self) -> Result<&RelayVerifierContract, BindingError> {
		self.smart_wallet_relay_verifier.get_or_try_init(|| {
			let address = self.bind(ContractRole::SmartWalletRelayVerifier)?;
			Ok(RelayVerifier::new(address, self.provider.clone()))
		})
	}

	/// Returns the deploy verifier, binding it on first use.
	pub fn smart_wallet_deploy_verifier(&self) -> Result<&DeployVerifierContract, BindingError> {
		self.smart_wallet_deploy_verifier.get_or_try_init(|| {
			let address = self.bind(ContractRole::SmartWalletDeployVerifier)?;
			Ok(DeployVerifier::new(address, self.provider.clone()))
		})
	}

	/// The effective addresses: overrides merged over the network defaults.
	pub fn addresses(&self) -> &AddressSet {
		&self.addresses
	}

	pub fn chain_id(&self) -> ChainId {
		self.chain_id
	}

	pub fn provider(&self) -> &DynProvider {
		&self.provider
	}

	fn bind(&self, role: ContractRole) -> Result<Address, BindingError> {
		let address = parse_address(role, self.addresses.get(role))?;
		debug!(%role, %address, "Binding contract");
		Ok(address)
	}
}

/// Parses the configured address of a role.
pub fn parse_address(role: ContractRole, raw: Option<&str>) -> Result<Address, BindingError> {
	let raw = raw
		.filter(|raw| !raw.is_empty())
		.ok_or(BindingError::MissingAddress(role))?;

	raw.parse::<Address>()
		.map_err(|e| BindingError::InvalidAddress {
			role,
			address: raw.to_string(),
			reason: e.to_string(),
		})
}

impl fmt::Debug for Contracts {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let bound: Vec<ContractRole> = [
			(
				ContractRole::SmartWalletFactory,
				self.smart_wallet_factory.get().is_some(),
			),
			(
				ContractRole::SmartWalletRelayVerifier,
				self.smart_wallet_relay_verifier.get().is_some(),
			),
			(
				ContractRole::SmartWalletDeployVerifier,
				self.smart_wallet_deploy_verifier.get().is_some(),
			),
		]
		.into_iter()
		.filter_map(|(role, is_bound)| is_bound.then_some(role))
		.collect();

		f.debug_struct("Contracts")
			.field("chain_id", &self.chain_id)
			.field("addresses", &self.addresses)
			.field("bound", &bound)
			.finish()
	}
}
