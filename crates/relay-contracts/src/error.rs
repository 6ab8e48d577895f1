//! Error types for the contract registry.

use relay_types::ContractRole;
use thiserror::Error;

/// Errors raised while binding a contract handle to its address.
#[derive(Debug, Error)]
pub enum BindingError {
	/// No usable address is configured for the role.
	#[error("No address configured for {0}")]
	MissingAddress(ContractRole),
	/// The configured address is not a 20-byte hex address.
	#[error("Invalid address '{address}' for {role}: {reason}")]
	InvalidAddress {
		role: ContractRole,
		address: String,
		reason: String,
	},
}

/// Errors raised while constructing a [`crate::Contracts`] registry.
#[derive(Debug, Error)]
pub enum ContractsError {
	#[error("Contracts fail to initialize: {0}")]
	Initialization(String),
}
