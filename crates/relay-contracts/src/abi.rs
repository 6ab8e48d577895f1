//! Solidity interfaces of the relaying service contracts.
//!
//! Only the read side of each contract is declared; transactions against
//! these contracts are built by the relay client, not by this crate.

use alloy::providers::DynProvider;
use alloy::sol;

sol! {
	/// Factory deploying smart wallets at counterfactual addresses.
	#[sol(rpc)]
	interface SmartWalletFactory {
		function getSmartWalletAddress(address owner, address recoverer, uint256 index) external view returns (address);
		function nonce(address from) external view returns (uint256);
		function runtimeCodeHash() external view returns (bytes32);
		function getCreationBytecode() external view returns (bytes memory);
	}

	/// Verifier consulted for relayed calls through an existing smart wallet.
	#[sol(rpc)]
	interface RelayVerifier {
		function versionVerifier() external view returns (string memory);
		function acceptsToken(address token) external view returns (bool);
		function getAcceptedTokens() external view returns (address[] memory);
	}

	/// Verifier consulted for relayed smart wallet deployments.
	#[sol(rpc)]
	interface DeployVerifier {
		function versionVerifier() external view returns (string memory);
		function acceptsToken(address token) external view returns (bool);
		function getAcceptedTokens() external view returns (address[] memory);
	}
}

pub type SmartWalletFactoryContract = SmartWalletFactory::SmartWalletFactoryInstance<DynProvider>;
pub type RelayVerifierContract = RelayVerifier::RelayVerifierInstance<DynProvider>;
pub type DeployVerifierContract = DeployVerifier::DeployVerifierInstance<DynProvider>;
