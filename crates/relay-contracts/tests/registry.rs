use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use relay_config::ConfigLoader;
use relay_contracts::{
	resolve, AddressSet, ChainId, ContractRole, Contracts, ContractsError, NetworkRegistry,
};
use std::io::Write;
use std::sync::{Arc, Mutex};

const TESTNET: u64 = 31;
const UNKNOWN: u64 = 999_999;

// Shared buffer collecting formatted log output
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
	fn contents(&self) -> String {
		String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
	}
}

impl Write for LogBuffer {
	fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
		self.0.lock().unwrap().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> std::io::Result<()> {
		Ok(())
	}
}

fn provider() -> DynProvider {
	ProviderBuilder::new()
		.connect_http("http://localhost:4444".parse().unwrap())
		.erased()
}

#[test]
fn test_known_network_without_overrides() {
	let contracts = Contracts::new(provider(), TESTNET, None).unwrap();

	assert_eq!(contracts.addresses(), &resolve(TESTNET).unwrap());

	let first = contracts.smart_wallet_factory().unwrap();
	let second = contracts.smart_wallet_factory().unwrap();
	assert!(std::ptr::eq(first, second));

	let expected: Address = contracts
		.addresses()
		.get(ContractRole::SmartWalletFactory)
		.unwrap()
		.parse()
		.unwrap();
	assert_eq!(*first.address(), expected);
}

#[test]
fn test_accessors_return_cached_instances() {
	let contracts = Contracts::new(provider(), TESTNET, None).unwrap();

	assert!(std::ptr::eq(
		contracts.smart_wallet_relay_verifier().unwrap(),
		contracts.smart_wallet_relay_verifier().unwrap()
	));
	assert!(std::ptr::eq(
		contracts.smart_wallet_deploy_verifier().unwrap(),
		contracts.smart_wallet_deploy_verifier().unwrap()
	));
}

#[test]
fn test_every_builtin_network_builds() {
	for chain_id in NetworkRegistry::builtin().unwrap().chain_ids() {
		let contracts = Contracts::new(provider(), chain_id, None).unwrap();
		assert!(contracts.addresses().is_complete());
		assert!(contracts.smart_wallet_factory().is_ok());
	}
}

#[test]
fn test_overrides_win_over_defaults() {
	let relay_verifier = "0x4444444444444444444444444444444444444444";
	let overrides = AddressSet::new().with(ContractRole::SmartWalletRelayVerifier, relay_verifier);
	let defaults = resolve(TESTNET).unwrap();

	let contracts = Contracts::new(provider(), TESTNET, Some(overrides)).unwrap();

	assert_eq!(
		contracts.addresses().get(ContractRole::SmartWalletRelayVerifier),
		Some(relay_verifier)
	);
	assert_eq!(
		contracts.addresses().get(ContractRole::SmartWalletFactory),
		defaults.get(ContractRole::SmartWalletFactory)
	);
	assert_eq!(
		*contracts.smart_wallet_relay_verifier().unwrap().address(),
		relay_verifier.parse::<Address>().unwrap()
	);
}

#[test]
fn test_unknown_network_with_factory_override_fails() {
	let overrides = AddressSet::new().with(ContractRole::SmartWalletFactory, "0xABC...");

	let err = Contracts::new(provider(), UNKNOWN, Some(overrides)).unwrap_err();

	let ContractsError::Initialization(message) = &err;
	assert!(message.contains("smartWalletRelayVerifier"));
	assert!(err.to_string().starts_with("Contracts fail to initialize: "));
}

#[test]
fn test_malformed_address_on_known_network_fails() {
	let overrides =
		AddressSet::new().with(ContractRole::SmartWalletDeployVerifier, "0xnot-an-address");

	let err = Contracts::new(provider(), TESTNET, Some(overrides)).unwrap_err();

	let message = err.to_string();
	assert!(message.starts_with("Contracts fail to initialize: "));
	assert!(message.contains("Invalid address '0xnot-an-address' for smartWalletDeployVerifier"));
}

#[test]
fn test_malformed_factory_surfaces_on_access() {
	let overrides = AddressSet::new().with(ContractRole::SmartWalletFactory, "0xABC...");

	let contracts = Contracts::new(provider(), TESTNET, Some(overrides)).unwrap();

	let err = contracts.smart_wallet_factory().unwrap_err();
	assert!(err.to_string().starts_with("Invalid address '0xABC...'"));
}

#[test]
fn test_registry_from_config_file() {
	let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
	write!(
		file,
		r#"
[network]
chain_id = {}
rpc_url = "http://localhost:4444"

[contracts]
smart_wallet_relay_verifier = "0x5555555555555555555555555555555555555555"
smart_wallet_deploy_verifier = "0x6666666666666666666666666666666666666666"
"#,
		UNKNOWN
	)
	.unwrap();

	let config = ConfigLoader::new()
		.with_env_prefix("RELAY_CONTRACTS_IT_")
		.with_file(file.path())
		.load()
		.unwrap();

	let contracts =
		Contracts::new(provider(), config.network.chain_id, Some(config.contracts)).unwrap();

	assert_eq!(contracts.chain_id(), ChainId(UNKNOWN));
	assert_eq!(
		contracts.addresses().get(ContractRole::SmartWalletFactory),
		None
	);
	assert!(contracts.smart_wallet_factory().is_err());
}

#[test]
fn test_unknown_network_logs_warning() {
	let logs = LogBuffer::default();
	let writer = logs.clone();
	let subscriber = tracing_subscriber::fmt()
		.with_writer(move || writer.clone())
		.with_ansi(false)
		.with_max_level(tracing::Level::WARN)
		.finish();

	let overrides = AddressSet::new().with(ContractRole::SmartWalletFactory, "0xABC...");
	let result = tracing::subscriber::with_default(subscriber, || {
		Contracts::new(provider(), UNKNOWN, Some(overrides))
	});

	let output = logs.contents();
	let warning = output
		.lines()
		.find(|line| line.contains("Contracts not found for network 999999"))
		.expect("no warning for the unknown network");
	assert!(warning.contains("WARN"));
	assert!(result.is_err());
}

#[test]
fn test_known_network_does_not_warn() {
	let logs = LogBuffer::default();
	let writer = logs.clone();
	let subscriber = tracing_subscriber::fmt()
		.with_writer(move || writer.clone())
		.with_ansi(false)
		.with_max_level(tracing::Level::WARN)
		.finish();

	let result =
		tracing::subscriber::with_default(subscriber, || Contracts::new(provider(), TESTNET, None));

	assert!(result.is_ok());
	assert!(logs.contents().is_empty());
}
