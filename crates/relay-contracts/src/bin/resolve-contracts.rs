//! Prints the contract addresses a relay client would bind for a configuration.
//!
//! Usage: cargo run --bin resolve-contracts -- --config config/testnet.toml

use anyhow::{Context, Result};
use clap::Parser;
use relay_config::ConfigLoader;
use relay_contracts::Contracts;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "resolve-contracts")]
#[command(about = "Resolve and bind the relaying service contracts", long_about = None)]
struct Cli {
	#[arg(short, long, value_name = "FILE", default_value = "config/local.toml")]
	config: PathBuf,

	/// Overrides the log level from the configuration file
	#[arg(long, env = "RELAY_LOG_LEVEL")]
	log_level: Option<String>,
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	let config = ConfigLoader::new()
		.with_file(&cli.config)
		.load()
		.context("Failed to load configuration")?;

	setup_tracing(cli.log_level.as_deref().unwrap_or(&config.log_level))?;

	info!(
		"Resolving contracts for chain {} via {}",
		config.network.chain_id, config.network.rpc_url
	);

	let url = config
		.network
		.rpc_url
		.parse()
		.context("Invalid RPC URL")?;
	let provider = alloy::providers::ProviderBuilder::new().connect_http(url);

	let contracts = Contracts::new(provider, config.network.chain_id, Some(config.contracts))
		.context("Failed to build contract registry")?;

	let factory = contracts
		.smart_wallet_factory()
		.context("Failed to bind smart wallet factory")?;

	println!("Chain id: {}", contracts.chain_id());
	println!("smartWalletFactory: {}", factory.address());
	println!(
		"smartWalletRelayVerifier: {}",
		contracts.smart_wallet_relay_verifier()?.address()
	);
	println!(
		"smartWalletDeployVerifier: {}",
		contracts.smart_wallet_deploy_verifier()?.address()
	);

	Ok(())
}

fn setup_tracing(log_level: &str) -> Result<()> {
	let env_filter =
		EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;

	tracing_subscriber::registry()
		.with(env_filter)
		.with(tracing_subscriber::fmt::layer().with_target(false))
		.try_init()
		.context("Failed to initialize tracing")?;

	Ok(())
}
