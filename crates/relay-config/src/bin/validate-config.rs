//! Configuration validation utility
//!
//! Usage: cargo run --bin validate-config config/testnet.toml

use std::env;
use std::process;

use relay_config::ConfigLoader;

fn main() {
	let args: Vec<String> = env::args().collect();

	if args.len() != 2 {
		eprintln!("Usage: {} <config-file>", args[0]);
		process::exit(1);
	}

	let config_path = &args[1];

	println!("Validating configuration file: {}", config_path);

	match ConfigLoader::new().with_file(config_path).load() {
		Ok(config) => {
			println!("✅ Configuration is valid!");
			println!("Chain id: {}", config.network.chain_id);
			println!("RPC URL: {}", config.network.rpc_url);
			println!("Log level: {}", config.log_level);
			for (role, address) in config.contracts.iter() {
				println!("{}: {}", role, address.unwrap_or("<network default>"));
			}
		}
		Err(e) => {
			eprintln!("❌ Configuration validation failed:");
			eprintln!("{}", e);
			process::exit(1);
		}
	}
}
