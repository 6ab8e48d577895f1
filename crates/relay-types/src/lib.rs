//! Common types shared by the relay contract crates.
//!
//! Provides the chain identifier, the contract roles the relaying services
//! deploy, the address set mapping those roles to deployed addresses, and
//! the schema helpers used to validate TOML configuration.

pub mod address;
pub mod chain;
pub mod validation;

pub use address::*;
pub use chain::*;
pub use validation::*;
