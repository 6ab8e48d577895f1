//! Contract registry for the relaying services.
//!
//! Resolves the deployed addresses of the smart wallet factory and the relay
//! and deploy verifiers for a network, merges them with caller supplied
//! overrides, and binds typed alloy contract handles to the result.
//!
//! # Architecture
//!
//! - `networks`: the known-network table and the `AddressResolver` seam
//! - `merge`: field-wise override of default addresses
//! - `abi`: `sol!` bindings for the three contracts
//! - `registry`: the `Contracts` registry with its construct-once handle cache

pub mod abi;
pub mod error;
pub mod merge;
pub mod networks;
pub mod registry;

pub use error::{BindingError, ContractsError};
pub use merge::merge;
pub use networks::{resolve, AddressResolver, BuiltinNetworks, NetworkRegistry, ResolveError};
pub use registry::Contracts;

pub use relay_types::{AddressSet, ChainId, ContractRole};
