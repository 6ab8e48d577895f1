//! Field-wise merging of address sets.

use relay_types::{AddressSet, ContractRole};

/// Overlays `overrides` on top of `defaults`.
///
/// For every role the override wins when it holds a non-empty value,
/// otherwise the default is kept. Addresses are not validated here.
pub fn merge(overrides: &AddressSet, defaults: &AddressSet) -> AddressSet {
	let mut merged = AddressSet::new();
	for role in ContractRole::ALL {
		if let Some(address) = overrides.get(role).or_else(|| defaults.get(role)) {
			merged.set(role, address);
		}
	}
	merged
}
