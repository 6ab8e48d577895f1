//! Chain identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric identifier of a blockchain network.
///
/// Only used as a lookup key; no validation is performed beyond the
/// presence of the id in a network registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub u64);

impl ChainId {
	pub fn as_u64(&self) -> u64 {
		self.0
	}
}

impl From<u64> for ChainId {
	fn from(id: u64) -> Self {
		Self(id)
	}
}

impl fmt::Display for ChainId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}
