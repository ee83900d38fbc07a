//! Chain-agnostic 32-byte identifier for assets, accounts and pools.

use core::fmt;

use alloy_primitives::{B256, hex};
use serde::{Deserialize, Serialize};

/// A 32-byte identifier shared by every participant of the exchange.
///
/// Assets, account holders, pools, the router and the fee recipient all
/// live in the same address space.  Ordering is lexicographic over the raw
/// bytes, which is the order used to canonicalise asset pairs.
///
/// [`Address::ZERO`] is the null sentinel: it is never a valid asset and it
/// is the holder of permanently locked liquidity shares.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Address;
///
/// let addr = Address::from_bytes([7u8; 32]);
/// assert!(!addr.is_zero());
/// assert!(Address::ZERO < addr);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "B256", into = "B256")]
pub struct Address([u8; 32]);

impl Address {
    /// The all-zero null sentinel.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32 bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns `true` for the null sentinel.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Builds an address whose last eight bytes hold `value` (big-endian).
    ///
    /// Handy for readable fixtures: `Address::from_low_u64(1)` is `0x00…01`.
    #[must_use]
    pub fn from_low_u64(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&value.to_be_bytes());
        Self(bytes)
    }
}

impl From<B256> for Address {
    fn from(word: B256) -> Self {
        Self(word.0)
    }
}

impl From<Address> for B256 {
    fn from(addr: Address) -> Self {
        B256::new(addr.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
