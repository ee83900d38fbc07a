//! Canonically ordered pair of distinct assets.

use serde::{Deserialize, Serialize};

use super::Address;
use crate::error::{AmmError, Result};

/// An unordered pair of distinct assets, stored sorted by address bytes.
///
/// `(A, B)` and `(B, A)` construct equal pairs, which makes `AssetPair` the
/// registry key and the input of deterministic pool addressing.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Address, AssetPair};
///
/// let a = Address::from_low_u64(1);
/// let b = Address::from_low_u64(2);
///
/// let pair = AssetPair::new(b, a).expect("distinct, non-zero assets");
/// assert_eq!(pair.first(), a);
/// assert_eq!(pair, AssetPair::new(a, b).expect("same pair"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "(Address, Address)", into = "(Address, Address)")]
pub struct AssetPair {
    asset_a: Address,
    asset_b: Address,
}

impl AssetPair {
    /// Sorts two assets into a canonical pair.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAssets`] if `x == y`.
    /// - [`AmmError::ZeroAddress`] if either asset is [`Address::ZERO`].
    pub fn new(x: Address, y: Address) -> Result<Self> {
        if x == y {
            return Err(AmmError::IdenticalAssets);
        }
        let (asset_a, asset_b) = if x < y { (x, y) } else { (y, x) };
        // after sorting only the lower side can be the null sentinel
        if asset_a.is_zero() {
            return Err(AmmError::ZeroAddress);
        }
        Ok(Self { asset_a, asset_b })
    }

    /// Returns the lower asset.
    #[must_use]
    pub const fn first(&self) -> Address {
        self.asset_a
    }

    /// Returns the higher asset.
    #[must_use]
    pub const fn second(&self) -> Address {
        self.asset_b
    }

    /// Returns `true` if `asset` is one side of the pair.
    #[must_use]
    pub fn contains(&self, asset: &Address) -> bool {
        self.asset_a == *asset || self.asset_b == *asset
    }

    /// Returns `true` if `asset` is the lower side.
    #[must_use]
    pub fn is_first(&self, asset: &Address) -> bool {
        self.asset_a == *asset
    }

    /// Returns the counterpart of `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPath`] if `asset` is not in the pair.
    pub fn other(&self, asset: &Address) -> Result<Address> {
        if *asset == self.asset_a {
            Ok(self.asset_b)
        } else if *asset == self.asset_b {
            Ok(self.asset_a)
        } else {
            Err(AmmError::InvalidPath("asset is not part of this pair"))
        }
    }
}

impl TryFrom<(Address, Address)> for AssetPair {
    type Error = AmmError;

    fn try_from((x, y): (Address, Address)) -> Result<Self> {
        Self::new(x, y)
    }
}

impl From<AssetPair> for (Address, Address) {
    fn from(pair: AssetPair) -> Self {
        (pair.asset_a, pair.asset_b)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::factory::{derive_pool_address, pool_address};

    fn addr(n: u64) -> Address {
        Address::from_low_u64(n)
    }

    #[test]
    fn sorts_both_orders_to_the_same_pair() {
        let Ok(ab) = AssetPair::new(addr(1), addr(2)) else {
            panic!("expected Ok");
        };
        let Ok(ba) = AssetPair::new(addr(2), addr(1)) else {
            panic!("expected Ok");
        };
        assert_eq!(ab, ba);
        assert_eq!(ab.first(), addr(1));
        assert_eq!(ab.second(), addr(2));
    }

    #[test]
    fn identical_assets_rejected() {
        assert_eq!(
            AssetPair::new(addr(3), addr(3)),
            Err(AmmError::IdenticalAssets)
        );
    }

    #[test]
    fn identical_check_precedes_zero_check() {
        assert_eq!(
            AssetPair::new(Address::ZERO, Address::ZERO),
            Err(AmmError::IdenticalAssets)
        );
    }

    #[test]
    fn zero_address_rejected_on_either_side() {
        assert_eq!(AssetPair::new(Address::ZERO, addr(1)), Err(AmmError::ZeroAddress));
        assert_eq!(AssetPair::new(addr(1), Address::ZERO), Err(AmmError::ZeroAddress));
    }

    #[test]
    fn membership_and_counterpart() {
        let Ok(pair) = AssetPair::new(addr(5), addr(9)) else {
            panic!("expected Ok");
        };
        assert!(pair.contains(&addr(5)));
        assert!(!pair.contains(&addr(6)));
        assert!(pair.is_first(&addr(5)));
        assert_eq!(pair.other(&addr(9)), Ok(addr(5)));
        assert!(pair.other(&addr(6)).is_err());
    }

    // -- serde ---------------------------------------------------------------

    fn decode(x: Address, y: Address) -> std::result::Result<AssetPair, serde_json::Error> {
        let Ok(json) = serde_json::to_string(&(x, y)) else {
            panic!("addresses serialize");
        };
        serde_json::from_str::<AssetPair>(&json)
    }

    #[test]
    fn deserializing_reversed_assets_yields_canonical_pair() {
        let Ok(pair) = decode(addr(2), addr(1)) else {
            panic!("distinct assets decode");
        };
        assert_eq!(pair.first(), addr(1));
        assert_eq!(pair.second(), addr(2));
        let Ok(built) = AssetPair::new(addr(1), addr(2)) else {
            panic!("expected Ok");
        };
        assert_eq!(pair, built);
        assert_eq!(Ok(derive_pool_address(&pair)), pool_address(addr(2), addr(1)));
    }

    #[test]
    fn deserializing_invalid_pairs_fails() {
        let Err(identical) = decode(addr(4), addr(4)) else {
            panic!("identical assets must not decode");
        };
        assert!(identical.to_string().contains(&AmmError::IdenticalAssets.to_string()));
        let Err(zero) = decode(Address::ZERO, addr(4)) else {
            panic!("zero asset must not decode");
        };
        assert!(zero.to_string().contains(&AmmError::ZeroAddress.to_string()));
    }

    #[test]
    fn serializes_as_sorted_tuple() {
        let Ok(pair) = AssetPair::new(addr(9), addr(5)) else {
            panic!("expected Ok");
        };
        let Ok(json) = serde_json::to_string(&pair) else {
            panic!("pair serializes");
        };
        let Ok(expected) = serde_json::to_string(&(addr(5), addr(9))) else {
            panic!("tuple serializes");
        };
        assert_eq!(json, expected);
    }
}
