//! Validated multi-hop swap route.

use serde::{Deserialize, Serialize};

use super::{Address, AssetPair};
use crate::error::{AmmError, Result};

/// An ordered list of at least two assets describing a swap route.
///
/// Consecutive entries form one hop each; `[A, B, C]` swaps A for B in the
/// A/B pool and then B for C in the B/C pool.  Two equal consecutive hops
/// are rejected at construction, so every hop names a valid pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Address>", into = "Vec<Address>")]
pub struct SwapPath(Vec<Address>);

impl SwapPath {
    /// Validates and wraps a route.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPath`] if the route has fewer than two
    /// entries or repeats an asset on consecutive hops.
    pub fn new(hops: Vec<Address>) -> Result<Self> {
        if hops.len() < 2 {
            return Err(AmmError::InvalidPath("path needs at least two assets"));
        }
        if hops.windows(2).any(|w| w[0] == w[1]) {
            return Err(AmmError::InvalidPath("consecutive hops repeat an asset"));
        }
        Ok(Self(hops))
    }

    /// Input asset of the route.
    #[must_use]
    pub fn first(&self) -> Address {
        self.0[0]
    }

    /// Output asset of the route.
    #[must_use]
    pub fn last(&self) -> Address {
        self.0[self.0.len() - 1]
    }

    /// All assets in route order.
    #[must_use]
    pub fn hops(&self) -> &[Address] {
        &self.0
    }

    /// Number of assets on the route (hops + 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; a valid path holds at least two assets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(input, output)` per hop.
    pub fn legs(&self) -> impl Iterator<Item = (Address, Address)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }

    /// Canonical pair of the hop starting at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPath`] if `index` is the last asset or
    /// beyond, or the propagated pair-construction error.
    pub fn pair_at(&self, index: usize) -> Result<AssetPair> {
        match (self.0.get(index), self.0.get(index + 1)) {
            (Some(x), Some(y)) => AssetPair::new(*x, *y),
            _ => Err(AmmError::InvalidPath("hop index out of range")),
        }
    }
}

impl TryFrom<Vec<Address>> for SwapPath {
    type Error = AmmError;

    fn try_from(hops: Vec<Address>) -> Result<Self> {
        Self::new(hops)
    }
}

impl From<SwapPath> for Vec<Address> {
    fn from(path: SwapPath) -> Self {
        path.0
    }
}
