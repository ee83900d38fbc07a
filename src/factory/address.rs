//! Deterministic pool addresses.
//!
//! ```text
//! salt    = keccak256(asset_a ‖ asset_b)
//! address = keccak256(0xff ‖ salt ‖ keccak256(POOL_CODE_VERSION))
//! ```
//!
//! The address depends only on the canonical pair and the code version, so
//! the router can compute where a pool lives without consulting the
//! registry.

use alloy_primitives::{B256, keccak256};

use crate::domain::{Address, AssetPair};
use crate::error::Result;

/// Version tag hashed into every pool address.  Changing it moves every
/// pool.
pub const POOL_CODE_VERSION: &str = "pairswap/constant-product-pool/v1";

/// `keccak256(POOL_CODE_VERSION)`.
#[must_use]
pub fn pool_code_fingerprint() -> B256 {
    keccak256(POOL_CODE_VERSION.as_bytes())
}

/// Address of the pool for a canonical pair.
#[must_use]
pub fn derive_pool_address(pair: &AssetPair) -> Address {
    let mut assets = [0u8; 64];
    assets[..32].copy_from_slice(pair.first().as_bytes());
    assets[32..].copy_from_slice(pair.second().as_bytes());
    let salt = keccak256(assets);

    let mut preimage = [0u8; 65];
    preimage[0] = 0xff;
    preimage[1..33].copy_from_slice(salt.as_slice());
    preimage[33..].copy_from_slice(pool_code_fingerprint().as_slice());
    Address::from(keccak256(preimage))
}

/// Address of the pool for two assets in either order.
///
/// # Errors
///
/// Propagates [`AssetPair::new`] errors for identical or zero assets.
pub fn pool_address(x: Address, y: Address) -> Result<Address> {
    AssetPair::new(x, y).map(|pair| derive_pool_address(&pair))
}
