//! Pool registry: pair creation, lookup and fee governance.

use std::collections::HashMap;

use indexmap::IndexMap;

use super::address::derive_pool_address;
use crate::config::{FeeConfig, RegistryConfig};
use crate::domain::{Address, AssetPair, FeeRate};
use crate::error::{AmmError, Result};
use crate::pools::PairPool;
use crate::traits::FromConfig;

/// Owner of every pool and of the global fee schedule.
///
/// Pools are stored in creation order (that order *is* `all_pairs`) and are
/// addressed by their deterministic address.  A pool is created once per
/// canonical pair and never removed.
///
/// Only the `fee_setter` may change fees, the fee recipient, or hand the
/// role over.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Address;
/// use pairswap::factory::PoolRegistry;
///
/// let gov = Address::from_low_u64(0x60);
/// let mut registry = PoolRegistry::new(gov).expect("non-zero fee setter");
///
/// let a = Address::from_low_u64(1);
/// let b = Address::from_low_u64(2);
/// let pool = registry.create_pair(a, b).expect("new pair");
/// assert_eq!(registry.get_pair(b, a), Some(pool));
/// assert_eq!(registry.all_pairs_len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolRegistry {
    pairs: HashMap<AssetPair, Address>,
    pools: IndexMap<Address, PairPool>,
    fee_setter: Address,
    fees: FeeConfig,
}

impl PoolRegistry {
    /// Fee-free registry governed by `fee_setter`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ZeroAddress`] if `fee_setter` is the null
    /// sentinel.
    pub fn new(fee_setter: Address) -> Result<Self> {
        Self::from_config(&RegistryConfig::with_fee_setter(fee_setter)?)
    }

    // -- pairs --------------------------------------------------------------

    /// Creates the pool for `x`/`y` and returns its address.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAssets`] if `x == y`.
    /// - [`AmmError::ZeroAddress`] if either asset is zero.
    /// - [`AmmError::PairExists`] if the pair already has a pool.
    pub fn create_pair(&mut self, x: Address, y: Address) -> Result<Address> {
        let pair = AssetPair::new(x, y)?;
        if self.pairs.contains_key(&pair) {
            return Err(AmmError::PairExists);
        }
        let address = derive_pool_address(&pair);
        self.pairs.insert(pair, address);
        self.pools.insert(address, PairPool::new(address, pair));
        tracing::info!(
            asset_a = %pair.first(),
            asset_b = %pair.second(),
            pool = %address,
            index = self.pools.len() - 1,
            "pair created"
        );
        Ok(address)
    }

    /// Address of the pool for `x`/`y` in either order, if created.
    #[must_use]
    pub fn get_pair(&self, x: Address, y: Address) -> Option<Address> {
        let pair = AssetPair::new(x, y).ok()?;
        self.pairs.get(&pair).copied()
    }

    /// Number of pools ever created.
    #[must_use]
    pub fn all_pairs_len(&self) -> usize {
        self.pools.len()
    }

    /// Address of the `index`-th pool in creation order.
    #[must_use]
    pub fn pair_at(&self, index: usize) -> Option<Address> {
        self.pools.get_index(index).map(|(address, _)| *address)
    }

    /// All pool addresses in creation order.
    pub fn all_pairs(&self) -> impl Iterator<Item = Address> + '_ {
        self.pools.keys().copied()
    }

    /// Pool at `address`.
    #[must_use]
    pub fn pool(&self, address: &Address) -> Option<&PairPool> {
        self.pools.get(address)
    }

    /// Mutable pool at `address`.
    pub fn pool_mut(&mut self, address: &Address) -> Option<&mut PairPool> {
        self.pools.get_mut(address)
    }

    /// Pool for `x`/`y` in either order.
    #[must_use]
    pub fn pool_for(&self, x: Address, y: Address) -> Option<&PairPool> {
        self.get_pair(x, y).and_then(|address| self.pools.get(&address))
    }

    // -- governance ---------------------------------------------------------

    /// Current fee schedule.
    #[must_use]
    pub const fn fee_config(&self) -> &FeeConfig {
        &self.fees
    }

    /// Current governance account.
    #[must_use]
    pub const fn fee_setter(&self) -> Address {
        self.fee_setter
    }

    /// Sets or clears the fee recipient.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Forbidden`] unless `caller` is the fee setter.
    pub fn set_fee_recipient(&mut self, caller: Address, recipient: Option<Address>) -> Result<()> {
        self.authorize(caller)?;
        self.fees.fee_recipient = recipient;
        tracing::info!(recipient = ?recipient.map(|r| r.to_string()), "fee recipient changed");
        Ok(())
    }

    /// Hands the governance role to `new_setter`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Forbidden`] unless `caller` is the fee setter.
    /// - [`AmmError::ZeroAddress`] if `new_setter` is the null sentinel.
    pub fn set_fee_setter(&mut self, caller: Address, new_setter: Address) -> Result<()> {
        self.authorize(caller)?;
        if new_setter.is_zero() {
            return Err(AmmError::ZeroAddress);
        }
        self.fee_setter = new_setter;
        tracing::info!(fee_setter = %new_setter, "fee setter changed");
        Ok(())
    }

    /// Replaces both fee rates.  Applies to every pool from the next
    /// operation on.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Forbidden`] unless `caller` is the fee setter.
    /// - [`AmmError::InvalidFee`] if either rate exceeds 100%.
    pub fn set_fees(&mut self, caller: Address, swap_fee: FeeRate, liquidity_fee: FeeRate) -> Result<()> {
        self.authorize(caller)?;
        let fees = FeeConfig::new(swap_fee, liquidity_fee, self.fees.fee_recipient)?;
        self.fees = fees;
        tracing::info!(%swap_fee, %liquidity_fee, "fees changed");
        Ok(())
    }

    fn authorize(&self, caller: Address) -> Result<()> {
        if caller == self.fee_setter {
            Ok(())
        } else {
            Err(AmmError::Forbidden)
        }
    }
}

impl FromConfig<RegistryConfig> for PoolRegistry {
    fn from_config(config: &RegistryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            pairs: HashMap::new(),
            pools: IndexMap::new(),
            fee_setter: config.fee_setter(),
            fees: *config.fees(),
        })
    }
}
