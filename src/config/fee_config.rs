//! Global fee parameters shared by every pool.

use serde::{Deserialize, Serialize};

use crate::domain::{Address, Amount, FeeRate};
use crate::error::Result;

/// Swap fee, liquidity-provision fee and their optional recipient.
///
/// The registry owns the single authoritative copy.  Pools never store fees
/// of their own: each settlement receives the current `FeeConfig` by
/// reference, so a change made by the fee setter applies to every pool from
/// the next operation on.
///
/// # Fee destinations
///
/// | Fee | Recipient set | Recipient unset |
/// |-----|---------------|-----------------|
/// | swap | transferred out of the pool in the input asset | stays in the pool for liquidity providers |
/// | liquidity | withheld from the deposit, half per side | not charged |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FeeConfig {
    /// Fee charged on swap input.
    #[serde(default)]
    pub swap_fee: FeeRate,
    /// Fee charged on deposits made through the router.
    #[serde(default)]
    pub liquidity_fee: FeeRate,
    /// Destination of collected fees; `None` disables fee extraction.
    #[serde(default)]
    pub fee_recipient: Option<Address>,
}

impl FeeConfig {
    /// Builds a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`](crate::error::AmmError::InvalidFee)
    /// if either rate exceeds 100%.
    pub fn new(
        swap_fee: FeeRate,
        liquidity_fee: FeeRate,
        fee_recipient: Option<Address>,
    ) -> Result<Self> {
        let config = Self {
            swap_fee,
            liquidity_fee,
            fee_recipient,
        };
        config.validate()?;
        Ok(config)
    }

    /// A configuration that charges nothing.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            swap_fee: FeeRate::ZERO,
            liquidity_fee: FeeRate::ZERO,
            fee_recipient: None,
        }
    }

    /// Validates both rates.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`](crate::error::AmmError::InvalidFee)
    /// if either rate exceeds 100%.
    pub const fn validate(&self) -> Result<()> {
        if let Err(e) = self.swap_fee.ensure_valid("swap fee above 100%") {
            return Err(e);
        }
        self.liquidity_fee.ensure_valid("liquidity fee above 100%")
    }

    /// Recipient of the swap fee, if extraction is enabled.
    #[must_use]
    pub fn swap_fee_recipient(&self) -> Option<Address> {
        self.fee_recipient.filter(|_| !self.swap_fee.is_zero())
    }

    /// Per-side liquidity fee for a deposit of `amount`, or zero when no
    /// recipient is configured.
    ///
    /// # Errors
    ///
    /// Propagates the overflow error of [`FeeRate::apply_halved`].
    pub fn liquidity_fee_on(&self, amount: Amount) -> Result<Amount> {
        if self.fee_recipient.is_none() || self.liquidity_fee.is_zero() {
            return Ok(Amount::ZERO);
        }
        self.liquidity_fee.apply_halved(amount)
    }
}
