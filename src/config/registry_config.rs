//! Construction parameters of a [`PoolRegistry`](crate::factory::PoolRegistry).

use serde::{Deserialize, Serialize};

use super::FeeConfig;
use crate::domain::Address;
use crate::error::{AmmError, Result};

/// Everything needed to stand up a registry: the governance account and the
/// initial fee schedule.
///
/// Deserializable so deployments can keep it in a JSON (or any serde)
/// document; addresses are `0x`-prefixed hex.
///
/// ```
/// use pairswap::config::RegistryConfig;
///
/// let json = r#"{
///     "fee_setter": "0x0000000000000000000000000000000000000000000000000000000000000001",
///     "fees": { "swap_fee": 3000, "liquidity_fee": 0, "fee_recipient": null }
/// }"#;
/// let config: RegistryConfig = serde_json::from_str(json).expect("well-formed");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    fee_setter: Address,
    #[serde(default)]
    fees: FeeConfig,
}

impl RegistryConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAddress`] if `fee_setter` is the null sentinel.
    /// - [`AmmError::InvalidFee`] if a rate exceeds 100%.
    pub fn new(fee_setter: Address, fees: FeeConfig) -> Result<Self> {
        let config = Self { fee_setter, fees };
        config.validate()?;
        Ok(config)
    }

    /// Fee-free configuration governed by `fee_setter`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ZeroAddress`] if `fee_setter` is the null
    /// sentinel.
    pub fn with_fee_setter(fee_setter: Address) -> Result<Self> {
        Self::new(fee_setter, FeeConfig::zero())
    }

    /// Validates every field.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn validate(&self) -> Result<()> {
        if self.fee_setter.is_zero() {
            return Err(AmmError::ZeroAddress);
        }
        self.fees.validate()
    }

    /// Governance account.
    #[must_use]
    pub const fn fee_setter(&self) -> Address {
        self.fee_setter
    }

    /// Initial fee schedule.
    #[must_use]
    pub const fn fees(&self) -> &FeeConfig {
        &self.fees
    }
}
