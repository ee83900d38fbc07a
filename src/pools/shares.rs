//! Fungible liquidity-provider share balances of one pool.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Address, Liquidity};
use crate::error::{AmmError, Result};
use crate::math::CheckedArithmetic;

/// Share balances keyed by holder, plus the total supply.
///
/// Invariant: `total` equals the sum of all balances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareLedger {
    balances: BTreeMap<Address, Liquidity>,
    total: Liquidity,
}

impl ShareLedger {
    /// Total supply.
    #[must_use]
    pub const fn total(&self) -> Liquidity {
        self.total
    }

    /// Balance of `holder`.
    #[must_use]
    pub fn balance_of(&self, holder: &Address) -> Liquidity {
        self.balances.get(holder).copied().unwrap_or_default()
    }

    /// Creates `amount` new shares for `to`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the supply would exceed `u128`.
    pub fn mint(&mut self, to: Address, amount: Liquidity) -> Result<()> {
        let total = self.total.safe_add(&amount)?;
        let balance = self.balance_of(&to).safe_add(&amount)?;
        self.total = total;
        self.balances.insert(to, balance);
        Ok(())
    }

    /// Destroys `amount` of `from`'s shares.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if `from` holds fewer shares.
    pub fn burn(&mut self, from: Address, amount: Liquidity) -> Result<()> {
        let balance = self.balance_of(&from).safe_sub(&amount)?;
        let total = self.total.safe_sub(&amount)?;
        self.total = total;
        self.set(from, balance);
        Ok(())
    }

    /// Moves shares between holders.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::TransferFailed`] if `from` holds fewer than
    /// `amount` shares.
    pub fn transfer(&mut self, from: Address, to: Address, amount: Liquidity) -> Result<()> {
        let remaining = self
            .balance_of(&from)
            .checked_sub(&amount)
            .ok_or(AmmError::TransferFailed("insufficient shares"))?;
        self.set(from, remaining);
        let credited = self.balance_of(&to).safe_add(&amount)?;
        self.set(to, credited);
        Ok(())
    }

    fn set(&mut self, holder: Address, balance: Liquidity) {
        if balance.is_zero() {
            self.balances.remove(&holder);
        } else {
            self.balances.insert(holder, balance);
        }
    }
}
