//! Hash-map backed [`AssetLedger`] and [`NativeWrapper`].

use std::collections::HashMap;

use crate::domain::{Address, Amount};
use crate::error::{AmmError, Result};
use crate::math::CheckedArithmetic;
use crate::traits::{AssetLedger, NativeWrapper};

/// In-memory balances of every asset plus the native asset.
///
/// The ledger is the whole of the exchange's external world in tests and
/// simulations.  It is `Clone`, which is what lets the router checkpoint and
/// restore it around each call.
///
/// An allowance of [`Amount::MAX`] is treated as unlimited and is never
/// decremented.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Address, Amount};
/// use pairswap::ledger::InMemoryLedger;
/// use pairswap::traits::AssetLedger;
///
/// let weth = Address::from_low_u64(0xe7);
/// let usdc = Address::from_low_u64(0x05);
/// let alice = Address::from_low_u64(0xa1);
///
/// let mut ledger = InMemoryLedger::new(weth);
/// ledger.mint(usdc, alice, Amount::new(100));
/// assert_eq!(ledger.balance_of(usdc, alice), Amount::new(100));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryLedger {
    wrapped_native: Address,
    balances: HashMap<(Address, Address), Amount>,
    allowances: HashMap<(Address, Address, Address), Amount>,
    native: HashMap<Address, Amount>,
}

impl InMemoryLedger {
    /// Empty ledger whose wrapped native asset is `wrapped_native`.
    #[must_use]
    pub fn new(wrapped_native: Address) -> Self {
        Self {
            wrapped_native,
            ..Self::default()
        }
    }

    /// Credits `amount` of `asset` to `holder` out of thin air.
    ///
    /// Saturates at [`Amount::MAX`]; meant for test setup only.
    pub fn mint(&mut self, asset: Address, holder: Address, amount: Amount) {
        let entry = self.balances.entry((asset, holder)).or_default();
        *entry = entry.checked_add(&amount).unwrap_or(Amount::MAX);
    }

    /// Credits native value to `holder` out of thin air.
    pub fn mint_native(&mut self, holder: Address, amount: Amount) {
        let entry = self.native.entry(holder).or_default();
        *entry = entry.checked_add(&amount).unwrap_or(Amount::MAX);
    }

    /// Sets `spender`'s allowance over `owner`'s `asset`.
    pub fn approve(&mut self, asset: Address, owner: Address, spender: Address, amount: Amount) {
        self.allowances.insert((asset, owner, spender), amount);
    }

    /// Remaining allowance of `spender` over `owner`'s `asset`.
    #[must_use]
    pub fn allowance(&self, asset: Address, owner: Address, spender: Address) -> Amount {
        self.allowances
            .get(&(asset, owner, spender))
            .copied()
            .unwrap_or_default()
    }

    fn debit(&mut self, asset: Address, holder: Address, amount: Amount) -> Result<()> {
        let balance = self.balance_of(asset, holder);
        let rest = balance
            .checked_sub(&amount)
            .ok_or(AmmError::TransferFailed("insufficient balance"))?;
        self.balances.insert((asset, holder), rest);
        Ok(())
    }

    fn credit(&mut self, asset: Address, holder: Address, amount: Amount) -> Result<()> {
        let balance = self.balance_of(asset, holder);
        self.balances.insert((asset, holder), balance.safe_add(&amount)?);
        Ok(())
    }

    fn debit_native(&mut self, holder: Address, amount: Amount) -> Result<()> {
        let rest = self
            .native_balance_of(holder)
            .checked_sub(&amount)
            .ok_or(AmmError::TransferFailed("insufficient native balance"))?;
        self.native.insert(holder, rest);
        Ok(())
    }

    fn credit_native(&mut self, holder: Address, amount: Amount) -> Result<()> {
        let balance = self.native_balance_of(holder);
        self.native.insert(holder, balance.safe_add(&amount)?);
        Ok(())
    }
}

impl AssetLedger for InMemoryLedger {
    fn balance_of(&self, asset: Address, holder: Address) -> Amount {
        self.balances
            .get(&(asset, holder))
            .copied()
            .unwrap_or_default()
    }

    fn transfer(
        &mut self,
        asset: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<()> {
        self.debit(asset, from, amount)?;
        self.credit(asset, to, amount)
    }

    fn transfer_from(
        &mut self,
        asset: Address,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<()> {
        let allowed = self.allowance(asset, from, spender);
        if allowed == Amount::MAX {
            return self.transfer(asset, from, to, amount);
        }
        let rest = allowed
            .checked_sub(&amount)
            .ok_or(AmmError::TransferFailed("insufficient allowance"))?;
        self.transfer(asset, from, to, amount)?;
        self.allowances.insert((asset, from, spender), rest);
        Ok(())
    }
}

impl NativeWrapper for InMemoryLedger {
    fn wrapped_asset(&self) -> Address {
        self.wrapped_native
    }

    fn native_balance_of(&self, holder: Address) -> Amount {
        self.native.get(&holder).copied().unwrap_or_default()
    }

    fn transfer_native(&mut self, from: Address, to: Address, amount: Amount) -> Result<()> {
        self.debit_native(from, amount)?;
        self.credit_native(to, amount)
    }

    fn deposit(&mut self, holder: Address, amount: Amount) -> Result<()> {
        self.debit_native(holder, amount)?;
        self.credit(self.wrapped_native, holder, amount)
    }

    fn withdraw(&mut self, holder: Address, amount: Amount) -> Result<()> {
        self.debit(self.wrapped_native, holder, amount)?;
        self.credit_native(holder, amount)
    }
}
