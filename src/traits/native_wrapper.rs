//! Native-asset custody and 1:1 wrapping.

use crate::domain::{Address, Amount};
use crate::error::Result;

/// The chain's native asset and its fungible wrapped form.
///
/// Pools only ever hold the wrapped asset.  The router converts at the
/// edges: native value attached to a call is [`deposit`](Self::deposit)ed
/// into the wrapped asset before it enters a pool, and wrapped output is
/// [`withdraw`](Self::withdraw)n back to native before it leaves.
pub trait NativeWrapper {
    /// Asset id of the wrapped native asset.
    fn wrapped_asset(&self) -> Address;

    /// Native balance of `holder`.
    fn native_balance_of(&self, holder: Address) -> Amount;

    /// Moves native value between accounts.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::TransferFailed`](crate::error::AmmError::TransferFailed)
    /// if `from` cannot cover `amount`.
    fn transfer_native(&mut self, from: Address, to: Address, amount: Amount) -> Result<()>;

    /// Converts `amount` of `holder`'s native balance into the wrapped asset.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::TransferFailed`](crate::error::AmmError::TransferFailed)
    /// if the native balance is insufficient.
    fn deposit(&mut self, holder: Address, amount: Amount) -> Result<()>;

    /// Converts `amount` of `holder`'s wrapped balance back to native.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::TransferFailed`](crate::error::AmmError::TransferFailed)
    /// if the wrapped balance is insufficient.
    fn withdraw(&mut self, holder: Address, amount: Amount) -> Result<()>;
}
