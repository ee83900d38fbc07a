//! Fungible asset transfers consumed by pools and the router.

use crate::domain::{Address, Amount};
use crate::error::Result;

/// Balances and transfers of every fungible asset the exchange touches.
///
/// Pools never keep their own notion of "how much did I receive": they
/// read [`balance_of`](Self::balance_of) for their own address and compare
/// it with their recorded reserves.  Implementations therefore must make a
/// successful transfer visible to the next `balance_of` call immediately.
///
/// Any `Err` is fatal to the enclosing operation; the router rolls the whole
/// call back.
///
/// # Implementors
///
/// - [`InMemoryLedger`](crate::ledger::InMemoryLedger)
pub trait AssetLedger {
    /// Returns `holder`'s balance of `asset`.
    fn balance_of(&self, asset: Address, holder: Address) -> Amount;

    /// Moves `amount` of `asset` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::TransferFailed`](crate::error::AmmError::TransferFailed)
    /// if `from` cannot cover the transfer.
    fn transfer(&mut self, asset: Address, from: Address, to: Address, amount: Amount)
    -> Result<()>;

    /// Moves `amount` of `asset` from `from` to `to` on the authority of
    /// `spender`, consuming `spender`'s allowance.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::TransferFailed`](crate::error::AmmError::TransferFailed)
    /// if the allowance or the balance is insufficient.
    fn transfer_from(
        &mut self,
        asset: Address,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<()>;
}
