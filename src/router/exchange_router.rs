//! The router: entry point for every user-facing operation.

use super::quote::quote;
use super::state::ExchangeState;
use crate::domain::{Address, Amount, AssetPair, SwapPath, TxContext};
use crate::error::{AmmError, Result};
use crate::factory::{PoolRegistry, pool_address};
use crate::traits::{AssetLedger, NativeWrapper};

/// Stateless orchestrator over an [`ExchangeState`].
///
/// The router owns nothing but its own account (the spender callers approve
/// and the custody account for native conversions) and the id of the
/// wrapped native asset.  Every mutating call:
///
/// 1. rejects calls past their deadline with [`AmmError::Expired`];
/// 2. quotes against the current reserves;
/// 3. moves the caller's assets into the first pool;
/// 4. settles each pool in turn, handing the output straight to the next
///    pool's address;
/// 5. rolls the whole state back if any step fails.
///
/// Liquidity operations live in `liquidity.rs`, swaps in `swap.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Router {
    address: Address,
    wrapped_native: Address,
}

impl Router {
    /// A router acting from `address` and wrapping into `wrapped_native`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ZeroAddress`] if either id is the null sentinel.
    pub fn new(address: Address, wrapped_native: Address) -> Result<Self> {
        if address.is_zero() || wrapped_native.is_zero() {
            return Err(AmmError::ZeroAddress);
        }
        Ok(Self {
            address,
            wrapped_native,
        })
    }

    /// Account the router acts from.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Wrapped native asset id.
    #[must_use]
    pub const fn wrapped_native(&self) -> Address {
        self.wrapped_native
    }

    // -- shared steps -------------------------------------------------------

    pub(super) const fn ensure_deadline(ctx: &TxContext, deadline: u64) -> Result<()> {
        if ctx.now > deadline {
            return Err(AmmError::Expired);
        }
        Ok(())
    }

    pub(super) fn ensure_wrapper<L: NativeWrapper + ?Sized>(&self, ledger: &L) -> Result<()> {
        if ledger.wrapped_asset() == self.wrapped_native {
            Ok(())
        } else {
            Err(AmmError::InvalidConfiguration(
                "ledger wraps a different native asset",
            ))
        }
    }

    pub(super) fn ensure_starts_native(&self, path: &SwapPath) -> Result<()> {
        if path.first() == self.wrapped_native {
            Ok(())
        } else {
            Err(AmmError::InvalidPath("path must start with the wrapped native asset"))
        }
    }

    pub(super) fn ensure_ends_native(&self, path: &SwapPath) -> Result<()> {
        if path.last() == self.wrapped_native {
            Ok(())
        } else {
            Err(AmmError::InvalidPath("path must end with the wrapped native asset"))
        }
    }

    /// Takes `ctx.value` into custody, wraps `used` of it and sends the
    /// wrapped amount to `pool`.  The rest stays with the router until
    /// [`refund_native`](Self::refund_native).
    pub(super) fn wrap_into<L>(
        &self,
        ledger: &mut L,
        ctx: &TxContext,
        used: Amount,
        pool: Address,
    ) -> Result<()>
    where
        L: AssetLedger + NativeWrapper + ?Sized,
    {
        ledger.transfer_native(ctx.sender, self.address, ctx.value)?;
        ledger.deposit(self.address, used)?;
        ledger.transfer(self.wrapped_native, self.address, pool, used)
    }

    /// Returns whatever part of `ctx.value` was not used.
    pub(super) fn refund_native<L>(&self, ledger: &mut L, ctx: &TxContext, used: Amount) -> Result<()>
    where
        L: NativeWrapper + ?Sized,
    {
        let unused = ctx.value.saturating_sub(&used);
        if unused.is_zero() {
            return Ok(());
        }
        ledger.transfer_native(self.address, ctx.sender, unused)
    }

    /// Unwraps `amount` held by the router and pays it to `to` as native.
    pub(super) fn unwrap_to<L>(&self, ledger: &mut L, amount: Amount, to: Address) -> Result<()>
    where
        L: NativeWrapper + ?Sized,
    {
        ledger.withdraw(self.address, amount)?;
        ledger.transfer_native(self.address, to, amount)
    }

    /// Pulls `amount` of the path's first asset from the caller into the
    /// first pool.
    pub(super) fn pull_into_first_pool<L>(
        &self,
        ledger: &mut L,
        ctx: &TxContext,
        path: &SwapPath,
        amount: Amount,
    ) -> Result<()>
    where
        L: AssetLedger + ?Sized,
    {
        let (input, output) = (path.first(), path.hops()[1]);
        let pool = pool_address(input, output)?;
        ledger.transfer_from(input, self.address, ctx.sender, pool, amount)
    }
}

/// Amounts to deposit for `desired` amounts at the pool's current ratio,
/// creating the pool if it does not exist yet.
///
/// Returns the pool address and the amounts oriented as `(x, y)`.
#[allow(clippy::too_many_arguments)]
pub(super) fn optimal_amounts(
    registry: &mut PoolRegistry,
    asset_x: Address,
    asset_y: Address,
    x_desired: Amount,
    y_desired: Amount,
    x_min: Amount,
    y_min: Amount,
) -> Result<(Address, Amount, Amount)> {
    let address = match registry.get_pair(asset_x, asset_y) {
        Some(address) => address,
        None => registry.create_pair(asset_x, asset_y)?,
    };
    let pool = registry.pool(&address).ok_or(AmmError::PairNotFound)?;
    let (reserve_x, reserve_y) = pool.reserves_for(&asset_x)?;

    if reserve_x.is_zero() && reserve_y.is_zero() {
        return Ok((address, x_desired, y_desired));
    }
    let y_optimal = quote(x_desired, reserve_x, reserve_y)?;
    if y_optimal <= y_desired {
        if y_optimal < y_min {
            return Err(AmmError::InsufficientYAmount);
        }
        return Ok((address, x_desired, y_optimal));
    }
    let x_optimal = quote(y_desired, reserve_y, reserve_x)?;
    if x_optimal > x_desired || x_optimal < x_min {
        return Err(AmmError::InsufficientXAmount);
    }
    Ok((address, x_optimal, y_desired))
}

/// Settles every hop of `path`.  `amounts` holds the quoted amount at each
/// hop; the last pool pays `to`, every other pool pays the next pool.
pub(super) fn swap_along<L: AssetLedger>(
    state: &mut ExchangeState<L>,
    amounts: &[Amount],
    path: &SwapPath,
    to: Address,
    now: u64,
) -> Result<()> {
    let ExchangeState { registry, ledger } = state;
    let fees = *registry.fee_config();
    let hops = path.hops();

    for (i, (input, output)) in path.legs().enumerate() {
        let pair = AssetPair::new(input, output)?;
        let amount_out = amounts[i + 1];
        let (amount_a_out, amount_b_out) = if pair.is_first(&input) {
            (Amount::ZERO, amount_out)
        } else {
            (amount_out, Amount::ZERO)
        };
        let recipient = match hops.get(i + 2) {
            Some(next) => pool_address(output, *next)?,
            None => to,
        };
        let address = registry
            .get_pair(input, output)
            .ok_or(AmmError::PairNotFound)?;
        let pool = registry
            .pool_mut(&address)
            .ok_or(AmmError::PairNotFound)?;
        pool.swap(&mut *ledger, &fees, amount_a_out, amount_b_out, recipient, now)?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::ledger::InMemoryLedger;

    fn addr(n: u64) -> Address {
        Address::from_low_u64(n)
    }

    fn registry() -> PoolRegistry {
        let Ok(registry) = PoolRegistry::new(addr(0x60)) else {
            panic!("valid registry");
        };
        registry
    }

    #[test]
    fn new_rejects_zero_ids() {
        assert_eq!(Router::new(Address::ZERO, addr(1)), Err(AmmError::ZeroAddress));
        assert_eq!(Router::new(addr(1), Address::ZERO), Err(AmmError::ZeroAddress));
        let Ok(router) = Router::new(addr(0x40), addr(0xee)) else {
            panic!("valid router");
        };
        assert_eq!(router.address(), addr(0x40));
        assert_eq!(router.wrapped_native(), addr(0xee));
    }

    #[test]
    fn deadline_is_inclusive() {
        let ctx = TxContext::new(addr(1), 100);
        assert_eq!(Router::ensure_deadline(&ctx, 100), Ok(()));
        assert_eq!(Router::ensure_deadline(&ctx, 99), Err(AmmError::Expired));
    }

    #[test]
    fn native_endpoints_are_checked() {
        let Ok(router) = Router::new(addr(0x40), addr(0xee)) else {
            panic!("valid router");
        };
        let Ok(path) = SwapPath::new(vec![addr(0xee), addr(1)]) else {
            panic!("valid path");
        };
        assert!(router.ensure_starts_native(&path).is_ok());
        let Err(AmmError::InvalidPath(_)) = router.ensure_ends_native(&path) else {
            panic!("expected InvalidPath");
        };
        assert!(router.ensure_wrapper(&InMemoryLedger::new(addr(0xee))).is_ok());
        let Err(AmmError::InvalidConfiguration(_)) =
            router.ensure_wrapper(&InMemoryLedger::new(addr(0xef)))
        else {
            panic!("expected InvalidConfiguration");
        };
    }

    #[test]
    fn optimal_amounts_creates_missing_pool() {
        let mut r = registry();
        let Ok((pool, x, y)) = optimal_amounts(
            &mut r,
            addr(2),
            addr(1),
            Amount::new(10),
            Amount::new(20),
            Amount::ZERO,
            Amount::ZERO,
        ) else {
            panic!("fresh pool");
        };
        assert_eq!(r.get_pair(addr(1), addr(2)), Some(pool));
        assert_eq!((x, y), (Amount::new(10), Amount::new(20)));
    }
}
