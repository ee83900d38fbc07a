//! Exact-in and exact-out swaps, with native variants on either end.
//!
//! | Operation | Fixed | Bound |
//! |-----------|-------|-------|
//! | `swap_exact_tokens_for_tokens` | input | `amount_out_min` |
//! | `swap_tokens_for_exact_tokens` | output | `amount_in_max` |
//! | `swap_exact_native_for_tokens` | input (`ctx.value`) | `amount_out_min` |
//! | `swap_tokens_for_exact_native` | output | `amount_in_max` |
//! | `swap_exact_tokens_for_native` | input | `amount_out_min` |
//! | `swap_native_for_exact_tokens` | output | `ctx.value` |
//!
//! Every variant returns the amount at each hop of the path.

use super::exchange_router::{Router, swap_along};
use super::quote::{get_amounts_in, get_amounts_out};
use super::state::{ExchangeState, atomically};
use crate::domain::{Address, Amount, SwapPath, TxContext};
use crate::error::{AmmError, Result};
use crate::factory::pool_address;
use crate::traits::{AssetLedger, NativeWrapper};

fn last(amounts: &[Amount]) -> Amount {
    amounts.last().copied().unwrap_or_default()
}

fn first(amounts: &[Amount]) -> Amount {
    amounts.first().copied().unwrap_or_default()
}

impl Router {
    /// Sells exactly `amount_in` of the path's first asset.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] past the deadline.
    /// - [`AmmError::PairNotFound`] if a hop has no pool.
    /// - [`AmmError::InsufficientOutputAmount`] if the output falls below
    ///   `amount_out_min`.
    /// - [`AmmError::TransferFailed`] if the caller cannot pay.
    #[allow(clippy::too_many_arguments)]
    pub fn swap_exact_tokens_for_tokens<L>(
        &self,
        state: &mut ExchangeState<L>,
        ctx: &TxContext,
        amount_in: Amount,
        amount_out_min: Amount,
        path: &SwapPath,
        to: Address,
        deadline: u64,
    ) -> Result<Vec<Amount>>
    where
        L: AssetLedger + NativeWrapper + Clone,
    {
        atomically(state, |state| {
            Self::ensure_deadline(ctx, deadline)?;
            let amounts = get_amounts_out(&state.registry, amount_in, path)?;
            if last(&amounts) < amount_out_min {
                return Err(AmmError::InsufficientOutputAmount);
            }
            self.pull_into_first_pool(&mut state.ledger, ctx, path, first(&amounts))?;
            swap_along(state, &amounts, path, to, ctx.now)?;
            tracing::debug!(sender = %ctx.sender, %to, hops = path.len(), "exact-in swap");
            Ok(amounts)
        })
    }

    /// Buys exactly `amount_out` of the path's last asset.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] past the deadline.
    /// - [`AmmError::PairNotFound`] if a hop has no pool.
    /// - [`AmmError::ExcessiveInputAmount`] if the input exceeds
    ///   `amount_in_max`.
    /// - [`AmmError::TransferFailed`] if the caller cannot pay.
    #[allow(clippy::too_many_arguments)]
    pub fn swap_tokens_for_exact_tokens<L>(
        &self,
        state: &mut ExchangeState<L>,
        ctx: &TxContext,
        amount_out: Amount,
        amount_in_max: Amount,
        path: &SwapPath,
        to: Address,
        deadline: u64,
    ) -> Result<Vec<Amount>>
    where
        L: AssetLedger + NativeWrapper + Clone,
    {
        atomically(state, |state| {
            Self::ensure_deadline(ctx, deadline)?;
            let amounts = get_amounts_in(&state.registry, amount_out, path)?;
            if first(&amounts) > amount_in_max {
                return Err(AmmError::ExcessiveInputAmount);
            }
            self.pull_into_first_pool(&mut state.ledger, ctx, path, first(&amounts))?;
            swap_along(state, &amounts, path, to, ctx.now)?;
            tracing::debug!(sender = %ctx.sender, %to, hops = path.len(), "exact-out swap");
            Ok(amounts)
        })
    }

    /// Sells all native value attached to `ctx` along a path starting at
    /// the wrapped native asset.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPath`] if the path does not start with the
    ///   wrapped native asset.
    /// - Otherwise as [`swap_exact_tokens_for_tokens`](Self::swap_exact_tokens_for_tokens).
    pub fn swap_exact_native_for_tokens<L>(
        &self,
        state: &mut ExchangeState<L>,
        ctx: &TxContext,
        amount_out_min: Amount,
        path: &SwapPath,
        to: Address,
        deadline: u64,
    ) -> Result<Vec<Amount>>
    where
        L: AssetLedger + NativeWrapper + Clone,
    {
        atomically(state, |state| {
            Self::ensure_deadline(ctx, deadline)?;
            self.ensure_wrapper(&state.ledger)?;
            self.ensure_starts_native(path)?;
            let amounts = get_amounts_out(&state.registry, ctx.value, path)?;
            if last(&amounts) < amount_out_min {
                return Err(AmmError::InsufficientOutputAmount);
            }
            let pool = pool_address(path.first(), path.hops()[1])?;
            self.wrap_into(&mut state.ledger, ctx, first(&amounts), pool)?;
            swap_along(state, &amounts, path, to, ctx.now)?;
            tracing::debug!(sender = %ctx.sender, %to, hops = path.len(), "exact native-in swap");
            Ok(amounts)
        })
    }

    /// Buys exactly `amount_out` of native value along a path ending at the
    /// wrapped native asset; the router unwraps and forwards it to `to`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPath`] if the path does not end with the
    ///   wrapped native asset.
    /// - Otherwise as [`swap_tokens_for_exact_tokens`](Self::swap_tokens_for_exact_tokens).
    #[allow(clippy::too_many_arguments)]
    pub fn swap_tokens_for_exact_native<L>(
        &self,
        state: &mut ExchangeState<L>,
        ctx: &TxContext,
        amount_out: Amount,
        amount_in_max: Amount,
        path: &SwapPath,
        to: Address,
        deadline: u64,
    ) -> Result<Vec<Amount>>
    where
        L: AssetLedger + NativeWrapper + Clone,
    {
        atomically(state, |state| {
            Self::ensure_deadline(ctx, deadline)?;
            self.ensure_wrapper(&state.ledger)?;
            self.ensure_ends_native(path)?;
            let amounts = get_amounts_in(&state.registry, amount_out, path)?;
            if first(&amounts) > amount_in_max {
                return Err(AmmError::ExcessiveInputAmount);
            }
            self.pull_into_first_pool(&mut state.ledger, ctx, path, first(&amounts))?;
            swap_along(state, &amounts, path, self.address(), ctx.now)?;
            self.unwrap_to(&mut state.ledger, last(&amounts), to)?;
            tracing::debug!(sender = %ctx.sender, %to, hops = path.len(), "exact native-out swap");
            Ok(amounts)
        })
    }

    /// Sells exactly `amount_in` along a path ending at the wrapped native
    /// asset; the router unwraps the output and forwards it to `to`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPath`] if the path does not end with the
    ///   wrapped native asset.
    /// - Otherwise as [`swap_exact_tokens_for_tokens`](Self::swap_exact_tokens_for_tokens).
    #[allow(clippy::too_many_arguments)]
    pub fn swap_exact_tokens_for_native<L>(
        &self,
        state: &mut ExchangeState<L>,
        ctx: &TxContext,
        amount_in: Amount,
        amount_out_min: Amount,
        path: &SwapPath,
        to: Address,
        deadline: u64,
    ) -> Result<Vec<Amount>>
    where
        L: AssetLedger + NativeWrapper + Clone,
    {
        atomically(state, |state| {
            Self::ensure_deadline(ctx, deadline)?;
            self.ensure_wrapper(&state.ledger)?;
            self.ensure_ends_native(path)?;
            let amounts = get_amounts_out(&state.registry, amount_in, path)?;
            if last(&amounts) < amount_out_min {
                return Err(AmmError::InsufficientOutputAmount);
            }
            self.pull_into_first_pool(&mut state.ledger, ctx, path, first(&amounts))?;
            swap_along(state, &amounts, path, self.address(), ctx.now)?;
            self.unwrap_to(&mut state.ledger, last(&amounts), to)?;
            tracing::debug!(sender = %ctx.sender, %to, hops = path.len(), "native-out swap");
            Ok(amounts)
        })
    }

    /// Buys exactly `amount_out` with native value attached to `ctx`,
    /// refunding whatever the route did not need.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPath`] if the path does not start with the
    ///   wrapped native asset.
    /// - [`AmmError::ExcessiveInputAmount`] if the required input exceeds
    ///   `ctx.value`.
    /// - Otherwise as [`swap_tokens_for_exact_tokens`](Self::swap_tokens_for_exact_tokens).
    pub fn swap_native_for_exact_tokens<L>(
        &self,
        state: &mut ExchangeState<L>,
        ctx: &TxContext,
        amount_out: Amount,
        path: &SwapPath,
        to: Address,
        deadline: u64,
    ) -> Result<Vec<Amount>>
    where
        L: AssetLedger + NativeWrapper + Clone,
    {
        atomically(state, |state| {
            Self::ensure_deadline(ctx, deadline)?;
            self.ensure_wrapper(&state.ledger)?;
            self.ensure_starts_native(path)?;
            let amounts = get_amounts_in(&state.registry, amount_out, path)?;
            let amount_in = first(&amounts);
            if amount_in > ctx.value {
                return Err(AmmError::ExcessiveInputAmount);
            }
            let pool = pool_address(path.first(), path.hops()[1])?;
            self.wrap_into(&mut state.ledger, ctx, amount_in, pool)?;
            swap_along(state, &amounts, path, to, ctx.now)?;
            self.refund_native(&mut state.ledger, ctx, amount_in)?;
            tracing::debug!(sender = %ctx.sender, %to, hops = path.len(), %amount_in, "native-in exact-out swap");
            Ok(amounts)
        })
    }
}
