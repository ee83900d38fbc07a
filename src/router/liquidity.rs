//! Liquidity add/remove through the router.

use serde::{Deserialize, Serialize};

use super::exchange_router::{Router, optimal_amounts};
use super::state::{ExchangeState, atomically};
use crate::config::FeeConfig;
use crate::domain::{Address, Amount, Liquidity, TxContext};
use crate::error::{AmmError, Result};
use crate::math::CheckedArithmetic;
use crate::traits::{AssetLedger, NativeWrapper};

/// Deposit of two assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddLiquidity {
    /// First asset, in the caller's order.
    pub asset_x: Address,
    /// Second asset.
    pub asset_y: Address,
    /// Most of `asset_x` the caller is willing to deposit.
    pub amount_x_desired: Amount,
    /// Most of `asset_y` the caller is willing to deposit.
    pub amount_y_desired: Amount,
    /// Least of `asset_x` the caller accepts to deposit.
    pub amount_x_min: Amount,
    /// Least of `asset_y` the caller accepts to deposit.
    pub amount_y_min: Amount,
    /// Receiver of the minted shares.
    pub to: Address,
    /// Last accepted `now`.
    pub deadline: u64,
}

/// Deposit of an asset against native value attached to the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddLiquidityNative {
    /// The non-native asset.
    pub asset: Address,
    /// Most of `asset` the caller is willing to deposit.
    pub amount_desired: Amount,
    /// Least of `asset` the caller accepts to deposit.
    pub amount_min: Amount,
    /// Least native value the caller accepts to deposit.
    pub native_min: Amount,
    /// Receiver of the minted shares.
    pub to: Address,
    /// Last accepted `now`.
    pub deadline: u64,
}

/// Redemption of shares for two assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveLiquidity {
    /// First asset, in the caller's order.
    pub asset_x: Address,
    /// Second asset.
    pub asset_y: Address,
    /// Shares to redeem.
    pub shares: Liquidity,
    /// Least of `asset_x` the caller accepts.
    pub amount_x_min: Amount,
    /// Least of `asset_y` the caller accepts.
    pub amount_y_min: Amount,
    /// Receiver of both assets.
    pub to: Address,
    /// Last accepted `now`.
    pub deadline: u64,
}

/// Redemption of shares for an asset and native value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveLiquidityNative {
    /// The non-native asset.
    pub asset: Address,
    /// Shares to redeem.
    pub shares: Liquidity,
    /// Least of `asset` the caller accepts.
    pub amount_min: Amount,
    /// Least native value the caller accepts.
    pub native_min: Amount,
    /// Receiver of the asset and the native value.
    pub to: Address,
    /// Last accepted `now`.
    pub deadline: u64,
}

impl Router {
    /// Deposits both assets at the pool's current ratio and mints shares
    /// to `params.to`, creating the pool on first use.
    ///
    /// Returns the amounts taken from the caller (oriented as `x`, `y`)
    /// and the shares minted.  When a liquidity fee and a fee recipient
    /// are configured, half the fee rate of each amount goes to the
    /// recipient instead of the pool; the caller still pays exactly the
    /// returned amounts.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] past the deadline.
    /// - [`AmmError::InsufficientXAmount`] / [`AmmError::InsufficientYAmount`]
    ///   if the ratio pushes an amount below its minimum.
    /// - [`AmmError::TransferFailed`] if the caller's balance or allowance
    ///   to the router is short.
    /// - Any pool [`mint`](crate::pools::PairPool::mint) error.
    pub fn add_liquidity<L>(
        &self,
        state: &mut ExchangeState<L>,
        ctx: &TxContext,
        params: &AddLiquidity,
    ) -> Result<(Amount, Amount, Liquidity)>
    where
        L: AssetLedger + NativeWrapper + Clone,
    {
        atomically(state, |state| {
            Self::ensure_deadline(ctx, params.deadline)?;
            let (pool, amount_x, amount_y) = optimal_amounts(
                &mut state.registry,
                params.asset_x,
                params.asset_y,
                params.amount_x_desired,
                params.amount_y_desired,
                params.amount_x_min,
                params.amount_y_min,
            )?;
            let fees = *state.registry.fee_config();
            let fee_x = fees.liquidity_fee_on(amount_x)?;
            let fee_y = fees.liquidity_fee_on(amount_y)?;

            let ExchangeState { registry, ledger } = state;
            ledger.transfer_from(
                params.asset_x,
                self.address(),
                ctx.sender,
                pool,
                amount_x.safe_sub(&fee_x)?,
            )?;
            ledger.transfer_from(
                params.asset_y,
                self.address(),
                ctx.sender,
                pool,
                amount_y.safe_sub(&fee_y)?,
            )?;
            let shares = registry
                .pool_mut(&pool)
                .ok_or(AmmError::PairNotFound)?
                .mint(&*ledger, params.to, ctx.now)?;
            self.collect_from_sender(&mut *ledger, &fees, ctx, params.asset_x, fee_x)?;
            self.collect_from_sender(ledger, &fees, ctx, params.asset_y, fee_y)?;

            tracing::debug!(
                %pool,
                sender = %ctx.sender,
                %amount_x,
                %amount_y,
                %shares,
                "liquidity added"
            );
            Ok((amount_x, amount_y, shares))
        })
    }

    /// Deposits `params.asset` against the native value attached to `ctx`.
    ///
    /// The used native amount is wrapped before it enters the pool and the
    /// rest is refunded.  The liquidity fee on the native side is paid in
    /// the wrapped asset.
    ///
    /// Returns `(asset amount, native amount, shares)`.
    ///
    /// # Errors
    ///
    /// As [`add_liquidity`](Self::add_liquidity), with `native_min`
    /// reported as the `y` side.  [`AmmError::TransferFailed`] if the
    /// caller cannot cover `ctx.value`.
    pub fn add_liquidity_native<L>(
        &self,
        state: &mut ExchangeState<L>,
        ctx: &TxContext,
        params: &AddLiquidityNative,
    ) -> Result<(Amount, Amount, Liquidity)>
    where
        L: AssetLedger + NativeWrapper + Clone,
    {
        atomically(state, |state| {
            Self::ensure_deadline(ctx, params.deadline)?;
            self.ensure_wrapper(&state.ledger)?;
            let (pool, amount_token, amount_native) = optimal_amounts(
                &mut state.registry,
                params.asset,
                self.wrapped_native(),
                params.amount_desired,
                ctx.value,
                params.amount_min,
                params.native_min,
            )?;
            let fees = *state.registry.fee_config();
            let fee_token = fees.liquidity_fee_on(amount_token)?;
            let fee_native = fees.liquidity_fee_on(amount_native)?;

            let ExchangeState { registry, ledger } = state;
            ledger.transfer_from(
                params.asset,
                self.address(),
                ctx.sender,
                pool,
                amount_token.safe_sub(&fee_token)?,
            )?;
            ledger.transfer_native(ctx.sender, self.address(), ctx.value)?;
            ledger.deposit(self.address(), amount_native)?;
            ledger.transfer(
                self.wrapped_native(),
                self.address(),
                pool,
                amount_native.safe_sub(&fee_native)?,
            )?;
            let shares = registry
                .pool_mut(&pool)
                .ok_or(AmmError::PairNotFound)?
                .mint(&*ledger, params.to, ctx.now)?;
            self.collect_from_sender(&mut *ledger, &fees, ctx, params.asset, fee_token)?;
            if let Some(recipient) = fees.fee_recipient.filter(|_| !fee_native.is_zero()) {
                ledger.transfer(self.wrapped_native(), self.address(), recipient, fee_native)?;
            }
            self.refund_native(ledger, ctx, amount_native)?;

            tracing::debug!(
                %pool,
                sender = %ctx.sender,
                %amount_token,
                %amount_native,
                %shares,
                "native liquidity added"
            );
            Ok((amount_token, amount_native, shares))
        })
    }

    /// Redeems `params.shares` of the caller for both assets, paid to
    /// `params.to`.
    ///
    /// Returns the payouts oriented as `x`, `y`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] past the deadline.
    /// - [`AmmError::PairNotFound`] if the pool does not exist.
    /// - [`AmmError::TransferFailed`] if the caller holds too few shares.
    /// - [`AmmError::InsufficientXAmount`] / [`AmmError::InsufficientYAmount`]
    ///   below the minimums.
    /// - Any pool [`burn`](crate::pools::PairPool::burn) error.
    pub fn remove_liquidity<L>(
        &self,
        state: &mut ExchangeState<L>,
        ctx: &TxContext,
        params: &RemoveLiquidity,
    ) -> Result<(Amount, Amount)>
    where
        L: AssetLedger + NativeWrapper + Clone,
    {
        atomically(state, |state| {
            Self::ensure_deadline(ctx, params.deadline)?;
            let (amount_x, amount_y) = Self::redeem(
                state,
                ctx,
                params.asset_x,
                params.asset_y,
                params.shares,
                params.to,
            )?;
            if amount_x < params.amount_x_min {
                return Err(AmmError::InsufficientXAmount);
            }
            if amount_y < params.amount_y_min {
                return Err(AmmError::InsufficientYAmount);
            }
            tracing::debug!(
                sender = %ctx.sender,
                shares = %params.shares,
                %amount_x,
                %amount_y,
                "liquidity removed"
            );
            Ok((amount_x, amount_y))
        })
    }

    /// Redeems shares of the asset/wrapped-native pool, paying the asset
    /// and unwrapped native value to `params.to`.
    ///
    /// Returns `(asset amount, native amount)`.
    ///
    /// # Errors
    ///
    /// As [`remove_liquidity`](Self::remove_liquidity), with `native_min`
    /// reported as the `y` side.
    pub fn remove_liquidity_native<L>(
        &self,
        state: &mut ExchangeState<L>,
        ctx: &TxContext,
        params: &RemoveLiquidityNative,
    ) -> Result<(Amount, Amount)>
    where
        L: AssetLedger + NativeWrapper + Clone,
    {
        atomically(state, |state| {
            Self::ensure_deadline(ctx, params.deadline)?;
            self.ensure_wrapper(&state.ledger)?;
            let (amount_token, amount_native) = Self::redeem(
                state,
                ctx,
                params.asset,
                self.wrapped_native(),
                params.shares,
                self.address(),
            )?;
            if amount_token < params.amount_min {
                return Err(AmmError::InsufficientXAmount);
            }
            if amount_native < params.native_min {
                return Err(AmmError::InsufficientYAmount);
            }
            state
                .ledger
                .transfer(params.asset, self.address(), params.to, amount_token)?;
            self.unwrap_to(&mut state.ledger, amount_native, params.to)?;
            tracing::debug!(
                sender = %ctx.sender,
                shares = %params.shares,
                %amount_token,
                %amount_native,
                "native liquidity removed"
            );
            Ok((amount_token, amount_native))
        })
    }

    /// Moves the caller's shares into the pool's custody, burns them to
    /// `to` and orients the payouts as `(x, y)`.
    fn redeem<L: AssetLedger>(
        state: &mut ExchangeState<L>,
        ctx: &TxContext,
        asset_x: Address,
        asset_y: Address,
        shares: Liquidity,
        to: Address,
    ) -> Result<(Amount, Amount)> {
        let ExchangeState { registry, ledger } = state;
        let address = registry
            .get_pair(asset_x, asset_y)
            .ok_or(AmmError::PairNotFound)?;
        let pool = registry
            .pool_mut(&address)
            .ok_or(AmmError::PairNotFound)?;
        pool.transfer_shares(ctx.sender, address, shares)?;
        let (amount_a, amount_b) = pool.burn(&mut *ledger, to, ctx.now)?;
        if pool.pair().is_first(&asset_x) {
            Ok((amount_a, amount_b))
        } else {
            Ok((amount_b, amount_a))
        }
    }

    /// Pays a liquidity fee straight from the caller to the fee recipient.
    fn collect_from_sender<L: AssetLedger + ?Sized>(
        &self,
        ledger: &mut L,
        fees: &FeeConfig,
        ctx: &TxContext,
        asset: Address,
        fee: Amount,
    ) -> Result<()> {
        match fees.fee_recipient {
            Some(recipient) if !fee.is_zero() => {
                ledger.transfer_from(asset, self.address(), ctx.sender, recipient, fee)
            }
            _ => Ok(()),
        }
    }
}
