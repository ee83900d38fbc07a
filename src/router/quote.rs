//! Pure pricing functions used by the router.
//!
//! Single-hop functions take reserves directly; multi-hop functions read
//! them from the registry along a [`SwapPath`].  With `D = 1_000_000` and
//! swap fee `f`:
//!
//! ```text
//! amount_out = in · (D − f) · R_out / (R_in · D + in · (D − f))          (floor)
//! amount_in  = R_in · out · D / ((R_out − out) · (D − f))                 (ceil)
//! ```
//!
//! Both are the tightest amounts the pool's fee-adjusted product check
//! accepts.

use alloy_primitives::U512;

use crate::domain::{Address, Amount, AssetPair, FEE_DENOMINATOR, FeeRate, Rounding, SwapPath};
use crate::error::{AmmError, Result};
use crate::factory::PoolRegistry;
use crate::math::mul_div;

/// Canonical order of two assets.
///
/// # Errors
///
/// - [`AmmError::IdenticalAssets`] if `x == y`.
/// - [`AmmError::ZeroAddress`] if either is zero.
pub fn sort_assets(x: Address, y: Address) -> Result<(Address, Address)> {
    AssetPair::new(x, y).map(|pair| (pair.first(), pair.second()))
}

/// Amount of Y equivalent to `amount_x` at the current reserve ratio,
/// rounded down.
///
/// # Errors
///
/// - [`AmmError::InsufficientAmount`] if `amount_x` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
pub fn quote(amount_x: Amount, reserve_x: Amount, reserve_y: Amount) -> Result<Amount> {
    if amount_x.is_zero() {
        return Err(AmmError::InsufficientAmount);
    }
    if reserve_x.is_zero() || reserve_y.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    mul_div(amount_x.get(), reserve_y.get(), reserve_x.get(), Rounding::Down).map(Amount::new)
}

/// Largest output a pool pays for `amount_in`.
///
/// # Errors
///
/// - [`AmmError::InsufficientInputAmount`] if `amount_in` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
pub fn get_amount_out(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeRate,
) -> Result<Amount> {
    if amount_in.is_zero() {
        return Err(AmmError::InsufficientInputAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    let in_with_fee = U512::from(amount_in.get()) * U512::from(fee.complement());
    let numerator = in_with_fee * U512::from(reserve_out.get());
    let denominator = U512::from(reserve_in.get()) * U512::from(FEE_DENOMINATOR) + in_with_fee;
    narrow(numerator / denominator, "amount out")
}

/// Smallest input a pool accepts for `amount_out`.
///
/// # Errors
///
/// - [`AmmError::InsufficientOutputAmount`] if `amount_out` is zero.
/// - [`AmmError::InsufficientLiquidity`] if a reserve is zero or
///   `amount_out` is not below `reserve_out`.
/// - [`AmmError::InvalidFee`] if the fee is 100% or more.
/// - [`AmmError::Overflow`] if the input does not fit in `u128`.
pub fn get_amount_in(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeRate,
) -> Result<Amount> {
    if amount_out.is_zero() {
        return Err(AmmError::InsufficientOutputAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() || amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }
    if fee.complement() == 0 {
        return Err(AmmError::InvalidFee("no input buys an exact output at a 100% fee"));
    }
    let numerator = U512::from(reserve_in.get())
        * U512::from(amount_out.get())
        * U512::from(FEE_DENOMINATOR);
    let denominator =
        U512::from(reserve_out.get() - amount_out.get()) * U512::from(fee.complement());
    let quotient = numerator / denominator;
    let amount_in = if (numerator % denominator).is_zero() {
        quotient
    } else {
        quotient + U512::from(1u8)
    };
    narrow(amount_in, "amount in")
}

/// Amounts along `path` for an exact input; element 0 is `amount_in`.
///
/// # Errors
///
/// - [`AmmError::PairNotFound`] if a hop has no pool.
/// - Any [`get_amount_out`] error.
pub fn get_amounts_out(
    registry: &PoolRegistry,
    amount_in: Amount,
    path: &SwapPath,
) -> Result<Vec<Amount>> {
    let fee = registry.fee_config().swap_fee;
    let mut amounts = Vec::with_capacity(path.len());
    amounts.push(amount_in);
    let mut current = amount_in;
    for (input, output) in path.legs() {
        let pool = registry
            .pool_for(input, output)
            .ok_or(AmmError::PairNotFound)?;
        let (reserve_in, reserve_out) = pool.reserves_for(&input)?;
        current = get_amount_out(current, reserve_in, reserve_out, fee)?;
        amounts.push(current);
    }
    Ok(amounts)
}

/// Amounts along `path` for an exact output; the last element is
/// `amount_out`.
///
/// # Errors
///
/// - [`AmmError::PairNotFound`] if a hop has no pool.
/// - Any [`get_amount_in`] error.
pub fn get_amounts_in(
    registry: &PoolRegistry,
    amount_out: Amount,
    path: &SwapPath,
) -> Result<Vec<Amount>> {
    let fee = registry.fee_config().swap_fee;
    let hops = path.hops();
    let mut amounts = vec![Amount::ZERO; hops.len()];
    amounts[hops.len() - 1] = amount_out;
    for i in (1..hops.len()).rev() {
        let pool = registry
            .pool_for(hops[i - 1], hops[i])
            .ok_or(AmmError::PairNotFound)?;
        let (reserve_in, reserve_out) = pool.reserves_for(&hops[i - 1])?;
        amounts[i - 1] = get_amount_in(amounts[i], reserve_in, reserve_out, fee)?;
    }
    Ok(amounts)
}

fn narrow(value: U512, what: &'static str) -> Result<Amount> {
    u128::try_from(value)
        .map(Amount::new)
        .map_err(|_| AmmError::Overflow(what))
}
