//! Wide-integer helpers for pricing, share math and the invariant check.
//!
//! Reserves are capped at 112 bits and fees are scaled by `1e6`, so
//! intermediate products exceed `u128` routinely.  Everything here widens to
//! [`U256`] (or [`U512`] for the invariant product) and narrows back with an
//! explicit overflow error.

use alloy_primitives::{U256, U512};

use crate::domain::Rounding;
use crate::error::{AmmError, Result};

/// Largest reserve a pool may hold: `2^112 − 1`.
pub const MAX_RESERVE: u128 = (1u128 << 112) - 1;

/// Computes `a · b / d` without intermediate overflow.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `d` is zero.
/// - [`AmmError::Overflow`] if the quotient does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Rounding;
/// use pairswap::math::mul_div;
///
/// assert_eq!(mul_div(u128::MAX, 2, 4, Rounding::Down), Ok(u128::MAX / 2));
/// assert_eq!(mul_div(10, 1, 3, Rounding::Up), Ok(4));
/// ```
pub fn mul_div(a: u128, b: u128, d: u128, rounding: Rounding) -> Result<u128> {
    if d == 0 {
        return Err(AmmError::DivisionByZero);
    }
    let q = div_u256(U256::from(a) * U256::from(b), U256::from(d), rounding)?;
    narrow(q, "mul_div result exceeds u128")
}

/// Divides two 256-bit values with explicit rounding.
///
/// # Errors
///
/// Returns [`AmmError::DivisionByZero`] if `denominator` is zero.
pub fn div_u256(numerator: U256, denominator: U256, rounding: Rounding) -> Result<U256> {
    if denominator.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    let quotient = numerator / denominator;
    if rounding.is_up() && !(numerator % denominator).is_zero() {
        // quotient < numerator whenever there is a remainder
        Ok(quotient + U256::from(1u8))
    } else {
        Ok(quotient)
    }
}

/// Narrows a 256-bit value to `u128`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] with `what` if the value is too large.
pub fn narrow(value: U256, what: &'static str) -> Result<u128> {
    u128::try_from(value).map_err(|_| AmmError::Overflow(what))
}

/// Integer square root rounded down (Newton's method).
#[must_use]
pub fn isqrt(n: U256) -> U256 {
    if n.is_zero() {
        return U256::ZERO;
    }
    let two = U256::from(2u8);
    let mut x = n;
    let mut y = n / two + n % two;
    while y < x {
        x = y;
        y = (x + n / x) / two;
    }
    x
}

/// Encodes `numerator / denominator` as an unsigned Q112.112 fixed-point
/// value.
///
/// Both arguments must be reserves (≤ [`MAX_RESERVE`]); the caller
/// guarantees `denominator != 0`.
///
/// # Errors
///
/// Returns [`AmmError::DivisionByZero`] if `denominator` is zero.
pub fn encode_uq112x112(numerator: u128, denominator: u128) -> Result<U256> {
    if denominator == 0 {
        return Err(AmmError::DivisionByZero);
    }
    Ok((U256::from(numerator) << 112usize) / U256::from(denominator))
}

/// Returns `true` if the fee-adjusted balances keep the product at least
/// `reserve_a · reserve_b · scale²`.
///
/// `adjusted_a` and `adjusted_b` are balances already multiplied by `scale`
/// with the fee portion of the input subtracted.
#[must_use]
pub fn product_holds(
    adjusted_a: U256,
    adjusted_b: U256,
    reserve_a: u128,
    reserve_b: u128,
    scale: u128,
) -> bool {
    let lhs = U512::from(adjusted_a) * U512::from(adjusted_b);
    let scale = U512::from(scale);
    let rhs = U512::from(reserve_a) * U512::from(reserve_b) * scale * scale;
    lhs >= rhs
}
