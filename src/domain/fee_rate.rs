//! Fee rates expressed in parts per million.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Rounding};
use crate::error::{AmmError, Result};
use crate::math::mul_div;

/// Denominator of every fee rate: `1_000_000` parts per million is 100%.
pub const FEE_DENOMINATOR: u32 = 1_000_000;

/// A fee rate in parts per million (1 ppm = 0.0001%).
///
/// `10_000` is 1%, `3_000` is the classic 0.3% swap fee and `10` is
/// 0.001%.  Any `u32` can be stored but only rates up to
/// [`FeeRate::MAX`] (100%) pass [`is_valid`](Self::is_valid); the registry
/// refuses to configure anything else.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, FeeRate, Rounding};
///
/// let one_percent = FeeRate::new(10_000);
/// let fee = one_percent.apply(Amount::new(1_000), Rounding::Down).expect("in range");
/// assert_eq!(fee, Amount::new(10));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FeeRate(u32);

impl FeeRate {
    /// No fee.
    pub const ZERO: Self = Self(0);

    /// 100%.
    pub const MAX: Self = Self(FEE_DENOMINATOR);

    /// Creates a rate from raw parts per million.
    #[must_use]
    pub const fn new(ppm: u32) -> Self {
        Self(ppm)
    }

    /// Returns the raw parts-per-million value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if no fee is charged.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the rate lies in `0..=100%`.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0 <= FEE_DENOMINATOR
    }

    /// Returns `FEE_DENOMINATOR − rate`, the share of an input that is
    /// priced after the fee.  Clamped at zero for out-of-range rates.
    #[must_use]
    pub const fn complement(&self) -> u32 {
        FEE_DENOMINATOR.saturating_sub(self.0)
    }

    /// Returns the rate as a percentage, e.g. `10_000` ppm → `1.0`.
    #[must_use]
    pub fn as_percent(&self) -> f64 {
        f64::from(self.0) / 10_000.0
    }

    /// Computes `amount · rate / 1_000_000` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result does not fit in 128
    /// bits, which only happens for rates above 100%.
    pub fn apply(&self, amount: Amount, rounding: Rounding) -> Result<Amount> {
        mul_div(
            amount.get(),
            u128::from(self.0),
            u128::from(FEE_DENOMINATOR),
            rounding,
        )
        .map(Amount::new)
    }

    /// Applies half the rate, `amount · ⌊rate / 2⌋ / 1_000_000`, rounded
    /// down.
    ///
    /// The liquidity-provision fee is charged this way on each of the two
    /// deposited assets.  The rate is halved before it is applied, so an odd
    /// rate loses its last ppm.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result does not fit in 128 bits.
    pub fn apply_halved(&self, amount: Amount) -> Result<Amount> {
        Self(self.0 / 2).apply(amount, Rounding::Down)
    }

    /// Validates the rate, naming the offending fee in the error.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] with `what` if the rate exceeds 100%.
    pub const fn ensure_valid(&self, what: &'static str) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(AmmError::InvalidFee(what))
        }
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ppm", self.0)
    }
}
