//! Fallible arithmetic on [`Amount`] and [`Liquidity`].
//!
//! The domain types return `Option` from their checked operations.  This
//! trait lifts those into [`Result`] with a specific [`AmmError`] variant so
//! pool and router code can propagate with `?`.
//!
//! ```
//! use pairswap::domain::Amount;
//! use pairswap::math::CheckedArithmetic;
//!
//! let total = Amount::new(100).safe_add(&Amount::new(200));
//! assert_eq!(total, Ok(Amount::new(300)));
//! ```

use crate::domain::{Amount, Liquidity, Rounding};
use crate::error::{AmmError, Result};

/// Arithmetic that reports overflow, underflow and division by zero.
///
/// Nothing saturates or wraps; every failure surfaces as an error.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] past the representable range.
    fn safe_add(&self, other: &Self) -> Result<Self>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self>;

    /// Checked division with an explicit rounding direction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `other` is zero.
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount addition"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("amount subtraction"))
    }

    #[inline]
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self> {
        self.checked_div(other, rounding)
            .ok_or(AmmError::DivisionByZero)
    }
}

impl CheckedArithmetic for Liquidity {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("share supply"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("share balance"))
    }

    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self> {
        Amount::new(self.get())
            .safe_div(&Amount::new(other.get()), rounding)
            .map(|q| Liquidity::new(q.get()))
    }
}
