//! Time-weighted price accumulators.
//!
//! Each pool keeps two running sums, one per direction, of the spot price
//! multiplied by the seconds it was in effect.  An external observer that
//! samples a sum at two instants and divides the difference by the elapsed
//! time obtains the time-weighted average price over that window.
//!
//! Prices are UQ112.112 fixed point; the sums are 256-bit and wrap on
//! overflow, which is harmless because observers only ever take
//! differences.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::math::encode_uq112x112;

/// Cumulative prices of a pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceOracle {
    price_a_cumulative: U256,
    price_b_cumulative: U256,
}

impl PriceOracle {
    /// Sum of `reserve_b / reserve_a · dt`: the price of asset A in B.
    #[must_use]
    pub const fn price_a_cumulative(&self) -> U256 {
        self.price_a_cumulative
    }

    /// Sum of `reserve_a / reserve_b · dt`: the price of asset B in A.
    #[must_use]
    pub const fn price_b_cumulative(&self) -> U256 {
        self.price_b_cumulative
    }

    /// Adds `elapsed` seconds at the price implied by the given reserves.
    ///
    /// Does nothing when no time passed or either reserve is empty.
    ///
    /// # Errors
    ///
    /// Propagates the division error of the fixed-point encoder, which
    /// cannot fire once both reserves are checked non-zero.
    pub fn accumulate(&mut self, reserve_a: u128, reserve_b: u128, elapsed: u64) -> Result<()> {
        if elapsed == 0 || reserve_a == 0 || reserve_b == 0 {
            return Ok(());
        }
        let dt = U256::from(elapsed);
        let price_a = encode_uq112x112(reserve_b, reserve_a)?;
        let price_b = encode_uq112x112(reserve_a, reserve_b)?;
        self.price_a_cumulative = self
            .price_a_cumulative
            .wrapping_add(price_a.wrapping_mul(dt));
        self.price_b_cumulative = self
            .price_b_cumulative
            .wrapping_add(price_b.wrapping_mul(dt));
        Ok(())
    }
}
