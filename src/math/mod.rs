//! Arithmetic utilities for pricing and share accounting.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`CheckedArithmetic`] | `Result`-returning ops on `Amount` / `Liquidity` |
//! | [`mul_div`] | `a · b / d` through 256 bits with explicit rounding |
//! | [`isqrt`] | Integer square root for the first deposit |
//! | [`encode_uq112x112`] | Fixed-point price for the accumulators |
//! | [`product_holds`] | 512-bit constant-product check |

mod checked;
mod wide;

pub use checked::CheckedArithmetic;
pub use wide::{
    MAX_RESERVE, div_u256, encode_uq112x112, isqrt, mul_div, narrow, product_holds,
};
