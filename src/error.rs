//! Unified error type for the exchange core.
//!
//! Every fallible operation in the registry, the pools and the router
//! returns [`AmmError`].  Failures are synchronous and never retried
//! internally; router calls additionally roll back every effect of the
//! failed call before the error reaches the caller.

/// All failure modes of the exchange core.
///
/// Variants carrying a `&'static str` describe the arithmetic or transfer
/// step that failed; they are diagnostics only and never interpolate user
/// data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum AmmError {
    /// Both sides of a pair name the same asset.
    #[error("identical assets")]
    IdenticalAssets,

    /// An asset or account identifier is the null sentinel.
    #[error("zero address")]
    ZeroAddress,

    /// A pool for this canonical pair was already created.
    #[error("pair exists")]
    PairExists,

    /// No pool is registered for the requested pair.
    #[error("pair not found")]
    PairNotFound,

    /// The caller is not the current fee setter.
    #[error("forbidden")]
    Forbidden,

    /// A fee rate is out of range or makes the operation impossible.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// A deposit would mint zero shares.
    #[error("insufficient liquidity minted")]
    InsufficientLiquidityMinted,

    /// A redemption would pay out zero of either asset.
    #[error("insufficient liquidity burned")]
    InsufficientLiquidityBurned,

    /// Requested or computed output is zero or below the caller's minimum.
    #[error("insufficient output amount")]
    InsufficientOutputAmount,

    /// A swap reached the pool without any input.
    #[error("insufficient input amount")]
    InsufficientInputAmount,

    /// Reserves cannot cover the requested output, or a reserve is empty.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// A quote was requested for a zero amount.
    #[error("insufficient amount")]
    InsufficientAmount,

    /// The swap recipient is one of the pool's own assets.
    #[error("invalid to")]
    InvalidTo,

    /// The constant-product check failed after fee adjustment.
    #[error("K")]
    InvariantViolation,

    /// A pool operation was entered while another one is in progress.
    #[error("locked")]
    Locked,

    /// The call arrived after its deadline.
    #[error("expired")]
    Expired,

    /// The first asset's amount fell below the caller's minimum.
    #[error("insufficient x amount")]
    InsufficientXAmount,

    /// The second asset's amount fell below the caller's minimum.
    #[error("insufficient y amount")]
    InsufficientYAmount,

    /// A swap path is malformed or has the wrong native endpoint.
    #[error("invalid path: {0}")]
    InvalidPath(&'static str),

    /// The required input exceeds the caller's maximum.
    #[error("excessive input amount")]
    ExcessiveInputAmount,

    /// An intermediate value exceeded its representable range.
    #[error("overflow: {0}")]
    Overflow(&'static str),

    /// An intermediate value went below zero.
    #[error("underflow: {0}")]
    Underflow(&'static str),

    /// Division by a zero quantity.
    #[error("division by zero")]
    DivisionByZero,

    /// The asset ledger or native wrapper refused a transfer.
    #[error("transfer failed: {0}")]
    TransferFailed(&'static str),

    /// A configuration value is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invariant_violation_displays_as_k() {
        assert_eq!(AmmError::InvariantViolation.to_string(), "K");
    }

    #[test]
    fn payload_is_rendered() {
        let err = AmmError::InvalidPath("path too short");
        assert_eq!(err.to_string(), "invalid path: path too short");
    }

    #[test]
    fn errors_compare_by_value() {
        assert_eq!(AmmError::Locked, AmmError::Locked);
        assert_ne!(AmmError::InsufficientXAmount, AmmError::InsufficientYAmount);
    }
}
