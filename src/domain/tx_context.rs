//! Calling environment of a single state-mutating call.

use super::{Address, Amount};

/// Who is calling, when, and with how much native value attached.
///
/// Every router entry point takes a `TxContext`.  `now` is compared against
/// deadlines and feeds the pools' price accumulators; `value` is the native
/// amount the caller sends along and is only meaningful for the native
/// variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxContext {
    /// Account the call acts on behalf of.
    pub sender: Address,
    /// Current time in seconds.
    pub now: u64,
    /// Native value attached to the call.
    pub value: Amount,
}

impl TxContext {
    /// A call without native value.
    #[must_use]
    pub const fn new(sender: Address, now: u64) -> Self {
        Self {
            sender,
            now,
            value: Amount::ZERO,
        }
    }

    /// Returns a copy carrying `value` of native asset.
    #[must_use]
    pub const fn with_value(self, value: Amount) -> Self {
        Self { value, ..self }
    }
}
