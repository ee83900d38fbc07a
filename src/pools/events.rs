//! Journal entries emitted by pool settlements.

use serde::{Deserialize, Serialize};

use crate::domain::{Address, Amount, Liquidity};

/// Something observable that happened in a pool.
///
/// Entries are appended in execution order and stay in the pool until a
/// caller drains them with [`PairPool::drain_events`](super::PairPool::drain_events).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolEvent {
    /// Shares were minted against a deposit.
    Mint {
        /// Share recipient.
        to: Address,
        /// Shares minted to `to` (excludes the locked minimum).
        shares: Liquidity,
        /// Asset A deposited.
        amount_a: Amount,
        /// Asset B deposited.
        amount_b: Amount,
    },
    /// Shares were burned and the underlying paid out.
    Burn {
        /// Payout recipient.
        to: Address,
        /// Shares burned.
        shares: Liquidity,
        /// Asset A paid out.
        amount_a: Amount,
        /// Asset B paid out.
        amount_b: Amount,
    },
    /// A swap settled.
    Swap {
        /// Output recipient.
        to: Address,
        /// Asset A received by the pool.
        amount_a_in: Amount,
        /// Asset B received by the pool.
        amount_b_in: Amount,
        /// Asset A sent out.
        amount_a_out: Amount,
        /// Asset B sent out.
        amount_b_out: Amount,
    },
    /// Reserves were rewritten.
    Sync {
        /// New reserve of asset A.
        reserve_a: Amount,
        /// New reserve of asset B.
        reserve_b: Amount,
    },
}
