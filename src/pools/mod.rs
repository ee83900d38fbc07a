//! Constant-product pool and its building blocks.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`PairPool`] | Reserves, settlement (`mint` / `burn` / `swap`), share token |
//! | [`ShareLedger`] | Liquidity-provider share balances |
//! | [`PriceOracle`] | Wrapping UQ112.112 price accumulators |
//! | [`ReentrancyLock`] | Per-pool settlement guard |
//! | [`PoolEvent`] | Journal of settlements |

mod events;
mod lock;
mod oracle;
mod pair_pool;
mod shares;

#[cfg(test)]
mod proptest_properties;

pub use events::PoolEvent;
pub use lock::ReentrancyLock;
pub use oracle::PriceOracle;
pub use pair_pool::{MAX_PENDING_EVENTS, MINIMUM_LIQUIDITY, PairPool, PoolState, ReserveSnapshot};
pub use shares::ShareLedger;
