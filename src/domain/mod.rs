//! Value types shared by the registry, the pools and the router.
//!
//! Every quantity is a newtype over `u128` with checked arithmetic; every
//! identifier is an [`Address`].  Constructors that can fail validate their
//! invariants up front so the rest of the crate can rely on them.

mod address;
mod amount;
mod asset_pair;
mod fee_rate;
mod liquidity;
mod rounding;
mod swap_path;
mod tx_context;

pub use address::Address;
pub use amount::Amount;
pub use asset_pair::AssetPair;
pub use fee_rate::{FEE_DENOMINATOR, FeeRate};
pub use liquidity::Liquidity;
pub use rounding::Rounding;
pub use swap_path::SwapPath;
pub use tx_context::TxContext;
