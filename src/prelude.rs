//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use pairswap::prelude::*;
//! ```
//!
//! Brings the domain types, the router and its parameter structs, the
//! registry, configuration, the consumed traits and the error type into
//! scope with one import.

pub use crate::domain::{
    Address, Amount, AssetPair, FeeRate, Liquidity, Rounding, SwapPath, TxContext,
};

pub use crate::traits::{AssetLedger, FromConfig, NativeWrapper};

pub use crate::math::CheckedArithmetic;

pub use crate::config::{FeeConfig, RegistryConfig};

pub use crate::error::{AmmError, Result};

pub use crate::factory::PoolRegistry;

pub use crate::pools::{PairPool, PoolEvent};

pub use crate::router::{
    AddLiquidity, AddLiquidityNative, ExchangeState, RemoveLiquidity, RemoveLiquidityNative,
    Router,
};

pub use crate::ledger::InMemoryLedger;
