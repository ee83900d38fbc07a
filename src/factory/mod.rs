//! Pool registry and deterministic pool addressing.
//!
//! The [`PoolRegistry`] creates one [`PairPool`](crate::pools::PairPool) per
//! canonical asset pair, stores it under an address derived with
//! [`derive_pool_address`], and holds the global fee schedule.
//!
//! ```rust
//! use pairswap::config::{FeeConfig, RegistryConfig};
//! use pairswap::domain::{Address, FeeRate};
//! use pairswap::factory::PoolRegistry;
//! use pairswap::traits::FromConfig;
//!
//! let fees = FeeConfig::new(FeeRate::new(3_000), FeeRate::ZERO, None).expect("valid fees");
//! let cfg = RegistryConfig::new(Address::from_low_u64(0x60), fees).expect("valid config");
//! let registry = PoolRegistry::from_config(&cfg).expect("registry built");
//! assert_eq!(registry.fee_config().swap_fee, FeeRate::new(3_000));
//! ```

mod address;
mod registry;

pub use address::{POOL_CODE_VERSION, derive_pool_address, pool_address, pool_code_fingerprint};
pub use registry::PoolRegistry;
