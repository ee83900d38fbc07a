//! Declarative configuration for the registry and its fee schedule.
//!
//! [`RegistryConfig`] is the blueprint a [`PoolRegistry`](crate::factory::PoolRegistry)
//! is built from; [`FeeConfig`] is the fee schedule it carries and hands to
//! every pool settlement.

mod fee_config;
mod registry_config;

pub use fee_config::FeeConfig;
pub use registry_config::RegistryConfig;
