//! Seams between the exchange core and its environment.
//!
//! | Trait | Role |
//! |-------|------|
//! | [`AssetLedger`] | Fungible balances and transfers (consumed) |
//! | [`NativeWrapper`] | Native custody and 1:1 wrapping (consumed) |
//! | [`FromConfig`] | Uniform construction from configuration |

mod asset_ledger;
mod from_config;
mod native_wrapper;

pub use asset_ledger::AssetLedger;
pub use from_config::FromConfig;
pub use native_wrapper::NativeWrapper;
