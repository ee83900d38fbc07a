//! Construction from a validated configuration value.
//!
//! [`FromConfig`] gives the registry (and anything else built from a
//! declarative blueprint) one uniform constructor.  Implementations
//! re-validate the configuration even if the caller already did, so a
//! value obtained through deserialization can be passed straight in.
//!
//! ```text
//! RegistryConfig ──from_config──▶ PoolRegistry
//! ```

use crate::error::AmmError;

/// Builds `Self` from a configuration of type `C`.
///
/// There is no blanket implementation; every pairing of a type with its
/// configuration is written out explicitly.
///
/// # Implementors
///
/// - `impl FromConfig<RegistryConfig> for PoolRegistry`
pub trait FromConfig<C> {
    /// Validates `config` and constructs the value.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`], or a more specific
    /// variant, if `config` fails validation.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
