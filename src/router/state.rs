//! Exchange-wide state and all-or-nothing execution.

use crate::error::Result;
use crate::factory::PoolRegistry;

/// Everything a router call can touch: the registry (and through it every
/// pool) plus the external ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeState<L> {
    /// Pools and fee schedule.
    pub registry: PoolRegistry,
    /// Asset balances and native custody.
    pub ledger: L,
}

impl<L> ExchangeState<L> {
    /// Bundles a registry with a ledger.
    #[must_use]
    pub const fn new(registry: PoolRegistry, ledger: L) -> Self {
        Self { registry, ledger }
    }
}

/// Runs `op` against `state`, restoring the pre-call checkpoint if it fails.
///
/// Either every effect of `op` is kept or none is.
///
/// # Errors
///
/// Returns whatever `op` returns.
pub fn atomically<L, T>(
    state: &mut ExchangeState<L>,
    op: impl FnOnce(&mut ExchangeState<L>) -> Result<T>,
) -> Result<T>
where
    L: Clone,
{
    let checkpoint = state.clone();
    match op(state) {
        Ok(value) => Ok(value),
        Err(error) => {
            *state = checkpoint;
            tracing::warn!(%error, "router call rolled back");
            Err(error)
        }
    }
}
