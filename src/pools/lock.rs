//! Per-pool reentrancy guard.

use crate::error::{AmmError, Result};

/// Binary lock held for the duration of one mutating pool operation.
///
/// The pool acquires it through a scoped helper that releases it on every
/// exit path, so callers never touch [`acquire`](Self::acquire) and
/// [`release`](Self::release) directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReentrancyLock {
    held: bool,
}

impl ReentrancyLock {
    /// Takes the lock.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Locked`] if it is already held.
    pub fn acquire(&mut self) -> Result<()> {
        if self.held {
            return Err(AmmError::Locked);
        }
        self.held = true;
        Ok(())
    }

    /// Gives the lock back.
    pub fn release(&mut self) {
        self.held = false;
    }

    /// Returns `true` while an operation is in progress.
    #[must_use]
    pub const fn is_held(&self) -> bool {
        self.held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_fails_until_release() {
        let mut lock = ReentrancyLock::default();
        assert!(lock.acquire().is_ok());
        assert!(lock.is_held());
        assert_eq!(lock.acquire(), Err(AmmError::Locked));
        lock.release();
        assert!(!lock.is_held());
        assert!(lock.acquire().is_ok());
    }
}
