//! Explicit rounding direction for integer division.

/// Rounding direction for every division performed by the exchange.
///
/// Division never rounds implicitly: each call site states which side the
/// truncation favours.  Quantities paid out by the protocol round
/// [`Down`](Self::Down); quantities charged to a trader round
/// [`Up`](Self::Up).
///
/// # Examples
///
/// ```
/// use pairswap::domain::Rounding;
///
/// assert!(Rounding::Up.is_up());
/// assert!(Rounding::Down.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Ceiling; used for amounts charged to the caller.
    Up,
    /// Floor; used for amounts paid out by a pool.
    Down,
}

impl Rounding {
    /// Returns `true` for [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` for [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
