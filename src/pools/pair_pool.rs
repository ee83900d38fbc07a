//! Constant-product pool for one asset pair.
//!
//! The pool never trusts amounts handed to it.  Every settlement reads the
//! pool's actual balances from the [`AssetLedger`] and compares them with
//! the recorded reserves: whatever exceeds the reserves is what was paid in.
//! Callers therefore transfer assets to the pool first and settle second.
//!
//! # Swap check
//!
//! With `D = 1_000_000` and swap fee `f` (ppm), a swap is accepted iff
//!
//! ```text
//! (balance_a·D − in_a·f) · (balance_b·D − in_b·f) ≥ reserve_a · reserve_b · D²
//! ```
//!
//! evaluated in 512 bits over the balances after the outputs left.  The
//! check never lowers `reserve_a · reserve_b`, with or without fee
//! extraction.

use std::collections::VecDeque;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use super::events::PoolEvent;
use super::lock::ReentrancyLock;
use super::oracle::PriceOracle;
use super::shares::ShareLedger;
use crate::config::FeeConfig;
use crate::domain::{
    Address, Amount, AssetPair, FEE_DENOMINATOR, FeeRate, Liquidity, Rounding,
};
use crate::error::{AmmError, Result};
use crate::math::{CheckedArithmetic, MAX_RESERVE, isqrt, mul_div, narrow, product_holds};
use crate::traits::AssetLedger;

/// Shares locked forever under [`Address::ZERO`] by the first deposit.
pub const MINIMUM_LIQUIDITY: Liquidity = Liquidity::new(1_000);

/// Undrained journal entries a pool keeps; older entries are dropped first.
pub const MAX_PENDING_EVENTS: usize = 256;

/// Lifecycle of a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoolState {
    /// Created, no shares outstanding.
    Uninitialized,
    /// At least one deposit happened.  A pool never leaves this state.
    Active,
}

/// Reserves together with the time they were last written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveSnapshot {
    /// Reserve of the lower asset.
    pub reserve_a: Amount,
    /// Reserve of the higher asset.
    pub reserve_b: Amount,
    /// `now` of the last reserve update.
    pub last_update: u64,
}

/// A constant-product pool.
///
/// Pools are created by the [`PoolRegistry`](crate::factory::PoolRegistry)
/// and settled by the [`Router`](crate::router::Router), but every
/// operation is public so the pool can be driven directly.  Driving it
/// directly forgoes the router's all-or-nothing rollback: a ledger failure
/// halfway through a settlement leaves the transfers made so far in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairPool {
    address: Address,
    pair: AssetPair,
    reserve_a: Amount,
    reserve_b: Amount,
    last_update: u64,
    oracle: PriceOracle,
    shares: ShareLedger,
    lock: ReentrancyLock,
    events: VecDeque<PoolEvent>,
}

impl PairPool {
    /// An empty, uninitialized pool living at `address`.
    #[must_use]
    pub fn new(address: Address, pair: AssetPair) -> Self {
        Self {
            address,
            pair,
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
            last_update: 0,
            oracle: PriceOracle::default(),
            shares: ShareLedger::default(),
            lock: ReentrancyLock::default(),
            events: VecDeque::new(),
        }
    }

    // -- reads --------------------------------------------------------------

    /// Address the pool holds its assets under.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// The canonical pair.
    #[must_use]
    pub const fn pair(&self) -> AssetPair {
        self.pair
    }

    /// Lower asset of the pair.
    #[must_use]
    pub const fn asset_a(&self) -> Address {
        self.pair.first()
    }

    /// Higher asset of the pair.
    #[must_use]
    pub const fn asset_b(&self) -> Address {
        self.pair.second()
    }

    /// Current reserves and last update time.
    #[must_use]
    pub const fn reserves(&self) -> ReserveSnapshot {
        ReserveSnapshot {
            reserve_a: self.reserve_a,
            reserve_b: self.reserve_b,
            last_update: self.last_update,
        }
    }

    /// Reserves oriented as `(reserve of asset_in, reserve of the other)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPath`] if `asset_in` is not in the pair.
    pub fn reserves_for(&self, asset_in: &Address) -> Result<(Amount, Amount)> {
        if self.pair.is_first(asset_in) {
            Ok((self.reserve_a, self.reserve_b))
        } else if self.pair.contains(asset_in) {
            Ok((self.reserve_b, self.reserve_a))
        } else {
            Err(AmmError::InvalidPath("asset is not part of this pair"))
        }
    }

    /// Cumulative price of A in B (UQ112.112, wrapping).
    #[must_use]
    pub const fn price_a_cumulative(&self) -> U256 {
        self.oracle.price_a_cumulative()
    }

    /// Cumulative price of B in A (UQ112.112, wrapping).
    #[must_use]
    pub const fn price_b_cumulative(&self) -> U256 {
        self.oracle.price_b_cumulative()
    }

    /// Outstanding shares, including the locked minimum.
    #[must_use]
    pub const fn total_shares(&self) -> Liquidity {
        self.shares.total()
    }

    /// Shares held by `holder`.
    #[must_use]
    pub fn shares_of(&self, holder: &Address) -> Liquidity {
        self.shares.balance_of(holder)
    }

    /// Lifecycle state.
    #[must_use]
    pub const fn state(&self) -> PoolState {
        if self.shares.total().is_zero() {
            PoolState::Uninitialized
        } else {
            PoolState::Active
        }
    }

    /// Returns `true` while a settlement is running.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.lock.is_held()
    }

    /// Journal entries not yet drained, oldest first.
    ///
    /// At most [`MAX_PENDING_EVENTS`] are kept.
    pub fn events(&self) -> impl ExactSizeIterator<Item = &PoolEvent> + '_ {
        self.events.iter()
    }

    /// Takes every pending journal entry.
    pub fn drain_events(&mut self) -> Vec<PoolEvent> {
        self.events.drain(..).collect()
    }

    // -- share token --------------------------------------------------------

    /// Moves shares between holders.
    ///
    /// Moving shares to the pool's own address is how a holder queues them
    /// for [`burn`](Self::burn).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::TransferFailed`] if `from` holds too few shares.
    pub fn transfer_shares(&mut self, from: Address, to: Address, amount: Liquidity) -> Result<()> {
        self.shares.transfer(from, to, amount)
    }

    // -- settlements --------------------------------------------------------

    /// Mints shares to `to` for everything paid in above the reserves.
    ///
    /// The first deposit mints `√(a·b) − MINIMUM_LIQUIDITY` and locks
    /// [`MINIMUM_LIQUIDITY`] under [`Address::ZERO`]; later deposits mint
    /// `min(a·S/Ra, b·S/Rb)`, so an unbalanced deposit donates its excess.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientLiquidityMinted`] if no share would be
    ///   minted.
    /// - [`AmmError::Overflow`] if a balance exceeds `2^112 − 1`.
    /// - [`AmmError::Locked`] if called during another settlement.
    pub fn mint<L: AssetLedger + ?Sized>(
        &mut self,
        ledger: &L,
        to: Address,
        now: u64,
    ) -> Result<Liquidity> {
        self.locked(|pool| pool.settle_mint(ledger, to, now))
    }

    /// Burns the shares held in the pool's own custody and pays the
    /// pro-rata share of both balances to `to`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientLiquidityBurned`] if either payout is zero.
    /// - [`AmmError::TransferFailed`] if the ledger refuses a payout.
    /// - [`AmmError::Locked`] if called during another settlement.
    pub fn burn<L: AssetLedger + ?Sized>(
        &mut self,
        ledger: &mut L,
        to: Address,
        now: u64,
    ) -> Result<(Amount, Amount)> {
        self.locked(|pool| pool.settle_burn(ledger, to, now))
    }

    /// Pays out the requested amounts to `to` against whatever input was
    /// transferred in beforehand, enforcing the fee-adjusted product check.
    ///
    /// When `fees` names a recipient, the swap fee on each input side is
    /// transferred to it in the input asset; otherwise it stays in the pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientOutputAmount`] if both outputs are zero.
    /// - [`AmmError::InsufficientLiquidity`] if an output reaches its reserve.
    /// - [`AmmError::InvalidTo`] if `to` is one of the pair's assets.
    /// - [`AmmError::InsufficientInputAmount`] if nothing was paid in.
    /// - [`AmmError::InvariantViolation`] if the product check fails.
    /// - [`AmmError::Locked`] if called during another settlement.
    #[allow(clippy::too_many_arguments)]
    pub fn swap<L: AssetLedger + ?Sized>(
        &mut self,
        ledger: &mut L,
        fees: &FeeConfig,
        amount_a_out: Amount,
        amount_b_out: Amount,
        to: Address,
        now: u64,
    ) -> Result<()> {
        self.locked(|pool| pool.settle_swap(ledger, fees, amount_a_out, amount_b_out, to, now))
    }

    /// Sends balances in excess of the reserves to `to`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::TransferFailed`] if the ledger refuses a transfer.
    /// - [`AmmError::Locked`] if called during another settlement.
    pub fn skim<L: AssetLedger + ?Sized>(&mut self, ledger: &mut L, to: Address) -> Result<()> {
        self.locked(|pool| {
            let (balance_a, balance_b) = pool.balances(ledger);
            let excess_a = balance_a.saturating_sub(&pool.reserve_a);
            let excess_b = balance_b.saturating_sub(&pool.reserve_b);
            pool.pay(ledger, pool.asset_a(), to, excess_a)?;
            pool.pay(ledger, pool.asset_b(), to, excess_b)
        })
    }

    /// Forces the reserves to the current balances.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Overflow`] if a balance exceeds `2^112 − 1`.
    /// - [`AmmError::Locked`] if called during another settlement.
    pub fn sync<L: AssetLedger + ?Sized>(&mut self, ledger: &L, now: u64) -> Result<()> {
        self.locked(|pool| {
            let (balance_a, balance_b) = pool.balances(ledger);
            pool.update(balance_a, balance_b, now)
        })
    }

    // -- internals ----------------------------------------------------------

    fn locked<T>(&mut self, op: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.lock.acquire()?;
        let outcome = op(self);
        self.lock.release();
        outcome
    }

    fn journal(&mut self, event: PoolEvent) {
        if self.events.len() == MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    fn balances<L: AssetLedger + ?Sized>(&self, ledger: &L) -> (Amount, Amount) {
        (
            ledger.balance_of(self.asset_a(), self.address),
            ledger.balance_of(self.asset_b(), self.address),
        )
    }

    fn pay<L: AssetLedger + ?Sized>(
        &self,
        ledger: &mut L,
        asset: Address,
        to: Address,
        amount: Amount,
    ) -> Result<()> {
        if amount.is_zero() {
            return Ok(());
        }
        ledger.transfer(asset, self.address, to, amount)
    }

    fn update(&mut self, balance_a: Amount, balance_b: Amount, now: u64) -> Result<()> {
        ensure_reserve_cap(balance_a, balance_b)?;
        let elapsed = now.saturating_sub(self.last_update);
        self.oracle
            .accumulate(self.reserve_a.get(), self.reserve_b.get(), elapsed)?;
        self.reserve_a = balance_a;
        self.reserve_b = balance_b;
        self.last_update = now;
        self.journal(PoolEvent::Sync {
            reserve_a: balance_a,
            reserve_b: balance_b,
        });
        Ok(())
    }

    fn settle_mint<L: AssetLedger + ?Sized>(
        &mut self,
        ledger: &L,
        to: Address,
        now: u64,
    ) -> Result<Liquidity> {
        let (balance_a, balance_b) = self.balances(ledger);
        let amount_a = balance_a.safe_sub(&self.reserve_a)?;
        let amount_b = balance_b.safe_sub(&self.reserve_b)?;
        let total = self.shares.total();

        let (minted, locked) = if total.is_zero() {
            let root = narrow(
                isqrt(amount_a.to_u256() * amount_b.to_u256()),
                "initial share supply",
            )?;
            let minted = root.saturating_sub(MINIMUM_LIQUIDITY.get());
            (Liquidity::new(minted), MINIMUM_LIQUIDITY)
        } else {
            let by_a = mul_div(amount_a.get(), total.get(), self.reserve_a.get(), Rounding::Down)?;
            let by_b = mul_div(amount_b.get(), total.get(), self.reserve_b.get(), Rounding::Down)?;
            (Liquidity::new(by_a.min(by_b)), Liquidity::ZERO)
        };
        if minted.is_zero() {
            return Err(AmmError::InsufficientLiquidityMinted);
        }

        self.update(balance_a, balance_b, now)?;
        if !locked.is_zero() {
            self.shares.mint(Address::ZERO, locked)?;
        }
        self.shares.mint(to, minted)?;
        self.journal(PoolEvent::Mint {
            to,
            shares: minted,
            amount_a,
            amount_b,
        });
        tracing::debug!(
            pool = %self.address,
            %to,
            shares = %minted,
            %amount_a,
            %amount_b,
            "minted liquidity shares"
        );
        Ok(minted)
    }

    fn settle_burn<L: AssetLedger + ?Sized>(
        &mut self,
        ledger: &mut L,
        to: Address,
        now: u64,
    ) -> Result<(Amount, Amount)> {
        let (balance_a, balance_b) = self.balances(ledger);
        let shares = self.shares.balance_of(&self.address);
        let total = self.shares.total();
        if total.is_zero() {
            return Err(AmmError::InsufficientLiquidityBurned);
        }

        let amount_a = Amount::new(mul_div(
            shares.get(),
            balance_a.get(),
            total.get(),
            Rounding::Down,
        )?);
        let amount_b = Amount::new(mul_div(
            shares.get(),
            balance_b.get(),
            total.get(),
            Rounding::Down,
        )?);
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(AmmError::InsufficientLiquidityBurned);
        }

        self.shares.burn(self.address, shares)?;
        self.pay(ledger, self.asset_a(), to, amount_a)?;
        self.pay(ledger, self.asset_b(), to, amount_b)?;

        let (balance_a, balance_b) = self.balances(ledger);
        self.update(balance_a, balance_b, now)?;
        self.journal(PoolEvent::Burn {
            to,
            shares,
            amount_a,
            amount_b,
        });
        tracing::debug!(
            pool = %self.address,
            %to,
            shares = %shares,
            %amount_a,
            %amount_b,
            "burned liquidity shares"
        );
        Ok((amount_a, amount_b))
    }

    fn settle_swap<L: AssetLedger + ?Sized>(
        &mut self,
        ledger: &mut L,
        fees: &FeeConfig,
        amount_a_out: Amount,
        amount_b_out: Amount,
        to: Address,
        now: u64,
    ) -> Result<()> {
        if amount_a_out.is_zero() && amount_b_out.is_zero() {
            return Err(AmmError::InsufficientOutputAmount);
        }
        if amount_a_out >= self.reserve_a || amount_b_out >= self.reserve_b {
            return Err(AmmError::InsufficientLiquidity);
        }
        if self.pair.contains(&to) {
            return Err(AmmError::InvalidTo);
        }

        let (balance_a, balance_b) = self.balances(ledger);
        let after_a = balance_a
            .checked_sub(&amount_a_out)
            .ok_or(AmmError::InsufficientLiquidity)?;
        let after_b = balance_b
            .checked_sub(&amount_b_out)
            .ok_or(AmmError::InsufficientLiquidity)?;
        // outputs are strictly below the reserves, checked above
        let amount_a_in = after_a.saturating_sub(&self.reserve_a.saturating_sub(&amount_a_out));
        let amount_b_in = after_b.saturating_sub(&self.reserve_b.saturating_sub(&amount_b_out));
        if amount_a_in.is_zero() && amount_b_in.is_zero() {
            return Err(AmmError::InsufficientInputAmount);
        }

        let adjusted_a = fee_adjusted(after_a, amount_a_in, fees.swap_fee)?;
        let adjusted_b = fee_adjusted(after_b, amount_b_in, fees.swap_fee)?;
        if !product_holds(
            adjusted_a,
            adjusted_b,
            self.reserve_a.get(),
            self.reserve_b.get(),
            u128::from(FEE_DENOMINATOR),
        ) {
            return Err(AmmError::InvariantViolation);
        }

        let recipient = fees.swap_fee_recipient();
        let (fee_a, fee_b) = if recipient.is_some() {
            (
                fees.swap_fee.apply(amount_a_in, Rounding::Down)?,
                fees.swap_fee.apply(amount_b_in, Rounding::Down)?,
            )
        } else {
            (Amount::ZERO, Amount::ZERO)
        };
        ensure_reserve_cap(after_a.safe_sub(&fee_a)?, after_b.safe_sub(&fee_b)?)?;

        self.pay(ledger, self.asset_a(), to, amount_a_out)?;
        self.pay(ledger, self.asset_b(), to, amount_b_out)?;
        if let Some(recipient) = recipient {
            self.pay(ledger, self.asset_a(), recipient, fee_a)?;
            self.pay(ledger, self.asset_b(), recipient, fee_b)?;
        }

        let (balance_a, balance_b) = self.balances(ledger);
        self.update(balance_a, balance_b, now)?;
        self.journal(PoolEvent::Swap {
            to,
            amount_a_in,
            amount_b_in,
            amount_a_out,
            amount_b_out,
        });
        tracing::debug!(
            pool = %self.address,
            %to,
            %amount_a_in,
            %amount_b_in,
            %amount_a_out,
            %amount_b_out,
            %fee_a,
            %fee_b,
            "swap settled"
        );
        Ok(())
    }
}

/// `balance·D − input·fee` in 256 bits.
fn fee_adjusted(balance: Amount, input: Amount, fee: FeeRate) -> Result<U256> {
    let scaled = balance.to_u256() * U256::from(FEE_DENOMINATOR);
    let charged = input.to_u256() * U256::from(fee.get());
    scaled
        .checked_sub(charged)
        .ok_or(AmmError::Underflow("fee exceeds scaled balance"))
}

fn ensure_reserve_cap(balance_a: Amount, balance_b: Amount) -> Result<()> {
    if balance_a.get() > MAX_RESERVE || balance_b.get() > MAX_RESERVE {
        return Err(AmmError::Overflow("reserve exceeds 112 bits"));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::ledger::InMemoryLedger;

    const E18: u128 = 1_000_000_000_000_000_000;

    fn asset_a() -> Address {
        Address::from_low_u64(0xa)
    }

    fn asset_b() -> Address {
        Address::from_low_u64(0xb)
    }

    fn pool_addr() -> Address {
        Address::from_low_u64(0x9001)
    }

    fn lp() -> Address {
        Address::from_low_u64(0x1111)
    }

    fn trader() -> Address {
        Address::from_low_u64(0x2222)
    }

    fn treasury() -> Address {
        Address::from_low_u64(0x7ea5)
    }

    fn fresh() -> (PairPool, InMemoryLedger) {
        let Ok(pair) = AssetPair::new(asset_a(), asset_b()) else {
            panic!("distinct assets");
        };
        let pool = PairPool::new(pool_addr(), pair);
        (pool, InMemoryLedger::new(Address::from_low_u64(0xee)))
    }

    fn seeded(a: u128, b: u128) -> (PairPool, InMemoryLedger) {
        let (mut pool, mut ledger) = fresh();
        ledger.mint(asset_a(), pool_addr(), Amount::new(a));
        ledger.mint(asset_b(), pool_addr(), Amount::new(b));
        let Ok(_) = pool.mint(&ledger, lp(), 1) else {
            panic!("first deposit mints");
        };
        (pool, ledger)
    }

    fn fees(swap: u32, recipient: Option<Address>) -> FeeConfig {
        FeeConfig {
            swap_fee: FeeRate::new(swap),
            liquidity_fee: FeeRate::ZERO,
            fee_recipient: recipient,
        }
    }

    fn k(pool: &PairPool) -> U256 {
        let r = pool.reserves();
        r.reserve_a.to_u256() * r.reserve_b.to_u256()
    }

    // -- mint ---------------------------------------------------------------

    #[test]
    fn first_mint_locks_minimum() {
        let (pool, _) = seeded(1_000 * E18, 1_000 * E18);
        assert_eq!(pool.state(), PoolState::Active);
        assert_eq!(pool.total_shares(), Liquidity::new(1_000 * E18));
        assert_eq!(pool.shares_of(&Address::ZERO), MINIMUM_LIQUIDITY);
        assert_eq!(pool.shares_of(&lp()), Liquidity::new(1_000 * E18 - 1_000));
        assert_eq!(pool.reserves().reserve_a, Amount::new(1_000 * E18));
        assert_eq!(pool.reserves().last_update, 1);
    }

    #[test]
    fn first_mint_at_or_below_minimum_fails() {
        let (mut pool, mut ledger) = fresh();
        ledger.mint(asset_a(), pool_addr(), Amount::new(1_000));
        ledger.mint(asset_b(), pool_addr(), Amount::new(1_000));
        assert_eq!(
            pool.mint(&ledger, lp(), 1),
            Err(AmmError::InsufficientLiquidityMinted)
        );
        assert_eq!(pool.state(), PoolState::Uninitialized);
        assert!(!pool.is_locked());
    }

    #[test]
    fn later_mint_takes_smaller_ratio() {
        let (mut pool, mut ledger) = seeded(1_000 * E18, 2_000 * E18);
        let before = pool.total_shares();
        ledger.mint(asset_a(), pool_addr(), Amount::new(100 * E18));
        ledger.mint(asset_b(), pool_addr(), Amount::new(400 * E18));
        let Ok(minted) = pool.mint(&ledger, trader(), 2) else {
            panic!("mint succeeds");
        };
        // a ratio 10%, b ratio 20%: a wins
        assert_eq!(minted.get(), before.get() / 10);
        assert_eq!(pool.reserves().reserve_b, Amount::new(2_400 * E18));
    }

    #[test]
    fn mint_without_deposit_fails() {
        let (mut pool, ledger) = seeded(1_000 * E18, 1_000 * E18);
        assert_eq!(
            pool.mint(&ledger, trader(), 2),
            Err(AmmError::InsufficientLiquidityMinted)
        );
    }

    #[test]
    fn balance_above_cap_overflows() {
        let (mut pool, mut ledger) = fresh();
        ledger.mint(asset_a(), pool_addr(), Amount::new(MAX_RESERVE + 1));
        ledger.mint(asset_b(), pool_addr(), Amount::new(E18));
        let Err(AmmError::Overflow(_)) = pool.mint(&ledger, lp(), 1) else {
            panic!("expected Overflow");
        };
        assert_eq!(pool.total_shares(), Liquidity::ZERO);
    }

    // -- burn ---------------------------------------------------------------

    #[test]
    fn burn_returns_pro_rata_share() {
        let (mut pool, mut ledger) = seeded(1_000 * E18, 1_000 * E18);
        let held = pool.shares_of(&lp());
        assert!(pool.transfer_shares(lp(), pool_addr(), held).is_ok());
        let Ok((a, b)) = pool.burn(&mut ledger, lp(), 5) else {
            panic!("burn succeeds");
        };
        assert_eq!(a, Amount::new(1_000 * E18 - 1_000));
        assert_eq!(b, Amount::new(1_000 * E18 - 1_000));
        assert_eq!(pool.total_shares(), MINIMUM_LIQUIDITY);
        assert_eq!(pool.reserves().reserve_a, Amount::new(1_000));
        assert_eq!(ledger.balance_of(asset_a(), lp()), a);
    }

    #[test]
    fn burn_with_nothing_queued_fails() {
        let (mut pool, mut ledger) = seeded(1_000 * E18, 1_000 * E18);
        assert_eq!(
            pool.burn(&mut ledger, lp(), 2),
            Err(AmmError::InsufficientLiquidityBurned)
        );
    }

    #[test]
    fn burn_on_empty_pool_fails() {
        let (mut pool, mut ledger) = fresh();
        assert_eq!(
            pool.burn(&mut ledger, lp(), 2),
            Err(AmmError::InsufficientLiquidityBurned)
        );
    }

    // -- swap ---------------------------------------------------------------

    #[test]
    fn swap_argument_checks() {
        let (mut pool, mut ledger) = seeded(1_000, 1_000 * E18);
        let none = FeeConfig::zero();
        assert_eq!(
            pool.swap(&mut ledger, &none, Amount::ZERO, Amount::ZERO, trader(), 2),
            Err(AmmError::InsufficientOutputAmount)
        );
        assert_eq!(
            pool.swap(&mut ledger, &none, Amount::new(1_000), Amount::ZERO, trader(), 2),
            Err(AmmError::InsufficientLiquidity)
        );
        assert_eq!(
            pool.swap(&mut ledger, &none, Amount::new(1), Amount::ZERO, asset_b(), 2),
            Err(AmmError::InvalidTo)
        );
        assert_eq!(
            pool.swap(&mut ledger, &none, Amount::new(1), Amount::ZERO, trader(), 2),
            Err(AmmError::InsufficientInputAmount)
        );
    }

    #[test]
    fn swap_with_fee_kept_in_pool_grows_k() {
        let (mut pool, mut ledger) = seeded(1_000 * E18, 1_000 * E18);
        let k_before = k(&pool);
        let input = 10 * E18;
        // 0.3%: out = in·997000·R / (R·1e6 + in·997000)
        let Ok(out) = mul_div(
            input * 997_000,
            1_000 * E18,
            1_000 * E18 * 1_000_000 + input * 997_000,
            Rounding::Down,
        ) else {
            panic!("in range");
        };
        ledger.mint(asset_a(), pool_addr(), Amount::new(input));
        let cfg = fees(3_000, None);
        assert!(pool
            .swap(&mut ledger, &cfg, Amount::ZERO, Amount::new(out), trader(), 2)
            .is_ok());
        assert_eq!(ledger.balance_of(asset_b(), trader()), Amount::new(out));
        assert!(k(&pool) > k_before);
    }

    #[test]
    fn swap_asking_one_unit_too_much_violates_k() {
        let (mut pool, mut ledger) = seeded(1_000 * E18, 1_000 * E18);
        let input = 10 * E18;
        let Ok(out) = mul_div(
            input * 997_000,
            1_000 * E18,
            1_000 * E18 * 1_000_000 + input * 997_000,
            Rounding::Down,
        ) else {
            panic!("in range");
        };
        ledger.mint(asset_a(), pool_addr(), Amount::new(input));
        let before = pool.clone();
        let cfg = fees(3_000, None);
        assert_eq!(
            pool.swap(&mut ledger, &cfg, Amount::ZERO, Amount::new(out + 1), trader(), 2),
            Err(AmmError::InvariantViolation)
        );
        assert_eq!(pool, before);
        assert_eq!(ledger.balance_of(asset_b(), trader()), Amount::ZERO);
    }

    #[test]
    fn swap_fee_goes_to_recipient_in_input_asset() {
        let (mut pool, mut ledger) = seeded(1_000 * E18, 1_000 * E18);
        let input = 500 * E18;
        ledger.mint(asset_a(), pool_addr(), Amount::new(input));
        let cfg = fees(10, Some(treasury()));
        let Ok(out) = mul_div(
            input * 999_990,
            1_000 * E18,
            1_000 * E18 * 1_000_000 + input * 999_990,
            Rounding::Down,
        ) else {
            panic!("in range");
        };
        let k_before = k(&pool);
        assert!(pool
            .swap(&mut ledger, &cfg, Amount::ZERO, Amount::new(out), trader(), 2)
            .is_ok());
        let expected_fee = input * 10 / 1_000_000;
        assert_eq!(ledger.balance_of(asset_a(), treasury()), Amount::new(expected_fee));
        assert_eq!(ledger.balance_of(asset_b(), treasury()), Amount::ZERO);
        assert_eq!(
            pool.reserves().reserve_a,
            Amount::new(1_000 * E18 + input - expected_fee)
        );
        assert!(k(&pool) >= k_before);
    }

    #[test]
    fn zero_fee_swap_keeps_k_up_to_rounding() {
        let (mut pool, mut ledger) = seeded(1_000 * E18, 1_000 * E18);
        let k_before = k(&pool);
        let input = 500 * E18;
        let Ok(out) = mul_div(input, 1_000 * E18, 1_000 * E18 + input, Rounding::Down) else {
            panic!("in range");
        };
        ledger.mint(asset_a(), pool_addr(), Amount::new(input));
        assert!(pool
            .swap(&mut ledger, &FeeConfig::zero(), Amount::ZERO, Amount::new(out), trader(), 2)
            .is_ok());
        let k_after = k(&pool);
        assert!(k_after >= k_before);
        // rounding slack is below one unit of output times the input reserve
        assert!(k_after - k_before < U256::from(1_500 * E18));
    }

    // -- lock, oracle, skim, sync ------------------------------------------

    #[test]
    fn nested_settlement_is_rejected_and_lock_released() {
        let (mut pool, ledger) = seeded(1_000 * E18, 1_000 * E18);
        let outcome = pool.locked(|inner| inner.sync(&ledger, 9));
        assert_eq!(outcome, Err(AmmError::Locked));
        assert!(!pool.is_locked());
        assert!(pool.sync(&ledger, 9).is_ok());
    }

    #[test]
    fn accumulators_advance_only_in_a_new_second() {
        let (mut pool, ledger) = seeded(1_000 * E18, 4_000 * E18);
        assert_eq!(pool.price_a_cumulative(), U256::ZERO);
        assert!(pool.sync(&ledger, 1).is_ok());
        assert_eq!(pool.price_a_cumulative(), U256::ZERO);
        assert!(pool.sync(&ledger, 11).is_ok());
        let q112 = U256::from(1u8) << 112usize;
        assert_eq!(pool.price_a_cumulative(), q112 * U256::from(40u8));
        assert_eq!(pool.price_b_cumulative(), q112 / U256::from(4u8) * U256::from(10u8));
        assert_eq!(pool.reserves().last_update, 11);
    }

    #[test]
    fn skim_and_sync_reconcile_donations() {
        let (mut pool, mut ledger) = seeded(1_000 * E18, 1_000 * E18);
        ledger.mint(asset_b(), pool_addr(), Amount::new(7));
        assert!(pool.skim(&mut ledger, trader()).is_ok());
        assert_eq!(ledger.balance_of(asset_b(), trader()), Amount::new(7));

        ledger.mint(asset_a(), pool_addr(), Amount::new(3));
        assert!(pool.sync(&ledger, 2).is_ok());
        assert_eq!(pool.reserves().reserve_a, Amount::new(1_000 * E18 + 3));
    }

    #[test]
    fn events_are_journaled_in_order() {
        let (mut pool, _) = seeded(1_000 * E18, 1_000 * E18);
        let events = pool.drain_events();
        assert_eq!(events.len(), 2);
        let PoolEvent::Sync { .. } = events[0] else {
            panic!("sync first");
        };
        let PoolEvent::Mint { to, .. } = events[1] else {
            panic!("then mint");
        };
        assert_eq!(to, lp());
        assert_eq!(pool.events().len(), 0);
    }

    #[test]
    fn journal_keeps_only_the_newest_entries() {
        let (mut pool, mut ledger) = seeded(1_000 * E18, 1_000 * E18);
        for now in 2..(2 + MAX_PENDING_EVENTS as u64) {
            ledger.mint(asset_a(), pool_addr(), Amount::new(1));
            let Ok(()) = pool.sync(&ledger, now) else {
                panic!("sync");
            };
        }
        assert_eq!(pool.events().len(), MAX_PENDING_EVENTS);
        let Some(PoolEvent::Sync { reserve_a, .. }) = pool.events().last() else {
            panic!("newest entry is the last sync");
        };
        assert_eq!(*reserve_a, pool.reserves().reserve_a);
        // the seed deposit's entries were evicted
        assert!(pool.events().all(|e| matches!(e, PoolEvent::Sync { .. })));
    }

    #[test]
    fn reserves_for_orients_by_input() {
        let (pool, _) = seeded(1_000 * E18, 2_000 * E18);
        assert_eq!(
            pool.reserves_for(&asset_b()),
            Ok((Amount::new(2_000 * E18), Amount::new(1_000 * E18)))
        );
        assert!(pool.reserves_for(&trader()).is_err());
    }
}
