//! Property-based tests for the constant-product pool.
//!
//! 1. **Product preservation**: a swap accepted by the pool never lowers
//!    `reserve_a · reserve_b`, whether the fee stays in the pool or leaves.
//! 2. **Liquidity conservation**: deposit then withdraw returns at most the
//!    deposit, short only by rounding.
//! 3. **Quote consistency**: the exact-out input for an exact-in output
//!    never exceeds the original input.

use alloy_primitives::U256;
use proptest::prelude::*;

use super::PairPool;
use crate::config::FeeConfig;
use crate::domain::{Address, Amount, AssetPair, FeeRate, Liquidity};
use crate::ledger::InMemoryLedger;
use crate::router::{get_amount_in, get_amount_out};
use crate::traits::AssetLedger;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn asset_a() -> Address {
    Address::from_low_u64(0xa)
}

fn asset_b() -> Address {
    Address::from_low_u64(0xb)
}

fn pool_addr() -> Address {
    Address::from_low_u64(0x9001)
}

fn seeded(ra: u128, rb: u128) -> (PairPool, InMemoryLedger) {
    let Ok(pair) = AssetPair::new(asset_a(), asset_b()) else {
        panic!("distinct assets");
    };
    let mut pool = PairPool::new(pool_addr(), pair);
    let mut ledger = InMemoryLedger::new(Address::from_low_u64(0xee));
    ledger.mint(asset_a(), pool_addr(), Amount::new(ra));
    ledger.mint(asset_b(), pool_addr(), Amount::new(rb));
    let Ok(_) = pool.mint(&ledger, Address::from_low_u64(0x1111), 1) else {
        panic!("seed deposit mints");
    };
    (pool, ledger)
}

fn k(pool: &PairPool) -> U256 {
    let r = pool.reserves();
    r.reserve_a.to_u256() * r.reserve_b.to_u256()
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Reserves from 1e9 to 1e24 (well inside the 112-bit cap).
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000_000_000u128..=1_000_000_000_000_000_000_000_000u128
}

/// Swap fee from zero to 3%.
fn fee_strategy() -> impl Strategy<Value = u32> {
    0u32..=30_000u32
}

// ---------------------------------------------------------------------------
// Property 1: Product preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_never_lowers_k(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fraction in 1u128..=1_000u128,
        fee in fee_strategy(),
        extract in any::<bool>(),
    ) {
        let (mut pool, mut ledger) = seeded(ra, rb);
        let input = (ra / 1_000 * fraction).max(1);
        let Ok(out) = get_amount_out(
            Amount::new(input),
            Amount::new(ra),
            Amount::new(rb),
            FeeRate::new(fee),
        ) else {
            return Ok(());
        };
        if out.is_zero() { return Ok(()); }

        let fees = FeeConfig {
            swap_fee: FeeRate::new(fee),
            liquidity_fee: FeeRate::ZERO,
            fee_recipient: extract.then(|| Address::from_low_u64(0x7ea5)),
        };
        let k_before = k(&pool);
        ledger.mint(asset_a(), pool_addr(), Amount::new(input));
        let outcome = pool.swap(
            &mut ledger,
            &fees,
            Amount::ZERO,
            out,
            Address::from_low_u64(0x2222),
            2,
        );
        prop_assert!(outcome.is_ok(), "quoted swap rejected: {:?}", outcome);
        prop_assert!(
            k(&pool) >= k_before,
            "k decreased: {} < {}",
            k(&pool), k_before
        );
    }
}

// ---------------------------------------------------------------------------
// Property 2: Liquidity conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_then_withdraw_returns_deposit(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        percent in 1u128..=500u128,
    ) {
        let (mut pool, mut ledger) = seeded(ra, rb);
        let total_before = pool.total_shares().get();
        let deposit_a = ra * percent / 100;
        let deposit_b = rb * percent / 100;
        let lp = Address::from_low_u64(0x3333);

        ledger.mint(asset_a(), pool_addr(), Amount::new(deposit_a));
        ledger.mint(asset_b(), pool_addr(), Amount::new(deposit_b));
        let Ok(shares) = pool.mint(&ledger, lp, 2) else {
            return Ok(());
        };
        prop_assert!(pool.transfer_shares(lp, pool_addr(), shares).is_ok());
        let Ok((out_a, out_b)) = pool.burn(&mut ledger, lp, 3) else {
            return Err(TestCaseError::fail("burn after mint failed"));
        };

        prop_assert!(out_a.get() <= deposit_a, "withdrew more A than deposited");
        prop_assert!(out_b.get() <= deposit_b, "withdrew more B than deposited");
        let slack_a = ra / ra.min(rb) + ra / total_before + 4;
        let slack_b = rb / ra.min(rb) + rb / total_before + 4;
        prop_assert!(deposit_a - out_a.get() <= slack_a, "A lost {} > {}", deposit_a - out_a.get(), slack_a);
        prop_assert!(deposit_b - out_b.get() <= slack_b, "B lost {} > {}", deposit_b - out_b.get(), slack_b);
        prop_assert_eq!(pool.shares_of(&lp), Liquidity::ZERO);
    }
}

// ---------------------------------------------------------------------------
// Property 3: Quote consistency
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_exact_out_input_not_above_exact_in(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        input in 1u128..=1_000_000_000_000_000_000_000u128,
        fee in fee_strategy(),
    ) {
        let fee = FeeRate::new(fee);
        let (ra, rb) = (Amount::new(ra), Amount::new(rb));
        let Ok(out) = get_amount_out(Amount::new(input), ra, rb, fee) else {
            return Ok(());
        };
        if out.is_zero() { return Ok(()); }
        let Ok(needed) = get_amount_in(out, ra, rb, fee) else {
            return Err(TestCaseError::fail("exact-out quote failed for a reachable output"));
        };
        prop_assert!(needed.get() <= input, "needed {} > input {}", needed, input);

        let Ok(again) = get_amount_out(needed, ra, rb, fee) else {
            return Err(TestCaseError::fail("exact-in quote failed"));
        };
        prop_assert!(again >= out, "minimum input bought {} < {}", again, out);
    }
}

#[test]
fn ledger_balances_follow_reserves() {
    let (pool, ledger) = seeded(5_000_000_000, 7_000_000_000);
    assert_eq!(ledger.balance_of(asset_a(), pool_addr()), pool.reserves().reserve_a);
    assert_eq!(ledger.balance_of(asset_b(), pool_addr()), pool.reserves().reserve_b);
}
