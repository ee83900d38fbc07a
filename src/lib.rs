//! # pairswap
//!
//! Constant-product automated market maker: any two fungible assets trade
//! against a shared pool that holds `reserve_a · reserve_b` constant (or
//! growing) across swaps.
//!
//! The crate is the exchange core.  Asset custody and the native-asset
//! wrapper are consumed through traits; an in-memory implementation of both
//! ships for tests and simulations.
//!
//! - **Pool Registry**: one pool per canonical pair at a deterministic
//!   address, global fee schedule, fee governance.
//! - **Pool**: reserves, share mint/burn, the fee-adjusted product check,
//!   reentrancy lock, UQ112.112 price accumulators.
//! - **Router**: multi-hop quoting and swaps, native wrap/unwrap, deadline
//!   and slippage checks, the liquidity-provision fee, all-or-nothing
//!   execution.
//!
//! # Quick Start
//!
//! ```rust
//! use pairswap::prelude::*;
//!
//! let weth = Address::from_low_u64(0xee);
//! let (usdc, dai) = (Address::from_low_u64(1), Address::from_low_u64(2));
//! let lp = Address::from_low_u64(0xa1);
//! let gov = Address::from_low_u64(0x60);
//!
//! // 1. Registry governed by `gov`, charging a 0.3% swap fee
//! let fees = FeeConfig::new(FeeRate::new(3_000), FeeRate::ZERO, None).expect("valid fees");
//! let registry = PoolRegistry::from_config(&RegistryConfig::new(gov, fees).expect("valid config"))
//!     .expect("registry built");
//!
//! // 2. Fund the liquidity provider and approve the router
//! let router = Router::new(Address::from_low_u64(0x40), weth).expect("valid router");
//! let mut ledger = InMemoryLedger::new(weth);
//! for asset in [usdc, dai] {
//!     ledger.mint(asset, lp, Amount::new(10_000_000));
//!     ledger.approve(asset, lp, router.address(), Amount::MAX);
//! }
//! let mut state = ExchangeState::new(registry, ledger);
//! let ctx = TxContext::new(lp, 1);
//!
//! // 3. First deposit creates the pool
//! let (_, _, shares) = router
//!     .add_liquidity(&mut state, &ctx, &AddLiquidity {
//!         asset_x: usdc,
//!         asset_y: dai,
//!         amount_x_desired: Amount::new(1_000_000),
//!         amount_y_desired: Amount::new(1_000_000),
//!         amount_x_min: Amount::ZERO,
//!         amount_y_min: Amount::ZERO,
//!         to: lp,
//!         deadline: 100,
//!     })
//!     .expect("deposit");
//! assert_eq!(shares, Liquidity::new(1_000_000 - 1_000));
//!
//! // 4. Swap 10 000 USDC for DAI
//! let path = SwapPath::new(vec![usdc, dai]).expect("two hops");
//! let amounts = router
//!     .swap_exact_tokens_for_tokens(&mut state, &ctx, Amount::new(10_000), Amount::ZERO, &path, lp, 100)
//!     .expect("swap");
//! assert_eq!(amounts[1], Amount::new(9_871));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Caller     │  TxContext { sender, now, value }
//! └──────┬───────┘
//!        │ add/remove liquidity, swaps
//!        ▼
//! ┌──────────────┐
//! │    Router     │  quotes, deadlines, slippage, native wrap, rollback
//! └──────┬───────┘
//!        │ resolves pools through
//!        ▼
//! ┌──────────────┐
//! │ PoolRegistry  │  canonical pairs → deterministic addresses, FeeConfig
//! └──────┬───────┘
//!        │ mint / burn / swap
//!        ▼
//! ┌──────────────┐
//! │   PairPool    │  reserves, shares, product check, lock, oracle
//! └──────┬───────┘
//!        │ AssetLedger + NativeWrapper
//!        ▼
//! ┌──────────────┐
//! │    Ledger     │  external balances (InMemoryLedger in tests)
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Address`](domain::Address), [`Amount`](domain::Amount), [`FeeRate`](domain::FeeRate), [`SwapPath`](domain::SwapPath), … |
//! | [`traits`] | Consumed seams: [`AssetLedger`](traits::AssetLedger), [`NativeWrapper`](traits::NativeWrapper), plus [`FromConfig`](traits::FromConfig) |
//! | [`config`] | [`FeeConfig`](config::FeeConfig) and [`RegistryConfig`](config::RegistryConfig) |
//! | [`pools`]  | [`PairPool`](pools::PairPool) and its share ledger, lock, oracle and events |
//! | [`factory`] | [`PoolRegistry`](factory::PoolRegistry) and deterministic pool addresses |
//! | [`router`] | [`Router`](router::Router), quoting functions, all-or-nothing execution |
//! | [`ledger`] | [`InMemoryLedger`](ledger::InMemoryLedger) reference implementation |
//! | [`math`]   | Checked and wide-integer arithmetic |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (`info` for pair creation and
//! governance, `debug` for settlements and router calls, `warn` for
//! rollbacks) and never installs a subscriber.

pub mod config;
pub mod domain;
pub mod error;
pub mod factory;
pub mod ledger;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod router;
pub mod traits;
