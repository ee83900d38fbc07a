//! User-facing entry points: liquidity management, swaps and quoting.
//!
//! The [`Router`] drives pools held in an [`ExchangeState`].  Every mutating
//! call runs under [`atomically`], so a failed call leaves the registry, the
//! pools and the ledger exactly as they were.
//!
//! ```rust
//! use pairswap::domain::{Address, Amount, SwapPath, TxContext};
//! use pairswap::factory::PoolRegistry;
//! use pairswap::ledger::InMemoryLedger;
//! use pairswap::router::{AddLiquidity, ExchangeState, Router};
//! use pairswap::traits::AssetLedger;
//!
//! let weth = Address::from_low_u64(0xee);
//! let (usdc, dai) = (Address::from_low_u64(1), Address::from_low_u64(2));
//! let alice = Address::from_low_u64(0xa1);
//! let router = Router::new(Address::from_low_u64(0x40), weth).expect("valid router");
//!
//! let mut ledger = InMemoryLedger::new(weth);
//! for asset in [usdc, dai] {
//!     ledger.mint(asset, alice, Amount::new(1_000_000));
//!     ledger.approve(asset, alice, router.address(), Amount::MAX);
//! }
//! let registry = PoolRegistry::new(Address::from_low_u64(0x60)).expect("valid setter");
//! let mut state = ExchangeState::new(registry, ledger);
//! let ctx = TxContext::new(alice, 1);
//!
//! router
//!     .add_liquidity(&mut state, &ctx, &AddLiquidity {
//!         asset_x: usdc,
//!         asset_y: dai,
//!         amount_x_desired: Amount::new(100_000),
//!         amount_y_desired: Amount::new(100_000),
//!         amount_x_min: Amount::ZERO,
//!         amount_y_min: Amount::ZERO,
//!         to: alice,
//!         deadline: 10,
//!     })
//!     .expect("first deposit");
//!
//! let path = SwapPath::new(vec![usdc, dai]).expect("two hops");
//! let amounts = router
//!     .swap_exact_tokens_for_tokens(&mut state, &ctx, Amount::new(1_000), Amount::ZERO, &path, alice, 10)
//!     .expect("swap");
//! assert_eq!(amounts[1], Amount::new(990));
//! assert_eq!(state.ledger.balance_of(dai, alice), Amount::new(900_990));
//! ```

mod exchange_router;
mod liquidity;
mod quote;
mod state;
mod swap;

pub use exchange_router::Router;
pub use liquidity::{AddLiquidity, AddLiquidityNative, RemoveLiquidity, RemoveLiquidityNative};
pub use quote::{get_amount_in, get_amount_out, get_amounts_in, get_amounts_out, quote, sort_assets};
pub use state::{ExchangeState, atomically};
