//! Reference implementation of the consumed asset interfaces.

mod memory;

pub use memory::InMemoryLedger;
