//! Inventory domain module.
//!
//! This crate contains the flavor record and the store that owns it,
//! implemented purely as in-memory domain logic (no IO, no HTTP, no logging).

pub mod flavor;
pub mod store;

pub use flavor::{Flavor, INITIAL_STOCK, StockDirection, resolve_amount};
pub use store::{FlavorStore, InMemoryFlavorStore};
