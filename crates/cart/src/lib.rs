//! `zentro-cart` — the shopping cart store.
//!
//! Owns the authoritative in-memory cart for the active session, keeps it
//! synchronized with durable key-value storage, enforces the
//! one-line-per-product invariant, and gates additions on authentication.

pub mod store;

pub use store::{AddOutcome, CartLine, CartStore, CART_STORAGE_KEY};
