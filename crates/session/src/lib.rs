//! `zentro-session` — authentication session state.
//!
//! Consumes, never issues: tokens come from an external auth backend. This
//! crate keeps the signed-in user and token in memory, mirrors them into
//! durable storage under fixed keys, and exposes the authenticated flag the
//! cart gates on.

pub mod session;

pub use session::{Session, User, TOKEN_KEY, USER_KEY};
