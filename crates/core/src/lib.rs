//! `zentro-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod auth;
pub mod entity;
pub mod error;
pub mod id;

pub use auth::{AuthState, LoginRedirect};
pub use entity::{find_by_id, find_by_id_mut, Entity};
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
