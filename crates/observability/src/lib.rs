//! `zentro-observability` — tracing/logging initialization for consuming
//! applications.

pub mod tracing;

pub use crate::tracing::{init, init_with_default};
