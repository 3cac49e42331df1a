//! SACP core: method references, allowed-service patterns, decisions, and the
//! shared error surface.
//!
//! This crate holds the pure matching primitives used by the policy engine.
//! It carries no store, config, or runtime dependencies so it can be embedded
//! by any invocation interceptor.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed patterns never fail: they simply match nothing.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod decision;
pub mod error;
pub mod method;
pub mod pattern;

/// Shared result type.
pub use error::{Result, SacpError, StoreError};

pub use decision::Decision;
pub use method::MethodRef;
pub use pattern::ServicePattern;
