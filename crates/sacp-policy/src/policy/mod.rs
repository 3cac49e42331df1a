//! Policy layer (pattern cache, union matching, decision engine, chain).
//!
//! Resolves the allowed-service union for a call and matches the invoked
//! method against it, exact entries first and wildcards second.

pub mod allowlist;
pub mod cache;
pub mod chain;
pub mod engine;

pub use cache::PatternCache;
pub use chain::{AccessControlPolicy, PolicyChain};
pub use engine::AccessDecisionEngine;
