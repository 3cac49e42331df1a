//! SACP policy library entry.
//!
//! This crate wires the profile store, the request context, and the access
//! decision engine into a policy chain an invocation interceptor can call
//! before a remote service method runs. It is consumed by the `sacp-check`
//! binary and by integration tests.

pub mod app_state;
pub mod cli;
pub mod config;
pub mod context;
pub mod policy;
pub mod store;
