//! Top-level facade crate for SACP.
//!
//! Re-exports core types and the policy library so users can depend on a single crate.

pub mod core {
    pub use sacp_core::*;
}

pub mod policy {
    pub use sacp_policy::*;
}
