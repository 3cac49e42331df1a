//! Profile store seam.
//!
//! The engine only reads through [`ProfileStore`]; how profiles are
//! administered or persisted belongs to the implementation.

pub mod memory;

use sacp_core::error::StoreError;

pub use memory::{InMemoryProfileStore, ProfileRecord};

/// Tenant-scoped lookup of a profile's allowed-service patterns.
pub trait ProfileStore: Send + Sync {
    /// Patterns of profile `name` in tenant `tenant_id`, in stored order.
    fn lookup(&self, tenant_id: &str, name: &str) -> Result<Vec<String>, StoreError>;
}
