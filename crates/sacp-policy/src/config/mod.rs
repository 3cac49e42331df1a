//! Policy config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use sacp_core::error::{Result, SacpError};

pub use schema::{CacheSection, ProfileConfig, SacpConfig, TenantConfig};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<SacpConfig> {
    let s = fs::read_to_string(path.as_ref())
        .map_err(|e| SacpError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<SacpConfig> {
    let cfg: SacpConfig = serde_yaml::from_str(s)
        .map_err(|e| SacpError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
