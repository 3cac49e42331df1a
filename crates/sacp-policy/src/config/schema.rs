use std::collections::HashSet;

use serde::Deserialize;
use sacp_core::error::{Result, SacpError};
use sacp_core::pattern::split_allowed_services;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SacpConfig {
    pub version: u32,

    #[serde(default)]
    pub cache: CacheSection,

    #[serde(default)]
    pub tenants: Vec<TenantConfig>,
}

impl SacpConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SacpError::UnsupportedVersion);
        }
        if self.tenants.is_empty() {
            return Err(SacpError::BadRequest("tenants must not be empty".into()));
        }

        self.cache.validate()?;

        let mut seen = HashSet::new();
        for t in &self.tenants {
            t.validate()?;
            if !seen.insert(t.id.as_str()) {
                return Err(SacpError::BadRequest(format!("duplicate tenant id: {}", t.id)));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheSection {
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,

    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            max_entries: default_max_entries(),
        }
    }
}

impl CacheSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=1_000_000).contains(&self.max_entries) {
            return Err(SacpError::BadRequest(
                "cache.max_entries must be between 1 and 1000000".into(),
            ));
        }
        Ok(())
    }
}

fn default_cache_enabled() -> bool {
    true
}
fn default_max_entries() -> usize {
    4096
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TenantConfig {
    pub id: String,
    #[serde(default)]
    pub profiles: Vec<ProfileConfig>,
}

impl TenantConfig {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(SacpError::BadRequest("tenant id must not be blank".into()));
        }

        let mut seen = HashSet::new();
        for p in &self.profiles {
            if p.name.trim().is_empty() {
                return Err(SacpError::BadRequest(format!(
                    "tenant {}: profile name must not be blank",
                    self.id
                )));
            }
            if !seen.insert(p.name.as_str()) {
                return Err(SacpError::BadRequest(format!(
                    "tenant {}: duplicate profile name: {}",
                    self.id, p.name
                )));
            }
            if !p.allowed_services.is_empty() && p.allowed_services_text.is_some() {
                return Err(SacpError::BadRequest(format!(
                    "tenant {} profile {}: set allowed_services or allowed_services_text, not both",
                    self.id, p.name
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    pub name: String,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub allowed_services: Vec<String>,

    /// Newline-separated form, one pattern per line.
    #[serde(default)]
    pub allowed_services_text: Option<String>,
}

impl ProfileConfig {
    /// Allowed-service patterns in declaration order.
    pub fn patterns(&self) -> Vec<String> {
        match &self.allowed_services_text {
            Some(text) => split_allowed_services(text),
            None => self.allowed_services.clone(),
        }
    }
}
