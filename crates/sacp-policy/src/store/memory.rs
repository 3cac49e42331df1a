use dashmap::DashMap;

use sacp_core::error::StoreError;

use crate::config::SacpConfig;

use super::ProfileStore;

/// One stored profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord {
    pub name: String,
    pub title: Option<String>,
    pub allowed_services: Vec<String>,
}

/// Concurrent in-memory store:
/// - `(tenant_id, profile_name) -> ProfileRecord`
///
/// Entries may be replaced or removed while decisions are running; each
/// lookup sees the record as of that call.
#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: DashMap<(String, String), ProfileRecord>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self {
            profiles: DashMap::new(),
        }
    }

    /// Seed the store with every profile declared in config.
    pub fn from_config(cfg: &SacpConfig) -> Self {
        let store = Self::new();
        for t in &cfg.tenants {
            for p in &t.profiles {
                store.upsert(
                    &t.id,
                    ProfileRecord {
                        name: p.name.clone(),
                        title: p.title.clone(),
                        allowed_services: p.patterns(),
                    },
                );
            }
        }
        store
    }

    /// Insert or replace a profile. Returns the previous record, if any.
    pub fn upsert(&self, tenant_id: &str, record: ProfileRecord) -> Option<ProfileRecord> {
        self.profiles
            .insert((tenant_id.to_string(), record.name.clone()), record)
    }

    pub fn remove(&self, tenant_id: &str, name: &str) -> Option<ProfileRecord> {
        self.profiles
            .remove(&(tenant_id.to_string(), name.to_string()))
            .map(|(_, r)| r)
    }

    pub fn get(&self, tenant_id: &str, name: &str) -> Option<ProfileRecord> {
        self.profiles
            .get(&(tenant_id.to_string(), name.to_string()))
            .map(|r| r.value().clone())
    }

    /// Profile names for one tenant (unordered).
    pub fn profile_names(&self, tenant_id: &str) -> Vec<String> {
        self.profiles
            .iter()
            .filter(|e| e.key().0 == tenant_id)
            .map(|e| e.key().1.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn lookup(&self, tenant_id: &str, name: &str) -> Result<Vec<String>, StoreError> {
        self.profiles
            .get(&(tenant_id.to_string(), name.to_string()))
            .map(|r| r.value().allowed_services.clone())
            .ok_or_else(|| StoreError::NotFound {
                tenant_id: tenant_id.to_string(),
                name: name.to_string(),
            })
    }
}
