use std::sync::Arc;

use dashmap::DashMap;

use sacp_core::pattern::ServicePattern;

use crate::config::CacheSection;

/// Parsed patterns keyed by their raw string.
///
/// Only pure parse results live here, never a resolved union, so profile
/// changes are always visible to the next decision.
pub struct PatternCache {
    enabled: bool,
    max_entries: usize,
    parsed: DashMap<String, Arc<ServicePattern>>,
}

impl PatternCache {
    pub fn new(enabled: bool, max_entries: usize) -> Self {
        Self {
            enabled,
            max_entries: max_entries.max(1),
            parsed: DashMap::new(),
        }
    }

    pub fn from_config(cfg: &CacheSection) -> Self {
        Self::new(cfg.enabled, cfg.max_entries)
    }

    /// Parse on every call.
    pub fn disabled() -> Self {
        Self::new(false, 1)
    }

    pub fn get_or_parse(&self, raw: &str) -> Arc<ServicePattern> {
        if !self.enabled {
            return Arc::new(ServicePattern::parse(raw));
        }
        if let Some(p) = self.parsed.get(raw) {
            return Arc::clone(p.value());
        }

        let p = Arc::new(ServicePattern::parse(raw));
        if self.parsed.len() >= self.max_entries {
            tracing::debug!(len = self.parsed.len(), "pattern cache full, clearing");
            self.parsed.clear();
        }
        self.parsed.insert(raw.to_string(), Arc::clone(&p));
        p
    }

    pub fn len(&self) -> usize {
        self.parsed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsed.is_empty()
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::from_config(&CacheSection::default())
    }
}
