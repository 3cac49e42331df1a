//! Shared application state for the SACP policy layer.
//!
//! Builds the profile store and decision engine from config, registers the
//! engine in the policy chain, and warns about profiles that can never allow
//! anything.

use std::sync::Arc;

use sacp_core::error::{Result, SacpError};
use sacp_core::pattern::ServicePattern;

use crate::config::SacpConfig;
use crate::policy::{AccessDecisionEngine, PatternCache, PolicyChain};
use crate::store::{InMemoryProfileStore, ProfileStore};

const FAIL_FAST_ON_INERT_PATTERN: bool = false; // if changed to true, boot fails.

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    store: Arc<InMemoryProfileStore>,
    engine: Arc<AccessDecisionEngine>,
}

struct AppStateInner {
    cfg: SacpConfig,
    chain: PolicyChain,
    /// `(tenant, profile)` pairs holding an allow-all pattern.
    allow_all: Vec<(String, String)>,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: SacpConfig) -> Result<Self> {
        // 1) Seed the profile store
        let store = Arc::new(InMemoryProfileStore::from_config(&cfg));

        // 2) Pattern sanity check
        let mut allow_all = Vec::new();
        for t in &cfg.tenants {
            for p in &t.profiles {
                let patterns = p.patterns();
                if patterns.is_empty() {
                    tracing::warn!(tenant=%t.id, profile=%p.name, "profile has no allowed services (denies every call)");
                }
                let mut grants_all = false;
                for raw in &patterns {
                    let parsed = ServicePattern::parse(raw);
                    if parsed.is_allow_all() {
                        tracing::info!(tenant=%t.id, profile=%p.name, pattern=%raw, "profile grants every service");
                        grants_all = true;
                    }
                    if parsed.matches_nothing() {
                        tracing::warn!(tenant=%t.id, profile=%p.name, pattern=%raw, "allowed service pattern can never match");
                        if FAIL_FAST_ON_INERT_PATTERN {
                            return Err(SacpError::BadRequest(format!(
                                "tenant {} profile {} has a pattern that matches nothing: {raw:?}",
                                t.id, p.name
                            )));
                        }
                    }
                }
                if grants_all {
                    allow_all.push((t.id.clone(), p.name.clone()));
                }
            }
        }

        // 3) Engine + chain
        let dyn_store: Arc<dyn ProfileStore> = store.clone();
        let engine = Arc::new(AccessDecisionEngine::new(
            dyn_store,
            PatternCache::from_config(&cfg.cache),
        ));

        let mut chain = PolicyChain::new();
        chain.register(engine.clone());

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                chain,
                allow_all,
            }),
            store,
            engine,
        })
    }

    pub fn cfg(&self) -> &SacpConfig {
        &self.inner.cfg
    }

    /// Profiles that admit every class and method, in config order.
    pub fn allow_all_profiles(&self) -> &[(String, String)] {
        &self.inner.allow_all
    }

    pub fn chain(&self) -> &PolicyChain {
        &self.inner.chain
    }

    pub fn store(&self) -> Arc<InMemoryProfileStore> {
        Arc::clone(&self.store)
    }

    pub fn engine(&self) -> Arc<AccessDecisionEngine> {
        Arc::clone(&self.engine)
    }
}
