use std::sync::Arc;

use sacp_core::error::Result;
use sacp_core::{Decision, MethodRef};

use crate::context::RequestContext;
use crate::store::ProfileStore;

use super::allowlist::{match_union, resolve_union};
use super::cache::PatternCache;

/// Access decision engine for service access control profiles.
/// Construct once at startup, then share via Arc.
pub struct AccessDecisionEngine {
    store: Arc<dyn ProfileStore>,
    cache: PatternCache,
}

impl AccessDecisionEngine {
    pub fn new(store: Arc<dyn ProfileStore>, cache: PatternCache) -> Self {
        Self { store, cache }
    }

    pub fn cache(&self) -> &PatternCache {
        &self.cache
    }

    /// Compute the verdict without raising on deny.
    ///
    /// Returns `Err` only when an active profile cannot be resolved; the
    /// call must then be treated as denied.
    pub fn decide(&self, ctx: &RequestContext, method: &MethodRef) -> Result<Decision> {
        let Some(profiles) = ctx.active_profiles() else {
            tracing::debug!(tenant=%ctx.tenant_id(), method=%method, "no active profiles, unrestricted");
            return Ok(Decision::Unrestricted);
        };

        let union = resolve_union(self.store.as_ref(), ctx.tenant_id(), profiles).map_err(|e| {
            tracing::warn!(tenant=%ctx.tenant_id(), method=%method, error=%e, "profile resolution failed");
            e
        })?;

        let decision = match_union(&union, &self.cache, method);
        match &decision {
            Decision::Allow { pattern } => {
                tracing::debug!(tenant=%ctx.tenant_id(), method=%method, pattern=%pattern, "access allowed");
            }
            Decision::Deny { .. } => {
                tracing::warn!(tenant=%ctx.tenant_id(), method=%method, profiles=?profiles, "access denied");
            }
            Decision::Unrestricted => {}
        }
        Ok(decision)
    }

    /// Decide and raise `AccessDenied` on deny.
    pub fn evaluate(&self, ctx: &RequestContext, method: &MethodRef) -> Result<Decision> {
        self.decide(ctx, method)?.into_result()
    }
}
