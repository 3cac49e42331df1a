use std::sync::Arc;

use sacp_core::error::Result;
use sacp_core::MethodRef;

use crate::context::RequestContext;

use super::engine::AccessDecisionEngine;

/// A check run before a remote service method proceeds.
pub trait AccessControlPolicy: Send + Sync {
    fn name(&self) -> &'static str;
    fn on_service_remote_access(&self, ctx: &RequestContext, method: &MethodRef) -> Result<()>;
}

impl AccessControlPolicy for AccessDecisionEngine {
    fn name(&self) -> &'static str {
        "sacp"
    }

    fn on_service_remote_access(&self, ctx: &RequestContext, method: &MethodRef) -> Result<()> {
        self.evaluate(ctx, method).map(|_| ())
    }
}

/// Ordered set of policies consulted by the invocation interceptor.
/// Every policy must pass; the first failure stops the call.
#[derive(Default, Clone)]
pub struct PolicyChain {
    policies: Vec<Arc<dyn AccessControlPolicy>>,
}

impl PolicyChain {
    pub fn new() -> Self {
        Self {
            policies: Vec::new(),
        }
    }

    pub fn register(&mut self, policy: Arc<dyn AccessControlPolicy>) {
        self.policies.push(policy);
    }

    pub fn registered(&self) -> Vec<&'static str> {
        self.policies.iter().map(|p| p.name()).collect()
    }

    pub fn check(&self, ctx: &RequestContext, method: &MethodRef) -> Result<()> {
        for p in &self.policies {
            if let Err(e) = p.on_service_remote_access(ctx, method) {
                tracing::warn!(policy = p.name(), method=%method, code = e.client_code().as_str(), "remote access rejected");
                return Err(e);
            }
        }
        Ok(())
    }
}
