//! Outcome of one access decision.

use serde::Serialize;

use crate::error::{Result, SacpError};

/// Verdict for a single invocation. Ephemeral, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Decision {
    /// No active profile context: the policy does not restrict this call.
    Unrestricted,
    /// Allowed by `pattern` from the resolved union.
    Allow { pattern: String },
    /// Nothing matched. `method` is `class#method`.
    Deny { method: String },
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        !matches!(self, Decision::Deny { .. })
    }

    /// Turn a deny verdict into the security failure the interceptor raises.
    pub fn into_result(self) -> Result<Decision> {
        match self {
            Decision::Deny { method } => Err(SacpError::AccessDenied { method }),
            other => Ok(other),
        }
    }
}
