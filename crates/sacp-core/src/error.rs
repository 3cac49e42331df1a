//! Shared error type across SACP crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed config.
    BadRequest,
    /// Denied by an access control policy.
    NotAllowed,
    /// An active profile could not be resolved.
    ResolutionFailed,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ClientCode {
    /// String representation used at the protocol boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotAllowed => "NOT_ALLOWED",
            ClientCode::ResolutionFailed => "RESOLUTION_FAILED",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Failure reported by a profile store lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("profile not found: tenant={tenant_id} name={name}")]
    NotFound { tenant_id: String, name: String },
    #[error("profile store unavailable: {0}")]
    Unavailable(String),
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SacpError>;

/// Unified error type used by core and policy crates.
#[derive(Debug, Error)]
pub enum SacpError {
    /// No allowed pattern matched. `method` is rendered as `class#method`.
    #[error("access denied to {method}")]
    AccessDenied { method: String },
    /// An active profile lookup failed; the decision fails closed.
    #[error("profile resolution failed: {0}")]
    ResolutionFailure(#[from] StoreError),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl SacpError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            SacpError::AccessDenied { .. } => ClientCode::NotAllowed,
            SacpError::ResolutionFailure(_) => ClientCode::ResolutionFailed,
            SacpError::BadRequest(_) => ClientCode::BadRequest,
            SacpError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            SacpError::Internal(_) => ClientCode::Internal,
        }
    }

    /// True for the two security failures an interceptor must surface as a
    /// hard stop of the remote call.
    pub fn is_security_failure(&self) -> bool {
        matches!(
            self,
            SacpError::AccessDenied { .. } | SacpError::ResolutionFailure(_)
        )
    }
}
