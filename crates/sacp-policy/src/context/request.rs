/// Read-only inputs for one access decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Tenant identifier.
    tenant_id: String,
    /// Active profile names in order. `None` means the call is outside any
    /// profile-scoped context and is not restricted by this policy.
    active_profiles: Option<Vec<String>>,
}

impl RequestContext {
    pub fn new(tenant_id: impl Into<String>, active_profiles: Option<Vec<String>>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            active_profiles,
        }
    }

    /// Context with no active profile set.
    pub fn unrestricted(tenant_id: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            active_profiles: None,
        }
    }

    pub fn with_profiles<I, S>(tenant_id: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tenant_id: tenant_id.into(),
            active_profiles: Some(names.into_iter().map(Into::into).collect()),
        }
    }

    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    pub fn active_profiles(&self) -> Option<&[String]> {
        self.active_profiles.as_deref()
    }
}

/// Parse a comma-separated profile list as carried by an interceptor.
/// `-` means no active profile set; names are trimmed and blanks dropped.
pub fn parse_profile_names(raw: &str) -> Option<Vec<String>> {
    if raw.trim() == "-" {
        return None;
    }
    Some(
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    )
}
