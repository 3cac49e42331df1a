//! Allowed-service union resolution and matching.
//!
//! The union is rebuilt for every decision from the active profiles; it is
//! never cached because profile membership can change between calls.

use std::collections::HashSet;

use sacp_core::error::Result;
use sacp_core::{Decision, MethodRef};

use crate::store::ProfileStore;

use super::cache::PatternCache;

/// Union of every pattern contributed by `profiles` in `tenant_id`.
/// Any lookup failure aborts the whole resolution.
pub fn resolve_union(
    store: &dyn ProfileStore,
    tenant_id: &str,
    profiles: &[String],
) -> Result<HashSet<String>> {
    let mut union = HashSet::new();
    for name in profiles {
        let patterns = store.lookup(tenant_id, name)?;
        union.extend(patterns);
    }
    Ok(union)
}

/// Exact class, then exact `class#method`, then a full pattern scan.
pub fn match_union(union: &HashSet<String>, cache: &PatternCache, method: &MethodRef) -> Decision {
    if union.contains(&method.class_name) {
        return Decision::Allow {
            pattern: method.class_name.clone(),
        };
    }

    let qualified = method.qualified();
    if union.contains(&qualified) {
        return Decision::Allow { pattern: qualified };
    }

    let hit = union.iter().find(|raw| {
        cache
            .get_or_parse(raw)
            .matches(&method.class_name, &method.method_name)
    });

    match hit {
        Some(raw) => Decision::Allow {
            pattern: raw.clone(),
        },
        None => Decision::Deny { method: qualified },
    }
}
