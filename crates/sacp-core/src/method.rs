//! Invoked method reference: `(declaring class name, method name)`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, SacpError};

/// Separator between the class and method segments.
pub const METHOD_SEPARATOR: char = '#';

/// Target of a remote invocation, as extracted by the interceptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MethodRef {
    pub class_name: String,
    pub method_name: String,
}

impl MethodRef {
    pub fn new(class_name: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            method_name: method_name.into(),
        }
    }

    /// Parse `Class#method`. Both segments are required.
    pub fn parse(s: &str) -> Result<Self> {
        let (class_name, method_name) = s.split_once(METHOD_SEPARATOR).ok_or_else(|| {
            SacpError::BadRequest(format!("invalid method reference: {s} (expected Class#method)"))
        })?;
        if class_name.trim().is_empty() || method_name.trim().is_empty() {
            return Err(SacpError::BadRequest(format!(
                "invalid method reference: {s} (empty class or method)"
            )));
        }
        Ok(Self::new(class_name, method_name))
    }

    /// `class#method`, the form used in literal patterns and diagnostics.
    pub fn qualified(&self) -> String {
        let mut out = String::with_capacity(self.class_name.len() + self.method_name.len() + 1);
        out.push_str(&self.class_name);
        out.push(METHOD_SEPARATOR);
        out.push_str(&self.method_name);
        out
    }
}

impl fmt::Display for MethodRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.class_name, METHOD_SEPARATOR, self.method_name)
    }
}

impl FromStr for MethodRef {
    type Err = SacpError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
