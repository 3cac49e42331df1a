//! Allowed-service pattern parsing and matching.
//!
//! A pattern is `class[#method]`. The first `#` splits the two segments and
//! each segment may carry one trailing `*`, turning it into a prefix match:
//!
//! - `com.acme.FooService` any method of that class
//! - `com.acme.*` any method of any class under the prefix
//! - `com.acme.FooService#get*` methods of that class starting with `get`
//! - `*` everything
//!
//! Malformed or empty patterns never error; they match nothing.

use crate::method::METHOD_SEPARATOR;

const WILDCARD: char = '*';

/// One side of a pattern after the trailing `*` has been stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub wildcard: bool,
}

impl Segment {
    fn parse(raw: &str) -> Self {
        match raw.strip_suffix(WILDCARD) {
            Some(prefix) => Self {
                text: prefix.to_string(),
                wildcard: true,
            },
            None => Self {
                text: raw.to_string(),
                wildcard: false,
            },
        }
    }

    /// Present means there is something left to compare against.
    pub fn is_present(&self) -> bool {
        !is_blank(&self.text)
    }

    fn matches(&self, name: &str) -> bool {
        if self.wildcard {
            name.starts_with(self.text.as_str())
        } else {
            name == self.text
        }
    }
}

/// Compiled allowed-service pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicePattern {
    pub class: Segment,
    /// `None` when the raw pattern has no `#`.
    pub method: Option<Segment>,
}

impl ServicePattern {
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(METHOD_SEPARATOR) {
            Some((class, method)) => Self {
                class: Segment::parse(class),
                method: Some(Segment::parse(method)),
            },
            None => Self {
                class: Segment::parse(raw),
                method: None,
            },
        }
    }

    /// True for patterns that admit every class and method (`*`, `*#*`).
    pub fn is_allow_all(&self) -> bool {
        self.class.wildcard
            && !self.class.is_present()
            && self.method.as_ref().map_or(true, |m| !m.is_present())
    }

    /// True for shapes that can never match (`""`, `#*`, blank segments).
    pub fn matches_nothing(&self) -> bool {
        !self.class.wildcard
            && !self.class.is_present()
            && self.method.as_ref().map_or(true, |m| !m.is_present())
    }

    pub fn matches(&self, class_name: &str, method_name: &str) -> bool {
        let method = self.method.as_ref().filter(|m| m.is_present());

        match (self.class.is_present(), method) {
            (true, Some(m)) => self.class.matches(class_name) && m.matches(method_name),
            (true, None) => self.class.matches(class_name),
            (false, Some(m)) => m.matches(method_name),
            (false, None) => self.class.wildcard,
        }
    }
}

/// Split the newline-separated text form of a profile's allowed services.
/// Lines are trimmed; blank lines are dropped.
pub fn split_allowed_services(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}
