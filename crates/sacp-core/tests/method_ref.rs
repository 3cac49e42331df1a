//! Method reference and decision tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use sacp_core::{Decision, MethodRef, SacpError, StoreError};

#[test]
fn parse_method_ref() {
    let m = MethodRef::parse("com.acme.FooService#getName").unwrap();
    assert_eq!(m.class_name, "com.acme.FooService");
    assert_eq!(m.method_name, "getName");
    assert_eq!(m.qualified(), "com.acme.FooService#getName");
    assert_eq!(m.to_string(), m.qualified());
}

#[test]
fn from_str_matches_parse() {
    let m: MethodRef = "com.acme.FooService#getName".parse().unwrap();
    assert_eq!(m, MethodRef::new("com.acme.FooService", "getName"));
    assert!("no-separator".parse::<MethodRef>().is_err());
}

#[test]
fn parse_method_ref_rejects_missing_segments() {
    for bad in ["com.acme.FooService", "#getName", "com.acme.FooService#", " # "] {
        let err = MethodRef::parse(bad).expect_err("must fail");
        assert_eq!(err.client_code().as_str(), "BAD_REQUEST", "input={bad:?}");
    }
}

#[test]
fn deny_becomes_access_denied() {
    let d = Decision::Deny {
        method: "com.acme.FooService#baz".into(),
    };
    assert!(!d.is_allowed());

    let err = d.into_result().expect_err("deny must raise");
    assert!(err.is_security_failure());
    assert_eq!(err.client_code().as_str(), "NOT_ALLOWED");
    assert_eq!(err.to_string(), "access denied to com.acme.FooService#baz");
}

#[test]
fn allow_and_unrestricted_pass_through() {
    assert_eq!(
        Decision::Unrestricted.into_result().unwrap(),
        Decision::Unrestricted
    );
    let d = Decision::Allow {
        pattern: "*".into(),
    };
    assert!(d.is_allowed());
    assert!(d.into_result().is_ok());
}

#[test]
fn store_error_wraps_into_resolution_failure() {
    let err: SacpError = StoreError::NotFound {
        tenant_id: "acme".into(),
        name: "GHOST".into(),
    }
    .into();
    assert!(err.is_security_failure());
    assert_eq!(err.client_code().as_str(), "RESOLUTION_FAILED");
    assert!(err.to_string().contains("GHOST"));
}

#[test]
fn decision_serializes_with_verdict_tag() {
    let v = serde_json::to_value(Decision::Allow {
        pattern: "com.acme.*".into(),
    })
    .unwrap();
    assert_eq!(v["verdict"], "allow");
    assert_eq!(v["pattern"], "com.acme.*");

    let v = serde_json::to_value(Decision::Unrestricted).unwrap();
    assert_eq!(v["verdict"], "unrestricted");
}
