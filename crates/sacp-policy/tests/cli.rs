#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::process::Command;

use clap::error::ErrorKind;
use clap::Parser;

use sacp_core::MethodRef;
use sacp_policy::cli::{self, Cli, EXIT_ALLOW, EXIT_DENY, EXIT_USAGE};

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["sacp-check"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

fn check(tenant: &str, profiles: &str, target: &str) -> cli::Outcome {
    let cfg = fixture("sacp.yaml");
    cli::run(&parse(&["--config", &cfg, tenant, profiles, target])).unwrap()
}

#[test]
fn parses_positionals_and_config_anywhere() {
    let cfg = fixture("sacp.yaml");
    let a = parse(&["acme", "READER", "--config", &cfg, "com.acme.FooService#x"]);
    assert_eq!(a.tenant, "acme");
    assert_eq!(a.profiles, "READER");
    assert_eq!(a.target, MethodRef::new("com.acme.FooService", "x"));
    assert_eq!(a.config.to_str(), Some(cfg.as_str()));

    let b = parse(&["acme", "-", &format!("--config={cfg}"), "a.B#c"]);
    assert_eq!(b.profiles, "-");
}

#[test]
fn usage_errors_exit_with_two() {
    let err = Cli::try_parse_from(["sacp-check", "acme", "READER"]).expect_err("missing target");
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    assert_eq!(err.exit_code(), i32::from(EXIT_USAGE));

    let err = Cli::try_parse_from(["sacp-check", "acme", "READER", "NoSeparator"])
        .expect_err("bad target");
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
    assert_eq!(err.exit_code(), i32::from(EXIT_USAGE));

    let err = Cli::try_parse_from(["sacp-check", "--help"]).expect_err("help short-circuits");
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    assert_eq!(err.exit_code(), 0);
}

#[test]
fn allow_reports_matched_pattern() {
    let out = check("acme", "READER", "com.acme.FooService#getName");
    assert_eq!(out.exit_code, EXIT_ALLOW);
    assert_eq!(out.report["decision"]["verdict"], "allow");
    assert_eq!(out.report["decision"]["pattern"], "com.acme.FooService#get*");
    assert_eq!(out.report["method"]["class_name"], "com.acme.FooService");
}

#[test]
fn no_profile_context_is_unrestricted() {
    let out = check("acme", "-", "com.other.Thing#run");
    assert_eq!(out.exit_code, EXIT_ALLOW);
    assert_eq!(out.report["decision"]["verdict"], "unrestricted");
}

#[test]
fn deny_exits_with_one() {
    let out = check("acme", "READER", "com.acme.FooService#delete");
    assert_eq!(out.exit_code, EXIT_DENY);
    assert_eq!(out.report["decision"]["verdict"], "deny");
    assert_eq!(out.report["decision"]["method"], "com.acme.FooService#delete");
}

#[test]
fn resolution_failure_exits_with_one() {
    let out = check("acme", "ADMIN,GHOST", "com.acme.FooService#getName");
    assert_eq!(out.exit_code, EXIT_DENY);
    assert_eq!(out.report["decision"]["verdict"], "error");
    assert_eq!(out.report["decision"]["code"], "RESOLUTION_FAILED");
}

#[test]
fn config_errors_surface_from_run() {
    let bad = fixture("bad_version.yaml");
    let err = cli::run(&parse(&["--config", &bad, "acme", "-", "a.B#c"])).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");

    let err = cli::run(&parse(&["--config", "no/such/file.yaml", "acme", "-", "a.B#c"]))
        .expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sacp-check"));
    cmd.env_remove("SACP_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn binary_exit_codes() {
    let cfg = fixture("sacp.yaml");

    let out = bin()
        .args(["--config", &cfg, "acme", "READER", "com.acme.FooService#getName"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["decision"]["verdict"], "allow");

    let out = bin()
        .args(["--config", &cfg, "acme", "READER", "com.acme.FooService#delete"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));

    let out = bin()
        .args(["--config", &cfg, "acme", "GHOST", "com.acme.FooService#getName"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["decision"]["code"], "RESOLUTION_FAILED");

    let out = bin().args(["acme", "READER"]).output().unwrap();
    assert_eq!(out.status.code(), Some(2));

    let out = bin()
        .args(["--config", &fixture("bad_version.yaml"), "acme", "-", "a.B#c"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));

    let out = bin().arg("--help").output().unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Usage"));
}

#[test]
fn binary_reads_config_from_env() {
    let out = bin()
        .env("SACP_CONFIG", fixture("sacp.yaml"))
        .args(["acme", "ADMIN", "any.Class#any"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
}
