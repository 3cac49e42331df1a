//! `sacp-check` command-line interface.
//!
//! Evaluates one remote invocation against the configured profiles and
//! reports the decision as a JSON line.

use std::path::PathBuf;

use clap::Parser;
use serde_json::{json, Value};

use sacp_core::error::Result;
use sacp_core::MethodRef;

use crate::app_state::AppState;
use crate::config;
use crate::context::{parse_profile_names, RequestContext};

/// Exit code when the call is allowed (or unrestricted).
pub const EXIT_ALLOW: u8 = 0;
/// Exit code on deny or profile resolution failure.
pub const EXIT_DENY: u8 = 1;
/// Exit code on usage or config errors (matches clap's usage exit code).
pub const EXIT_USAGE: u8 = 2;

/// Check whether a remote service method is allowed for a set of profiles
#[derive(Parser, Debug)]
#[command(name = "sacp-check")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Tenant identifier
    pub tenant: String,

    /// Comma-separated active profile names, `-` for no profile context
    pub profiles: String,

    /// Invoked method as `Class#method`
    #[arg(value_parser = parse_target)]
    pub target: MethodRef,

    /// Path to configuration file (YAML)
    #[arg(short, long, env = "SACP_CONFIG", default_value = "sacp.yaml")]
    pub config: PathBuf,
}

fn parse_target(s: &str) -> std::result::Result<MethodRef, String> {
    MethodRef::parse(s).map_err(|e| e.to_string())
}

/// JSON report plus process exit code for one check.
#[derive(Debug)]
pub struct Outcome {
    pub report: Value,
    pub exit_code: u8,
}

/// Load config and evaluate. `Err` means the config could not be used.
pub fn run(cli: &Cli) -> Result<Outcome> {
    let state = config::load_from_file(&cli.config).and_then(AppState::new)?;
    tracing::info!(config=%cli.config.display(), tenants = state.cfg().tenants.len(), "sacp-check starting");
    Ok(evaluate(cli, &state))
}

/// Evaluate against an already built state.
pub fn evaluate(cli: &Cli, state: &AppState) -> Outcome {
    let ctx = RequestContext::new(cli.tenant.as_str(), parse_profile_names(&cli.profiles));
    let method = &cli.target;

    match state.engine().decide(&ctx, method) {
        Ok(decision) => Outcome {
            exit_code: if decision.is_allowed() { EXIT_ALLOW } else { EXIT_DENY },
            report: json!({ "method": method, "decision": decision }),
        },
        Err(e) => Outcome {
            exit_code: EXIT_DENY,
            report: json!({
                "method": method,
                "decision": { "verdict": "error", "code": e.client_code().as_str(), "message": e.to_string() }
            }),
        },
    }
}
