//! Operator commands behind the `hemogate-cli` binary.

use anyhow::{anyhow, bail};
use hemogate_access::{AccessDecision, AccessGate, Evaluation};
use hemogate_auth::{Role, create_token_with_ttl};
use hemogate_config::JwtConfig;

/// Parses a role name case-insensitively (`admin`, `DONOR`, ...).
pub fn parse_role(input: &str) -> anyhow::Result<Role> {
    input
        .trim()
        .to_uppercase()
        .parse::<Role>()
        .map_err(|_| anyhow!("unknown role '{input}', expected ADMIN or DONOR"))
}

/// Signs a development credential for `subject_id`.
///
/// `ttl` defaults to `JWT_ACCESS_EXPIRY`.
pub fn issue_token(
    role: Role,
    subject_id: &str,
    ttl: Option<i64>,
    config: &JwtConfig,
) -> anyhow::Result<String> {
    if !config.has_secret() {
        bail!("JWT_SECRET is not set");
    }
    if subject_id.trim().is_empty() {
        bail!("subject id must not be empty");
    }

    let ttl = ttl.unwrap_or(config.access_token_expiry);
    create_token_with_ttl(subject_id, role, ttl, config).map_err(|e| e.error)
}

/// Runs the gate for `path` without a server and renders the outcome.
pub fn check_path(gate: &AccessGate, path: &str, token: Option<&str>) -> String {
    let route = path.split(['?', '#']).next().unwrap_or(path);
    describe_evaluation(path, &gate.inspect(route, path, token))
}

pub fn describe_evaluation(path: &str, evaluation: &Evaluation) -> String {
    let subject = evaluation
        .claims
        .as_ref()
        .map(|claims| format!(" as {} ({})", claims.id, claims.role))
        .unwrap_or_default();

    match &evaluation.decision {
        AccessDecision::Allow => {
            format!("{path} [{}]: allow{subject}", evaluation.class)
        }
        AccessDecision::Redirect { target, reason } => {
            format!("{path} [{}]: redirect to {target} ({reason})", evaluation.class)
        }
    }
}
