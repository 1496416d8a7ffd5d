use std::env;

/// Shared-secret settings for session credentials.
///
/// The same secret is used by the external login service to sign tokens and
/// by the gate to verify them.
#[derive(Clone, PartialEq, Eq)]
pub struct JwtConfig {
    pub secret: String,
    /// Clock skew tolerated when checking `exp`, in seconds.
    pub leeway_secs: u64,
    /// Lifetime of development tokens minted by the CLI, in seconds.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    /// Loads the config from `JWT_SECRET`, `JWT_LEEWAY_SECS` and `JWT_ACCESS_EXPIRY`.
    ///
    /// A missing `JWT_SECRET` yields an empty secret, which the verifier
    /// treats as a misconfiguration and rejects every token.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").unwrap_or_default(),
            leeway_secs: env::var("JWT_LEEWAY_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0),
            access_token_expiry: env::var("JWT_ACCESS_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600), // 1 hour
        }
    }

    #[must_use]
    pub fn has_secret(&self) -> bool {
        !self.secret.is_empty()
    }
}

// The secret must never end up in logs.
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &if self.has_secret() { "<redacted>" } else { "<empty>" })
            .field("leeway_secs", &self.leeway_secs)
            .field("access_token_expiry", &self.access_token_expiry)
            .finish()
    }
}
