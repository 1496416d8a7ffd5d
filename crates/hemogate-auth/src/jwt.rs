//! Session credential verification.
//!
//! [`TokenVerifier`] checks an HS256-signed JWT against the shared secret
//! and turns its payload into [`Claims`]. It performs no I/O and holds no
//! mutable state, so one instance is shared by every request.
//!
//! Every failure collapses to [`VerificationError::InvalidCredential`]; the
//! underlying cause (bad signature, expiry, malformed payload, unknown role)
//! is only emitted as a `debug` event.
//!
//! # Example
//!
//! ```ignore
//! use hemogate_auth::TokenVerifier;
//! use hemogate_config::JwtConfig;
//!
//! let verifier = TokenVerifier::new(&JwtConfig::from_env());
//! match verifier.verify(cookie_value) {
//!     Ok(claims) => println!("{} as {}", claims.id, claims.role),
//!     Err(e) => println!("rejected: {e}"),
//! }
//! ```

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::{debug, error};

use hemogate_config::JwtConfig;
use hemogate_core::AppError;

use crate::claims::{Claims, RawClaims, Role};

/// Outcome of a failed verification, as seen by the decision engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VerificationError {
    #[error("no credential presented")]
    NoCredential,
    #[error("invalid credential")]
    InvalidCredential,
}

#[derive(Clone)]
pub struct TokenVerifier {
    // None when the configured secret is empty.
    key: Option<DecodingKey>,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(jwt_config: &JwtConfig) -> Self {
        let key = if jwt_config.has_secret() {
            Some(DecodingKey::from_secret(jwt_config.secret.as_bytes()))
        } else {
            error!("JWT_SECRET is empty; every session credential will be rejected");
            None
        };

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = jwt_config.leeway_secs;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);

        Self { key, validation }
    }

    /// Verifies the raw cookie value, if any.
    ///
    /// An absent or empty value is [`VerificationError::NoCredential`]; any
    /// other failure is [`VerificationError::InvalidCredential`].
    pub fn verify(&self, token: Option<&str>) -> Result<Claims, VerificationError> {
        let token = match token.map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => return Err(VerificationError::NoCredential),
        };

        let Some(key) = &self.key else {
            return Err(VerificationError::InvalidCredential);
        };

        let raw = decode::<RawClaims>(token, key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(kind = ?e.kind(), "Credential failed verification");
                VerificationError::InvalidCredential
            })?;

        Claims::try_from(raw).map_err(|e| {
            debug!(reason = %e, "Credential payload rejected");
            VerificationError::InvalidCredential
        })
    }
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("has_key", &self.key.is_some())
            .field("leeway", &self.validation.leeway)
            .finish()
    }
}

/// Signs a session credential with the shared secret.
///
/// The login service owns credential issuance in production; this exists for
/// the CLI and for tests.
///
/// # Errors
///
/// Returns an internal error if the secret is empty or encoding fails.
pub fn create_access_token(
    subject_id: &str,
    role: Role,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    create_token_with_ttl(subject_id, role, jwt_config.access_token_expiry, jwt_config)
}

/// Like [`create_access_token`] with an explicit lifetime in seconds.
/// A negative `ttl_secs` produces an already expired token.
pub fn create_token_with_ttl(
    subject_id: &str,
    role: Role,
    ttl_secs: i64,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    if !jwt_config.has_secret() {
        return Err(AppError::internal(anyhow::anyhow!("JWT_SECRET is not set")));
    }

    let now = Utc::now().timestamp();
    let exp = now
        .checked_add(ttl_secs)
        .ok_or_else(|| AppError::internal(anyhow::anyhow!("Token lifetime out of range")))?;
    let claims = Claims {
        id: subject_id.to_string(),
        role,
        exp: exp.max(0) as usize,
        iat: Some(now as usize),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}
