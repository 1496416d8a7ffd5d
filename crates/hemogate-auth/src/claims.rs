//! Session credential claims.
//!
//! The wire payload is deserialized into a private [`RawClaims`] first and
//! only becomes a [`Claims`] once every field has been validated:
//!
//! - `role` must be one of the closed set [`Role`] (`"ADMIN"`, `"DONOR"`)
//! - the subject is read from `id`, falling back to the registered `sub`
//!   claim, and may be a string or an integer
//!
//! [`Claims`] has no `Deserialize` impl: tokens become claims only through
//! [`crate::TokenVerifier::verify`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Dashboard role carried in the credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Donor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Donor => "DONOR",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    /// Exact, case-sensitive match on the wire values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "DONOR" => Ok(Role::Donor),
            other => Err(format!("unrecognized role: {other}")),
        }
    }
}

/// Verified claims of a session credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Claims {
    /// Subject identifier (donor or administrator id)
    pub id: String,
    pub role: Role,
    /// Expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Issued-at timestamp (Unix timestamp), when the issuer sets one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum SubjectId {
    Text(String),
    Number(i64),
}

impl SubjectId {
    fn into_string(self) -> String {
        match self {
            SubjectId::Text(s) => s,
            SubjectId::Number(n) => n.to_string(),
        }
    }
}

/// Payload as it appears on the wire, before validation.
#[derive(Debug, Deserialize)]
pub(crate) struct RawClaims {
    #[serde(default)]
    pub id: Option<SubjectId>,
    #[serde(default)]
    pub sub: Option<SubjectId>,
    #[serde(default)]
    pub role: Option<String>,
    pub exp: usize,
    #[serde(default)]
    pub iat: Option<usize>,
}

/// Reason a decoded payload was not accepted as [`Claims`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ClaimsError {
    #[error("missing role claim")]
    MissingRole,
    #[error("{0}")]
    UnknownRole(String),
    #[error("missing subject claim")]
    MissingSubject,
}

impl TryFrom<RawClaims> for Claims {
    type Error = ClaimsError;

    fn try_from(raw: RawClaims) -> Result<Self, Self::Error> {
        let role = raw
            .role
            .ok_or(ClaimsError::MissingRole)?
            .parse::<Role>()
            .map_err(ClaimsError::UnknownRole)?;

        let id = raw
            .id
            .or(raw.sub)
            .map(SubjectId::into_string)
            .filter(|id| !id.trim().is_empty())
            .ok_or(ClaimsError::MissingSubject)?;

        Ok(Claims {
            id,
            role,
            exp: raw.exp,
            iat: raw.iat,
        })
    }
}
