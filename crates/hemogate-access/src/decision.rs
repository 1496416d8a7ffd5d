//! Access decision engine.
//!
//! [`AccessPolicy::decide`] combines a [`RouteClass`] with the outcome of
//! credential verification and yields exactly one [`AccessDecision`].
//!
//! | Route class | No/invalid credential | ADMIN | DONOR |
//! |---|---|---|---|
//! | public | Allow | Allow | Allow |
//! | auth page | Allow | admin home | user home |
//! | admin area | login + return path | Allow | mismatch |
//! | user area | login + return path | mismatch | Allow |
//! | profile area | login + return path | mismatch (login) | Allow |
//!
//! "mismatch" depends on [`RoleMismatchPolicy`]: the caller's own home with
//! `RoleHome` (the login page for the profile area), or the unauthorized
//! page with `Unauthorized`.
//!
//! A failed verification never produces `Allow` on a protected class, and
//! `NoCredential` and `InvalidCredential` produce the same target.

use std::fmt;

use hemogate_auth::{Claims, Role, VerificationError};
use hemogate_config::{AccessConfig, RoleMismatchPolicy};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::routes::{RouteClass, normalize_path};

/// Why a request was redirected. Used for logs and metrics, never rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RedirectReason {
    NoCredential,
    InvalidCredential,
    RoleMismatch,
    /// A signed-in caller asked for the login or register page.
    AlreadyAuthenticated,
}

impl RedirectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RedirectReason::NoCredential => "no_credential",
            RedirectReason::InvalidCredential => "invalid_credential",
            RedirectReason::RoleMismatch => "role_mismatch",
            RedirectReason::AlreadyAuthenticated => "already_authenticated",
        }
    }
}

impl fmt::Display for RedirectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<VerificationError> for RedirectReason {
    fn from(err: VerificationError) -> Self {
        match err {
            VerificationError::NoCredential => RedirectReason::NoCredential,
            VerificationError::InvalidCredential => RedirectReason::InvalidCredential,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Redirect {
        target: String,
        reason: RedirectReason,
    },
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            AccessDecision::Allow => None,
            AccessDecision::Redirect { target, .. } => Some(target),
        }
    }

    pub fn reason(&self) -> Option<RedirectReason> {
        match self {
            AccessDecision::Allow => None,
            AccessDecision::Redirect { reason, .. } => Some(*reason),
        }
    }

    fn redirect(target: impl Into<String>, reason: RedirectReason) -> Self {
        AccessDecision::Redirect {
            target: target.into(),
            reason,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AccessPolicy {
    login_path: String,
    admin_home: String,
    user_home: String,
    unauthorized_path: String,
    role_mismatch: RoleMismatchPolicy,
}

impl AccessPolicy {
    pub fn new(config: &AccessConfig) -> Self {
        Self {
            login_path: config.login_path.clone(),
            admin_home: normalize_path(&config.admin_prefix).to_string(),
            user_home: normalize_path(&config.user_prefix).to_string(),
            unauthorized_path: config.unauthorized_path.clone(),
            role_mismatch: config.role_mismatch,
        }
    }

    /// Landing view of a role.
    pub fn home_for(&self, role: Role) -> &str {
        match role {
            Role::Admin => &self.admin_home,
            Role::Donor => &self.user_home,
        }
    }

    /// Decides one request.
    ///
    /// `return_to` is the originally requested location; it is carried in
    /// the `redirect` query parameter when the caller is sent to log in.
    pub fn decide(
        &self,
        class: RouteClass,
        verification: &Result<Claims, VerificationError>,
        return_to: &str,
    ) -> AccessDecision {
        match class {
            RouteClass::Public => AccessDecision::Allow,
            RouteClass::AuthPage => match verification {
                Ok(claims) => AccessDecision::redirect(
                    self.home_for(claims.role),
                    RedirectReason::AlreadyAuthenticated,
                ),
                Err(_) => AccessDecision::Allow,
            },
            RouteClass::AdminArea | RouteClass::UserArea | RouteClass::ProfileArea => {
                match verification {
                    Err(err) => self.login_redirect(return_to, (*err).into()),
                    Ok(claims) if claims.role == required_role(class) => AccessDecision::Allow,
                    Ok(claims) => self.mismatch_redirect(class, claims.role),
                }
            }
        }
    }

    fn login_redirect(&self, return_to: &str, reason: RedirectReason) -> AccessDecision {
        let target = if return_to.is_empty() {
            self.login_path.clone()
        } else {
            format!("{}?redirect={}", self.login_path, encode_return_to(return_to))
        };
        AccessDecision::redirect(target, reason)
    }

    fn mismatch_redirect(&self, class: RouteClass, role: Role) -> AccessDecision {
        let target = match (self.role_mismatch, class) {
            (RoleMismatchPolicy::Unauthorized, _) => self.unauthorized_path.as_str(),
            (RoleMismatchPolicy::RoleHome, RouteClass::ProfileArea) => self.login_path.as_str(),
            (RoleMismatchPolicy::RoleHome, _) => self.home_for(role),
        };
        AccessDecision::redirect(target, RedirectReason::RoleMismatch)
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::new(&AccessConfig::default())
    }
}

const RETURN_TO: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

fn required_role(class: RouteClass) -> Role {
    match class {
        RouteClass::AdminArea => Role::Admin,
        _ => Role::Donor,
    }
}

/// Percent-encodes a return location for use as a query value.
/// Unreserved characters and `/` stay literal.
pub fn encode_return_to(value: &str) -> String {
    utf8_percent_encode(value, RETURN_TO).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(role: Role) -> Result<Claims, VerificationError> {
        Ok(Claims {
            id: "subject-1".to_string(),
            role,
            exp: 9999999999,
            iat: None,
        })
    }

    const FAILURES: [VerificationError; 2] = [
        VerificationError::NoCredential,
        VerificationError::InvalidCredential,
    ];

    #[test]
    fn test_public_always_allowed() {
        let policy = AccessPolicy::default();
        for v in [claims(Role::Admin), claims(Role::Donor)]
            .into_iter()
            .chain(FAILURES.map(Err))
        {
            assert!(policy.decide(RouteClass::Public, &v, "/").is_allowed());
        }
    }

    #[test]
    fn test_auth_page_without_credential_allowed() {
        let policy = AccessPolicy::default();
        for err in FAILURES {
            assert!(policy.decide(RouteClass::AuthPage, &Err(err), "/login").is_allowed());
        }
    }

    #[test]
    fn test_auth_page_redirects_signed_in_to_home() {
        let policy = AccessPolicy::default();
        assert_eq!(
            policy.decide(RouteClass::AuthPage, &claims(Role::Admin), "/login"),
            AccessDecision::Redirect {
                target: "/dashboard/admin".to_string(),
                reason: RedirectReason::AlreadyAuthenticated,
            }
        );
        assert_eq!(
            policy
                .decide(RouteClass::AuthPage, &claims(Role::Donor), "/register")
                .target(),
            Some("/dashboard/user")
        );
    }

    #[test]
    fn test_protected_fail_closed() {
        let policy = AccessPolicy::default();
        for class in [RouteClass::AdminArea, RouteClass::UserArea, RouteClass::ProfileArea] {
            for err in FAILURES {
                let decision = policy.decide(class, &Err(err), "/x");
                assert!(!decision.is_allowed(), "{class} {err}");
                assert_eq!(decision.target(), Some("/login?redirect=/x"));
            }
        }
    }

    #[test]
    fn test_invalid_and_missing_share_target() {
        let policy = AccessPolicy::default();
        let missing = policy.decide(
            RouteClass::AdminArea,
            &Err(VerificationError::NoCredential),
            "/dashboard/admin",
        );
        let invalid = policy.decide(
            RouteClass::AdminArea,
            &Err(VerificationError::InvalidCredential),
            "/dashboard/admin",
        );
        assert_eq!(missing.target(), invalid.target());
        assert_eq!(missing.reason(), Some(RedirectReason::NoCredential));
        assert_eq!(invalid.reason(), Some(RedirectReason::InvalidCredential));
    }

    #[test]
    fn test_admin_area_allow_iff_admin() {
        let policy = AccessPolicy::default();
        assert!(
            policy
                .decide(RouteClass::AdminArea, &claims(Role::Admin), "/dashboard/admin")
                .is_allowed()
        );
        assert_eq!(
            policy.decide(RouteClass::AdminArea, &claims(Role::Donor), "/dashboard/admin"),
            AccessDecision::Redirect {
                target: "/dashboard/user".to_string(),
                reason: RedirectReason::RoleMismatch,
            }
        );
    }

    #[test]
    fn test_user_area_allow_iff_donor() {
        let policy = AccessPolicy::default();
        assert!(
            policy
                .decide(RouteClass::UserArea, &claims(Role::Donor), "/dashboard/user")
                .is_allowed()
        );
        assert_eq!(
            policy
                .decide(RouteClass::UserArea, &claims(Role::Admin), "/dashboard/user")
                .target(),
            Some("/dashboard/admin")
        );
    }

    #[test]
    fn test_profile_is_donor_only() {
        let policy = AccessPolicy::default();
        assert!(
            policy
                .decide(RouteClass::ProfileArea, &claims(Role::Donor), "/profile")
                .is_allowed()
        );
        let decision = policy.decide(RouteClass::ProfileArea, &claims(Role::Admin), "/profile");
        assert_eq!(decision.target(), Some("/login"));
        assert_eq!(decision.reason(), Some(RedirectReason::RoleMismatch));
    }

    #[test]
    fn test_unauthorized_policy() {
        let config = AccessConfig::default().with_role_mismatch(RoleMismatchPolicy::Unauthorized);
        let policy = AccessPolicy::new(&config);

        for (class, role) in [
            (RouteClass::AdminArea, Role::Donor),
            (RouteClass::UserArea, Role::Admin),
            (RouteClass::ProfileArea, Role::Admin),
        ] {
            assert_eq!(
                policy.decide(class, &claims(role), "/p"),
                AccessDecision::Redirect {
                    target: "/unauthorized".to_string(),
                    reason: RedirectReason::RoleMismatch,
                }
            );
        }
        // Missing credentials still go to login.
        assert_eq!(
            policy
                .decide(RouteClass::AdminArea, &Err(VerificationError::NoCredential), "/p")
                .target(),
            Some("/login?redirect=/p")
        );
    }

    #[test]
    fn test_login_redirect_encodes_query() {
        let policy = AccessPolicy::default();
        let decision = policy.decide(
            RouteClass::AdminArea,
            &Err(VerificationError::NoCredential),
            "/dashboard/admin?tab=stock&page=2",
        );
        assert_eq!(
            decision.target(),
            Some("/login?redirect=/dashboard/admin%3Ftab%3Dstock%26page%3D2")
        );
    }

    #[test]
    fn test_login_redirect_without_return_to() {
        let policy = AccessPolicy::default();
        let decision = policy.decide(
            RouteClass::UserArea,
            &Err(VerificationError::NoCredential),
            "",
        );
        assert_eq!(decision.target(), Some("/login"));
    }

    #[test]
    fn test_encode_return_to() {
        assert_eq!(encode_return_to("/dashboard/admin"), "/dashboard/admin");
        assert_eq!(encode_return_to("/a b"), "/a%20b");
        assert_eq!(encode_return_to("/%41"), "/%2541");
        assert_eq!(encode_return_to("/doação"), "/doa%C3%A7%C3%A3o");
        assert_eq!(
            encode_return_to("/dashboard/user/x?tab=a&b=c#top"),
            "/dashboard/user/x%3Ftab%3Da%26b%3Dc%23top"
        );
        assert_eq!(encode_return_to("/a-b.c_d~e"), "/a-b.c_d~e");
    }

    #[test]
    fn test_reason_from_verification_error() {
        assert_eq!(
            RedirectReason::from(VerificationError::NoCredential),
            RedirectReason::NoCredential
        );
        assert_eq!(
            RedirectReason::from(VerificationError::InvalidCredential).as_str(),
            "invalid_credential"
        );
    }
}
