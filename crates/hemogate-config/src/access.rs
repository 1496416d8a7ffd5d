//! Route and cookie settings for the access gate.
//!
//! # Environment Variables
//!
//! - `SESSION_COOKIE_NAME`: cookie carrying the credential (default: `token`)
//! - `ACCESS_ROLE_MISMATCH`: `home` or `unauthorized` (default: `home`)
//! - `LOGIN_PATH` / `REGISTER_PATH`: auth pages (default: `/login`, `/register`)
//! - `ADMIN_AREA_PREFIX`: admin dashboard root (default: `/dashboard/admin`)
//! - `USER_AREA_PREFIX`: donor dashboard root (default: `/dashboard/user`)
//! - `PROFILE_PATH`: donor profile root (default: `/profile`)
//! - `UNAUTHORIZED_PATH`: role-mismatch page (default: `/unauthorized`)

use std::env;
use std::fmt;
use std::str::FromStr;

/// Where a caller with a valid credential but the wrong role is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleMismatchPolicy {
    /// Send the caller to their own role's home view.
    #[default]
    RoleHome,
    /// Send every mismatch to the dedicated unauthorized page.
    Unauthorized,
}

impl FromStr for RoleMismatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" | "role_home" | "role-home" => Ok(Self::RoleHome),
            "unauthorized" => Ok(Self::Unauthorized),
            other => Err(format!("unknown role mismatch policy: {other}")),
        }
    }
}

impl fmt::Display for RoleMismatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoleHome => f.write_str("home"),
            Self::Unauthorized => f.write_str("unauthorized"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessConfig {
    pub cookie_name: String,
    pub role_mismatch: RoleMismatchPolicy,
    pub login_path: String,
    pub register_path: String,
    pub admin_prefix: String,
    pub user_prefix: String,
    pub profile_path: String,
    pub unauthorized_path: String,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            cookie_name: "token".to_string(),
            role_mismatch: RoleMismatchPolicy::RoleHome,
            login_path: "/login".to_string(),
            register_path: "/register".to_string(),
            admin_prefix: "/dashboard/admin".to_string(),
            user_prefix: "/dashboard/user".to_string(),
            profile_path: "/profile".to_string(),
            unauthorized_path: "/unauthorized".to_string(),
        }
    }
}

impl AccessConfig {
    /// Loads the config from the environment, falling back to the defaults
    /// for unset, blank or unparsable values.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cookie_name: non_blank_var("SESSION_COOKIE_NAME").unwrap_or(defaults.cookie_name),
            role_mismatch: env::var("ACCESS_ROLE_MISMATCH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.role_mismatch),
            login_path: path_var("LOGIN_PATH").unwrap_or(defaults.login_path),
            register_path: path_var("REGISTER_PATH").unwrap_or(defaults.register_path),
            admin_prefix: path_var("ADMIN_AREA_PREFIX").unwrap_or(defaults.admin_prefix),
            user_prefix: path_var("USER_AREA_PREFIX").unwrap_or(defaults.user_prefix),
            profile_path: path_var("PROFILE_PATH").unwrap_or(defaults.profile_path),
            unauthorized_path: path_var("UNAUTHORIZED_PATH")
                .unwrap_or(defaults.unauthorized_path),
        }
    }

    /// Builder-style override of the role mismatch policy.
    #[must_use]
    pub fn with_role_mismatch(mut self, policy: RoleMismatchPolicy) -> Self {
        self.role_mismatch = policy;
        self
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// A configured route path; anything other than an absolute path below
/// the root is rejected.
fn path_var(key: &str) -> Option<String> {
    non_blank_var(key).filter(|v| is_route_path(v))
}

fn is_route_path(value: &str) -> bool {
    value.starts_with('/') && !value.trim_end_matches('/').is_empty()
}
