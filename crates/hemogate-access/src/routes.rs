//! Route classification.
//!
//! Maps a request path onto the fixed taxonomy of [`RouteClass`]es. The
//! classifier is a pure function of the path string: it never looks at the
//! method, headers, body or any prior request.
//!
//! | Class | Rule (defaults) |
//! |-------|-----------------|
//! | `AuthPage` | exact `/login` or `/register` |
//! | `AdminArea` | starts with `/dashboard/admin` |
//! | `UserArea` | starts with `/dashboard/user` |
//! | `ProfileArea` | exact `/profile` or below `/profile/` |
//! | `Public` | everything else |
//!
//! Unmatched paths are public ("allow unless explicitly protected").

use std::fmt;

use hemogate_config::AccessConfig;

/// Semantic category of a request path, in priority order.
///
/// The derived `Ord` follows declaration order, so sorting a set of matches
/// puts the most specific class first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RouteClass {
    AuthPage,
    AdminArea,
    UserArea,
    ProfileArea,
    Public,
}

impl RouteClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteClass::AuthPage => "auth_page",
            RouteClass::AdminArea => "admin_area",
            RouteClass::UserArea => "user_area",
            RouteClass::ProfileArea => "profile_area",
            RouteClass::Public => "public",
        }
    }
}

impl fmt::Display for RouteClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct RouteClassifier {
    auth_pages: Vec<String>,
    admin_prefix: String,
    user_prefix: String,
    profile_path: String,
}

impl RouteClassifier {
    pub fn new(config: &AccessConfig) -> Self {
        Self {
            auth_pages: vec![config.login_path.clone(), config.register_path.clone()],
            admin_prefix: normalize_path(&config.admin_prefix).to_string(),
            user_prefix: normalize_path(&config.user_prefix).to_string(),
            profile_path: normalize_path(&config.profile_path).to_string(),
        }
    }

    /// Every protected or auth class the path falls into, most specific first.
    /// An empty result means the path is public.
    pub fn matches(&self, path: &str) -> Vec<RouteClass> {
        let path = normalize_path(path);
        let mut classes = Vec::with_capacity(2);

        if self.auth_pages.iter().any(|page| page == path) {
            classes.push(RouteClass::AuthPage);
        }
        if path.starts_with(&self.admin_prefix) {
            classes.push(RouteClass::AdminArea);
        }
        if path.starts_with(&self.user_prefix) {
            classes.push(RouteClass::UserArea);
        }
        if path == self.profile_path
            || path
                .strip_prefix(self.profile_path.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
        {
            classes.push(RouteClass::ProfileArea);
        }

        classes.sort();
        classes
    }

    /// The highest-priority class of the path. Total: every path has one.
    pub fn classify(&self, path: &str) -> RouteClass {
        self.matches(path)
            .into_iter()
            .next()
            .unwrap_or(RouteClass::Public)
    }
}

impl Default for RouteClassifier {
    fn default() -> Self {
        Self::new(&AccessConfig::default())
    }
}

/// Treats an empty path as `/` and ignores a single trailing slash.
pub fn normalize_path(path: &str) -> &str {
    if path.is_empty() {
        return "/";
    }
    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    }
}
