use crate::state::AppState;
use axum::{Router, routing::get};
use hemogate_access::normalize_path;
use hemogate_config::AccessConfig;

use super::controller::{admin_home, profile, user_home};

/// Mounts each area at its prefix, the prefix with a trailing slash, and
/// every path below it.
pub fn init_dashboard_router(config: &AccessConfig) -> Router<AppState> {
    let mut router = Router::new();

    for (prefix, handler) in [
        (config.admin_prefix.as_str(), get(admin_home)),
        (config.user_prefix.as_str(), get(user_home)),
        (config.profile_path.as_str(), get(profile)),
    ] {
        let base = normalize_path(prefix);
        router = router
            .route(base, handler.clone())
            .route(&format!("{base}/"), handler.clone())
            .route(&format!("{base}/{{*rest}}"), handler);
    }

    router
}
