use crate::state::AppState;
use axum::{Router, routing::get};
use hemogate_config::AccessConfig;

use super::controller::{health, landing, unauthorized};

pub fn init_system_router(config: &AccessConfig) -> Router<AppState> {
    Router::new()
        .route("/", get(landing))
        .route(&config.unauthorized_path, get(unauthorized))
        .route("/health", get(health))
}
