use crate::state::AppState;
use axum::{Router, routing::get};
use hemogate_config::AccessConfig;

use super::controller::{login_page, logout, register_page};

pub fn init_auth_router(config: &AccessConfig) -> Router<AppState> {
    Router::new()
        .route(&config.login_path, get(login_page))
        .route(&config.register_path, get(register_page))
        .route("/logout", get(logout).post(logout))
}
