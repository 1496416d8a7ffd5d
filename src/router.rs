use crate::logging::logging_middleware;
use crate::metrics::metrics_middleware;
use crate::middleware::gate::access_gate;
use crate::modules::auth::router::init_auth_router;
use crate::modules::dashboard::router::init_dashboard_router;
use crate::modules::system::controller::not_found;
use crate::modules::system::router::init_system_router;
use crate::state::AppState;
use axum::http::{HeaderValue, header};
use axum::{Router, middleware};
use tower_http::set_header::SetResponseHeaderLayer;

/// Builds the application router.
///
/// The access gate wraps the whole router, fallback included, so every
/// request is classified before any view runs.
pub fn init_router(state: AppState) -> Router {
    let config = &state.access_config;

    Router::new()
        .merge(init_system_router(config))
        .merge(init_auth_router(config))
        .merge(init_dashboard_router(config))
        .route_layer(middleware::from_fn(metrics_middleware))
        .fallback(not_found)
        .with_state(state.clone())
        .layer(middleware::from_fn_with_state(state, access_gate))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(middleware::from_fn(logging_middleware))
}
