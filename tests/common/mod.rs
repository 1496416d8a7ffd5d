#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response, header};
use axum::Router;
use hemogate::auth::{Role, create_access_token, create_token_with_ttl};
use hemogate::config::{AccessConfig, JwtConfig, RoleMismatchPolicy};
use hemogate::router::init_router;
use hemogate::state::AppState;
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes";

pub fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        leeway_secs: 0,
        access_token_expiry: 3600,
    }
}

pub fn setup_test_app() -> Router {
    setup_test_app_with(AccessConfig::default())
}

pub fn setup_test_app_with(access_config: AccessConfig) -> Router {
    init_router(AppState::new(access_config, &get_test_jwt_config()))
}

pub fn setup_unauthorized_policy_app() -> Router {
    setup_test_app_with(AccessConfig::default().with_role_mismatch(RoleMismatchPolicy::Unauthorized))
}

pub fn token_for(role: Role, subject_id: &str) -> String {
    create_access_token(subject_id, role, &get_test_jwt_config()).unwrap()
}

pub fn expired_token_for(role: Role, subject_id: &str) -> String {
    create_token_with_ttl(subject_id, role, -120, &get_test_jwt_config()).unwrap()
}

pub async fn get(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    get_with_cookie(app, uri, token.map(|t| format!("token={t}"))).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: Option<String>) -> Response<Body> {
    let mut request = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    app.oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

pub async fn body_text(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}
