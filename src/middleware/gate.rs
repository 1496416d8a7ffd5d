use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::{debug, info};

use hemogate_access::AccessDecision;

use crate::metrics::track_access_decision;
use crate::middleware::session::AuthSession;
use crate::state::AppState;

/// Runs the access gate for every request.
///
/// Apply with `axum::middleware::from_fn_with_state` as an outer router
/// layer so the fallback is gated as well.
pub async fn access_gate(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();
    let return_to = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_owned())
        .unwrap_or_else(|| path.clone());

    let jar = CookieJar::from_headers(req.headers());
    let credential = jar
        .get(&state.access_config.cookie_name)
        .map(|cookie| cookie.value().to_owned());

    let evaluation = state
        .gate
        .inspect(&path, &return_to, credential.as_deref());
    track_access_decision(&evaluation);

    match evaluation.decision {
        AccessDecision::Allow => {
            debug!(path = %path, class = %evaluation.class, "Access allowed");
            if let Some(claims) = evaluation.claims {
                req.extensions_mut().insert(AuthSession(claims));
            }
            next.run(req).await
        }
        AccessDecision::Redirect { target, reason } => {
            info!(
                path = %path,
                class = %evaluation.class,
                reason = %reason,
                target = %target,
                "Access redirected"
            );
            Redirect::temporary(&target).into_response()
        }
    }
}
