use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use tracing::info;

use crate::state::AppState;
use crate::utils::html::{escape_html, page};

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    /// Location to forward to after a successful login.
    pub redirect: Option<String>,
}

pub async fn login_page(Query(query): Query<LoginQuery>) -> Html<String> {
    let forward = query
        .redirect
        .filter(|target| is_local_path(target))
        .map(|target| {
            format!(
                "<input type=\"hidden\" name=\"redirect\" value=\"{}\">\n",
                escape_html(&target)
            )
        })
        .unwrap_or_default();

    page(
        "Entrar",
        &format!(
            "<h1>Entrar no sistema</h1>\n<form method=\"post\" id=\"login\">\n{forward}<input type=\"email\" name=\"email\">\n<input type=\"password\" name=\"password\">\n<button type=\"submit\">Fazer Login</button>\n</form>"
        ),
    )
}

pub async fn register_page() -> Html<String> {
    page(
        "Cadastro",
        "<h1>Cadastro de doador</h1>\n<p>Preencha seus dados para se tornar um doador.</p>",
    )
}

/// Clears the session cookie and sends the browser to the login page.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    let had_session = jar.get(&state.access_config.cookie_name).is_some();
    let jar = jar.remove(Cookie::build((state.access_config.cookie_name.clone(), "")).path("/"));

    info!(had_session, "Session cookie cleared");
    (jar, Redirect::to(&state.access_config.login_path))
}

/// Only same-site absolute paths are forwarded to, never `//host` or schemes.
pub fn is_local_path(target: &str) -> bool {
    target.starts_with('/') && !target.starts_with("//") && !target.contains('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_local_path() {
        assert!(is_local_path("/dashboard/admin"));
        assert!(is_local_path("/dashboard/admin?tab=stock"));
        assert!(!is_local_path("//evil.example"));
        assert!(!is_local_path("https://evil.example"));
        assert!(!is_local_path("/\\evil.example"));
        assert!(!is_local_path(""));
    }

    #[tokio::test]
    async fn test_login_page_keeps_local_redirect() {
        let Html(body) = login_page(Query(LoginQuery {
            redirect: Some("/dashboard/admin".to_string()),
        }))
        .await;
        assert!(body.contains("name=\"redirect\" value=\"/dashboard/admin\""));
    }

    #[tokio::test]
    async fn test_login_page_drops_foreign_redirect() {
        let Html(body) = login_page(Query(LoginQuery {
            redirect: Some("https://evil.example".to_string()),
        }))
        .await;
        assert!(!body.contains("evil.example"));
    }
}
