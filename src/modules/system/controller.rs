use axum::{Json, http::StatusCode, response::Html};
use serde_json::{Value, json};

use crate::utils::html::page;

pub async fn landing() -> Html<String> {
    page(
        "Início",
        "<h1>Hemogate</h1>\n<p>Doe sangue, salve vidas.</p>\n<nav><a href=\"/login\">Entrar</a> <a href=\"/register\">Cadastrar</a></nav>",
    )
}

pub async fn unauthorized() -> (StatusCode, Html<String>) {
    (
        StatusCode::FORBIDDEN,
        page(
            "Acesso não autorizado",
            "<h1>Acesso não autorizado</h1>\n<p>Você não tem permissão para acessar esta página.</p>\n<a href=\"/\">Voltar ao início</a>",
        ),
    )
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn not_found() -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        page(
            "Página não encontrada",
            "<h1>404</h1>\n<p>Página não encontrada.</p>\n<a href=\"/\">Voltar ao início</a>",
        ),
    )
}
