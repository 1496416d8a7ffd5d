use axum::response::Html;

use crate::middleware::session::{AdminSession, DonorSession};
use crate::utils::html::{escape_html, page};

pub async fn admin_home(AdminSession(session): AdminSession) -> Html<String> {
    page(
        "Painel do administrador",
        &format!(
            "<h1>Painel do administrador</h1>\n<p>Bem-vindo, {}.</p>\n<nav><a href=\"/dashboard/admin/stock\">Estoque de sangue</a> <a href=\"/dashboard/admin/campaigns\">Campanhas</a></nav>\n<form method=\"post\" action=\"/logout\"><button type=\"submit\">Sair</button></form>",
            escape_html(session.subject_id())
        ),
    )
}

pub async fn user_home(DonorSession(session): DonorSession) -> Html<String> {
    page(
        "Painel do doador",
        &format!(
            "<h1>Painel do doador</h1>\n<p>Bem-vindo, {}.</p>\n<nav><a href=\"/profile\">Meu perfil</a> <a href=\"/dashboard/user/donations\">Minhas doações</a></nav>\n<form method=\"post\" action=\"/logout\"><button type=\"submit\">Sair</button></form>",
            escape_html(session.subject_id())
        ),
    )
}

pub async fn profile(DonorSession(session): DonorSession) -> Html<String> {
    page(
        "Meu perfil",
        &format!(
            "<h1>Meu perfil</h1>\n<dl><dt>Identificador</dt><dd id=\"subject-id\">{}</dd><dt>Perfil</dt><dd>{}</dd></dl>",
            escape_html(session.subject_id()),
            session.role()
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::session::AuthSession;
    use hemogate_auth::{Claims, Role};

    fn session(id: &str, role: Role) -> AuthSession {
        AuthSession(Claims {
            id: id.to_string(),
            role,
            exp: 9999999999,
            iat: None,
        })
    }

    #[tokio::test]
    async fn test_profile_escapes_subject_id() {
        let Html(body) = profile(DonorSession(session("<b>7</b>", Role::Donor))).await;
        assert!(body.contains("&lt;b&gt;7&lt;/b&gt;"));
        assert!(body.contains("DONOR"));
    }

    #[tokio::test]
    async fn test_admin_home_greets_subject() {
        let Html(body) = admin_home(AdminSession(session("admin-1", Role::Admin))).await;
        assert!(body.contains("Bem-vindo, admin-1."));
    }
}
