use axum::{extract::FromRequestParts, http::request::Parts};

use hemogate_auth::{Claims, Role};
use hemogate_core::AppError;

/// Session verified by the access gate for the current request.
///
/// Only present when the gate verified a credential and allowed the request;
/// views never decode the cookie themselves.
#[derive(Debug, Clone)]
pub struct AuthSession(pub Claims);

impl AuthSession {
    pub fn subject_id(&self) -> &str {
        &self.0.id
    }

    pub fn role(&self) -> Role {
        self.0.role
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.0.role == role
    }
}

impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthSession>()
            .cloned()
            .ok_or_else(|| AppError::unauthorized("Missing verified session"))
    }
}

/// Creates an extractor that requires a verified session with the given role.
#[macro_export]
macro_rules! require_role {
    ($name:ident, $role:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::session::AuthSession);

        impl<S> axum::extract::FromRequestParts<S> for $name
        where
            S: Send + Sync,
        {
            type Rejection = hemogate_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &S,
            ) -> Result<Self, Self::Rejection> {
                let session =
                    $crate::middleware::session::AuthSession::from_request_parts(parts, state)
                        .await?;

                if !session.has_role($role) {
                    return Err(hemogate_core::AppError::forbidden(format!(
                        "Access denied. Required role: {}",
                        $role
                    )));
                }

                Ok($name(session))
            }
        }
    };
}

require_role!(AdminSession, Role::Admin);
require_role!(DonorSession, Role::Donor);
