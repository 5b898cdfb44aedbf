// src/middleware/auth.rs

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::{common::error::AppError, config::AppState, models::auth::User};

const BEARER_PREFIX: &str = "Bearer ";

// Separa "não mandou nada" de "mandou fora do esquema Bearer".
// Nada do cabeçalho vai para os logs.
fn extract_bearer(header: Option<&str>) -> Result<&str, AppError> {
    let header = header.ok_or(AppError::MissingCredentials)?;

    header
        .strip_prefix(BEARER_PREFIX)
        .filter(|token| !token.is_empty())
        .ok_or(AppError::MalformedCredentials)
}

// O middleware em si: resolve o usuário autenticado e o injeta nos
// "extensions" da requisição para os handlers.
pub async fn auth_guard(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = extract_bearer(auth_header)?;
    let user = app_state.auth_service.authenticate(token).await?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

// Extrator para obter o usuário autenticado diretamente nos handlers
pub struct AuthenticatedUser(pub User);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<User>()
            .cloned()
            .map(AuthenticatedUser)
            .ok_or(AppError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cabecalho_ausente_e_missing_credentials() {
        assert!(matches!(extract_bearer(None), Err(AppError::MissingCredentials)));
    }

    #[test]
    fn esquema_diferente_de_bearer_e_malformed() {
        assert!(matches!(
            extract_bearer(Some("Basic YWxpY2U6c2VuaGE=")),
            Err(AppError::MalformedCredentials)
        ));
        // Sem o espaço depois de "Bearer" também não vale.
        assert!(matches!(
            extract_bearer(Some("Bearerabc.def.ghi")),
            Err(AppError::MalformedCredentials)
        ));
    }

    #[test]
    fn bearer_sem_token_e_malformed() {
        assert!(matches!(
            extract_bearer(Some("Bearer ")),
            Err(AppError::MalformedCredentials)
        ));
    }

    #[test]
    fn bearer_valido_extrai_o_token_cru() {
        assert_eq!(extract_bearer(Some("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
    }
}
