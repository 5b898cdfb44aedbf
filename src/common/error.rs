// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::ordens::StatusOrdem;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Usuário já existe")]
    DuplicateUser,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    // As quatro variantes de falha de autenticação abaixo são distinguidas
    // apenas nos logs do servidor; o chamador recebe sempre o mesmo 401.
    #[error("Nenhuma credencial foi fornecida")]
    MissingCredentials,

    #[error("Cabeçalho de autorização fora do esquema 'Bearer <token>'")]
    MalformedCredentials,

    #[error("Token expirado")]
    ExpiredToken,

    #[error("Token inválido")]
    InvalidToken,

    // Token válido apontando para uma conta que não existe mais.
    #[error("Usuário do token não encontrado")]
    UserNotFound,

    // Mesmo erro para "não existe" e "existe mas não é seu".
    #[error("Recurso não encontrado")]
    ResourceNotFound,

    #[error("Status inválido: {0}")]
    InvalidStatus(String),

    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }

            AppError::DuplicateUser => (StatusCode::CONFLICT, "Usuário já existe.".to_string()),

            // Não dizemos qual das credenciais falhou.
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Usuário ou senha inválidos.".to_string())
            }

            AppError::MissingCredentials
            | AppError::MalformedCredentials
            | AppError::ExpiredToken
            | AppError::InvalidToken => {
                tracing::warn!("Falha de autenticação: {}", self);
                (StatusCode::UNAUTHORIZED, "Não autenticado.".to_string())
            }

            // Anomalia de integridade: o token passou na verificação, mas a
            // conta sumiu do banco. Logada separadamente do 404 comum.
            AppError::UserNotFound => {
                tracing::error!("Token válido para usuário inexistente no banco");
                (StatusCode::NOT_FOUND, "Usuário não encontrado.".to_string())
            }

            AppError::ResourceNotFound => {
                (StatusCode::NOT_FOUND, "Recurso não encontrado.".to_string())
            }

            AppError::InvalidStatus(valor) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!(
                    "Status '{}' inválido. Valores permitidos: {}.",
                    valor,
                    StatusOrdem::valores_permitidos()
                ),
            ),

            // Todos os outros erros (DatabaseError, InternalServerError...) viram 500.
            // O `tracing` loga a mensagem detalhada que `thiserror` nos deu.
            e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.".to_string())
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falhas_de_autenticacao_viram_401_generico() {
        let falhas = [
            AppError::MissingCredentials,
            AppError::MalformedCredentials,
            AppError::ExpiredToken,
            AppError::InvalidToken,
        ];
        for falha in falhas {
            let resposta = falha.into_response();
            assert_eq!(resposta.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn credenciais_invalidas_viram_401() {
        let resposta = AppError::InvalidCredentials.into_response();
        assert_eq!(resposta.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn usuario_duplicado_vira_409() {
        let resposta = AppError::DuplicateUser.into_response();
        assert_eq!(resposta.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn recurso_nao_encontrado_vira_404() {
        let resposta = AppError::ResourceNotFound.into_response();
        assert_eq!(resposta.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn status_invalido_vira_422() {
        let resposta = AppError::InvalidStatus("Aberto".to_string()).into_response();
        assert_eq!(resposta.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
