// src/models/clients.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Um cliente pertence a exatamente um usuário (`user_id`).
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Client {
    pub id: Uuid,
    pub user_id: Uuid,

    pub nome: String,
    pub telefone: String,
    pub email: String,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateClientPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    #[schema(example = "Bob")]
    pub nome: String,

    #[validate(length(min = 1, message = "O telefone é obrigatório."))]
    #[schema(example = "555")]
    pub telefone: String,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    #[schema(example = "b@x.com")]
    pub email: String,
}

// Atualização parcial: campos omitidos mantêm o valor atual.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateClientPayload {
    #[validate(length(min = 1, message = "O nome não pode ser vazio."))]
    pub nome: Option<String>,

    #[validate(length(min = 1, message = "O telefone não pode ser vazio."))]
    pub telefone: Option<String>,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,
}
