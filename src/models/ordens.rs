// src/models/ordens.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// --- ENUMS ---

// O conjunto fechado de status de uma ordem de serviço.
// Guardado no banco como TEXT; a validação acontece na camada de serviço
// para que o erro liste os valores aceitos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusOrdem {
    Pendente,
    EmAndamento,
    Concluido,
    Cancelado,
}

impl StatusOrdem {
    pub const TODOS: [StatusOrdem; 4] = [
        StatusOrdem::Pendente,
        StatusOrdem::EmAndamento,
        StatusOrdem::Concluido,
        StatusOrdem::Cancelado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusOrdem::Pendente => "Pendente",
            StatusOrdem::EmAndamento => "Em Andamento",
            StatusOrdem::Concluido => "Concluído",
            StatusOrdem::Cancelado => "Cancelado",
        }
    }

    pub fn parse(valor: &str) -> Option<StatusOrdem> {
        StatusOrdem::TODOS.into_iter().find(|s| s.as_str() == valor)
    }

    pub fn valores_permitidos() -> String {
        StatusOrdem::TODOS.map(|s| s.as_str()).join(", ")
    }
}

// --- ORDEM (O Dado) ---

// Uma ordem pertence a um cliente; o dono é o usuário dono do cliente.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Ordem {
    pub id: Uuid,
    pub client_id: Uuid,

    pub nome_servico: String,
    pub descricao_servico: Option<String>,

    #[schema(value_type = f64, example = 50.0)]
    pub valor: Decimal,

    #[schema(example = "Pendente")]
    pub status: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// --- PAYLOADS ---

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateOrdemPayload {
    pub client_id: Uuid,

    #[validate(length(min = 1, message = "O nome do serviço é obrigatório."))]
    #[schema(example = "Reparo")]
    pub nome_servico: String,

    pub descricao_servico: Option<String>,

    // Ausente = 0
    #[schema(value_type = Option<f64>, example = 50.0)]
    pub valor: Option<Decimal>,

    // Ausente = "Pendente"
    #[schema(example = "Pendente")]
    pub status: Option<String>,
}

// Atualização parcial: campos omitidos mantêm o valor atual.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateOrdemPayload {
    #[validate(length(min = 1, message = "O nome do serviço não pode ser vazio."))]
    pub nome_servico: Option<String>,

    pub descricao_servico: Option<String>,

    #[schema(value_type = Option<f64>)]
    pub valor: Option<Decimal>,

    pub status: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusOrdemPayload {
    #[schema(example = "Concluído")]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_aceita_os_quatro_status() {
        assert_eq!(StatusOrdem::parse("Pendente"), Some(StatusOrdem::Pendente));
        assert_eq!(StatusOrdem::parse("Em Andamento"), Some(StatusOrdem::EmAndamento));
        assert_eq!(StatusOrdem::parse("Concluído"), Some(StatusOrdem::Concluido));
        assert_eq!(StatusOrdem::parse("Cancelado"), Some(StatusOrdem::Cancelado));
    }

    #[test]
    fn parse_rejeita_valores_fora_do_conjunto() {
        assert_eq!(StatusOrdem::parse("Aberto"), None);
        assert_eq!(StatusOrdem::parse("pendente"), None); // sensível a maiúsculas
        assert_eq!(StatusOrdem::parse("Concluido"), None); // sem acento não vale
        assert_eq!(StatusOrdem::parse(""), None);
    }

    #[test]
    fn valores_permitidos_lista_o_conjunto_completo() {
        assert_eq!(
            StatusOrdem::valores_permitidos(),
            "Pendente, Em Andamento, Concluído, Cancelado"
        );
    }

    #[test]
    fn update_parcial_carrega_apenas_os_campos_presentes() {
        let payload: UpdateOrdemPayload = serde_json::from_str(r#"{"valor": 75.5}"#).unwrap();
        assert_eq!(payload.valor, Some(Decimal::new(755, 1)));
        assert!(payload.nome_servico.is_none());
        assert!(payload.descricao_servico.is_none());
        assert!(payload.status.is_none());
    }

    #[test]
    fn create_sem_valor_e_sem_status_usa_os_padroes_no_servico() {
        let payload: CreateOrdemPayload = serde_json::from_str(
            r#"{"client_id": "550e8400-e29b-41d4-a716-446655440000", "nome_servico": "Reparo"}"#,
        )
        .unwrap();
        assert!(payload.valor.is_none());
        assert!(payload.status.is_none());
        assert!(payload.descricao_servico.is_none());
    }
}
