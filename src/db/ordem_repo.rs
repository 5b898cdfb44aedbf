// src/db/ordem_repo.rs

use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::ordens::Ordem};

// Ordens não guardam o dono diretamente: a posse é transitiva pelo cliente.
// Todas as consultas atravessam `clients` e filtram por `c.user_id`.
#[derive(Clone)]
pub struct OrdemRepository {
    pool: PgPool,
}

impl OrdemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        client_id: Uuid,
        nome_servico: &str,
        descricao_servico: Option<&str>,
        valor: Decimal,
        status: &str,
    ) -> Result<Ordem, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let ordem = sqlx::query_as::<_, Ordem>(
            r#"
            INSERT INTO ordens (client_id, nome_servico, descricao_servico, valor, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, client_id, nome_servico, descricao_servico, valor, status,
                      created_at, updated_at
            "#,
        )
        .bind(client_id)
        .bind(nome_servico)
        .bind(descricao_servico)
        .bind(valor)
        .bind(status)
        .fetch_one(executor)
        .await?;

        Ok(ordem)
    }

    // Todas as ordens do usuário, atravessando seus clientes
    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Ordem>, AppError> {
        let ordens = sqlx::query_as::<_, Ordem>(
            r#"
            SELECT o.id, o.client_id, o.nome_servico, o.descricao_servico, o.valor, o.status,
                   o.created_at, o.updated_at
            FROM ordens o
            INNER JOIN clients c ON o.client_id = c.id
            WHERE c.user_id = $1
            ORDER BY o.created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ordens)
    }

    // Cliente inexistente ou de outro usuário resulta em lista vazia:
    // o próprio predicado já aplica a posse.
    pub async fn list_by_client(&self, client_id: Uuid, user_id: Uuid) -> Result<Vec<Ordem>, AppError> {
        let ordens = sqlx::query_as::<_, Ordem>(
            r#"
            SELECT o.id, o.client_id, o.nome_servico, o.descricao_servico, o.valor, o.status,
                   o.created_at, o.updated_at
            FROM ordens o
            INNER JOIN clients c ON o.client_id = c.id
            WHERE o.client_id = $1 AND c.user_id = $2
            ORDER BY o.created_at ASC
            "#,
        )
        .bind(client_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ordens)
    }

    pub async fn find_owned(&self, ordem_id: Uuid, user_id: Uuid) -> Result<Option<Ordem>, AppError> {
        let maybe_ordem = sqlx::query_as::<_, Ordem>(
            r#"
            SELECT o.id, o.client_id, o.nome_servico, o.descricao_servico, o.valor, o.status,
                   o.created_at, o.updated_at
            FROM ordens o
            INNER JOIN clients c ON o.client_id = c.id
            WHERE o.id = $1 AND c.user_id = $2
            "#,
        )
        .bind(ordem_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(maybe_ordem)
    }

    // Atualização parcial com checagem de posse na mesma query.
    // `updated_at` avança em toda mutação.
    pub async fn update_owned<'e, E>(
        &self,
        executor: E,
        ordem_id: Uuid,
        user_id: Uuid,
        nome_servico: Option<&str>,
        descricao_servico: Option<&str>,
        valor: Option<Decimal>,
        status: Option<&str>,
    ) -> Result<Option<Ordem>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let maybe_ordem = sqlx::query_as::<_, Ordem>(
            r#"
            UPDATE ordens o
            SET
                nome_servico = COALESCE($3, o.nome_servico),
                descricao_servico = COALESCE($4, o.descricao_servico),
                valor = COALESCE($5, o.valor),
                status = COALESCE($6, o.status),
                updated_at = NOW()
            FROM clients c
            WHERE o.id = $1 AND o.client_id = c.id AND c.user_id = $2
            RETURNING o.id, o.client_id, o.nome_servico, o.descricao_servico, o.valor, o.status,
                      o.created_at, o.updated_at
            "#,
        )
        .bind(ordem_id)
        .bind(user_id)
        .bind(nome_servico)
        .bind(descricao_servico)
        .bind(valor)
        .bind(status)
        .fetch_optional(executor)
        .await?;

        Ok(maybe_ordem)
    }

    // Remove as ordens de um cliente do usuário (parte da exclusão em cascata).
    pub async fn delete_by_client<'e, E>(
        &self,
        executor: E,
        client_id: Uuid,
        user_id: Uuid,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            r#"
            DELETE FROM ordens
            WHERE client_id IN (
                SELECT id FROM clients
                WHERE id = $1 AND user_id = $2
            )
            "#,
        )
        .bind(client_id)
        .bind(user_id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }
}
