// src/db/client_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::clients::Client};

// Toda consulta carrega o filtro de dono (`user_id`) na própria query.
// Nunca buscamos por id sozinho para depois conferir o dono: "não existe"
// e "não é seu" precisam ser indistinguíveis para quem chama.
#[derive(Clone)]
pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
        nome: &str,
        telefone: &str,
        email: &str,
    ) -> Result<Client, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (user_id, nome, telefone, email)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, nome, telefone, email, created_at
            "#,
        )
        .bind(user_id)
        .bind(nome)
        .bind(telefone)
        .bind(email)
        .fetch_one(executor)
        .await?;

        Ok(client)
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Client>, AppError> {
        let clients = sqlx::query_as::<_, Client>(
            r#"
            SELECT id, user_id, nome, telefone, email, created_at
            FROM clients
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(clients)
    }

    pub async fn find_owned<'e, E>(
        &self,
        executor: E,
        client_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Client>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let maybe_client = sqlx::query_as::<_, Client>(
            r#"
            SELECT id, user_id, nome, telefone, email, created_at
            FROM clients
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(client_id)
        .bind(user_id)
        .fetch_optional(executor)
        .await?;

        Ok(maybe_client)
    }

    // Atualização parcial em uma única query: COALESCE mantém a coluna
    // quando o campo não veio no payload.
    pub async fn update_owned<'e, E>(
        &self,
        executor: E,
        client_id: Uuid,
        user_id: Uuid,
        nome: Option<&str>,
        telefone: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<Client>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let maybe_client = sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients
            SET
                nome = COALESCE($3, nome),
                telefone = COALESCE($4, telefone),
                email = COALESCE($5, email)
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, nome, telefone, email, created_at
            "#,
        )
        .bind(client_id)
        .bind(user_id)
        .bind(nome)
        .bind(telefone)
        .bind(email)
        .fetch_optional(executor)
        .await?;

        Ok(maybe_client)
    }

    // Retorna quantas linhas foram removidas (0 = não existe ou não é seu).
    pub async fn delete_owned<'e, E>(
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
            DELETE FROM clients
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(client_id)
        .bind(user_id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }
}
