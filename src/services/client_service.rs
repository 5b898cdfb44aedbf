// src/services/client_service.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{ClientRepository, OrdemRepository},
    models::{auth::User, clients::Client},
};

#[derive(Clone)]
pub struct ClientService {
    client_repo: ClientRepository,
    ordem_repo: OrdemRepository,
    pool: PgPool,
}

impl ClientService {
    pub fn new(client_repo: ClientRepository, ordem_repo: OrdemRepository, pool: PgPool) -> Self {
        Self { client_repo, ordem_repo, pool }
    }

    pub async fn create_client(
        &self,
        user: &User,
        nome: &str,
        telefone: &str,
        email: &str,
    ) -> Result<Client, AppError> {
        self.client_repo
            .create(&self.pool, user.id, nome, telefone, email)
            .await
    }

    pub async fn list_clients(&self, user: &User) -> Result<Vec<Client>, AppError> {
        self.client_repo.list_by_user(user.id).await
    }

    pub async fn get_client(&self, user: &User, client_id: Uuid) -> Result<Client, AppError> {
        self.client_repo
            .find_owned(&self.pool, client_id, user.id)
            .await?
            .ok_or(AppError::ResourceNotFound)
    }

    pub async fn update_client(
        &self,
        user: &User,
        client_id: Uuid,
        nome: Option<&str>,
        telefone: Option<&str>,
        email: Option<&str>,
    ) -> Result<Client, AppError> {
        self.client_repo
            .update_owned(&self.pool, client_id, user.id, nome, telefone, email)
            .await?
            .ok_or(AppError::ResourceNotFound)
    }

    // Exclusão em cascata: ordens primeiro, depois o cliente, na mesma
    // transação. Zero linhas no DELETE do cliente = não existe ou não é
    // deste usuário; a transação é desfeita no drop.
    pub async fn delete_client(&self, user: &User, client_id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        self.ordem_repo
            .delete_by_client(&mut *tx, client_id, user.id)
            .await?;

        let removidos = self
            .client_repo
            .delete_owned(&mut *tx, client_id, user.id)
            .await?;

        if removidos == 0 {
            return Err(AppError::ResourceNotFound);
        }

        tx.commit().await?;
        Ok(())
    }
}
