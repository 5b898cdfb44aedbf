// src/services/ordem_service.rs

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{ClientRepository, OrdemRepository},
    models::{
        auth::User,
        ordens::{Ordem, StatusOrdem},
    },
};

// Valida o status contra o conjunto fechado antes de qualquer escrita.
fn validar_status(valor: &str) -> Result<StatusOrdem, AppError> {
    StatusOrdem::parse(valor).ok_or_else(|| AppError::InvalidStatus(valor.to_string()))
}

#[derive(Clone)]
pub struct OrdemService {
    ordem_repo: OrdemRepository,
    client_repo: ClientRepository,
    pool: PgPool,
}

impl OrdemService {
    pub fn new(ordem_repo: OrdemRepository, client_repo: ClientRepository, pool: PgPool) -> Self {
        Self { ordem_repo, client_repo, pool }
    }

    // A checagem de posse do cliente e o INSERT ficam na mesma transação:
    // um DELETE concorrente do cliente não pode deixar ordem órfã.
    pub async fn create_ordem(
        &self,
        user: &User,
        client_id: Uuid,
        nome_servico: &str,
        descricao_servico: Option<&str>,
        valor: Option<Decimal>,
        status: Option<&str>,
    ) -> Result<Ordem, AppError> {
        let status = match status {
            Some(s) => validar_status(s)?,
            None => StatusOrdem::Pendente,
        };

        let mut tx = self.pool.begin().await?;

        // O cliente precisa existir E pertencer ao usuário autenticado.
        // Cliente de outro usuário responde igual a cliente inexistente.
        self.client_repo
            .find_owned(&mut *tx, client_id, user.id)
            .await?
            .ok_or(AppError::ResourceNotFound)?;

        let ordem = self
            .ordem_repo
            .create(
                &mut *tx,
                client_id,
                nome_servico,
                descricao_servico,
                valor.unwrap_or(Decimal::ZERO),
                status.as_str(),
            )
            .await?;

        tx.commit().await?;
        Ok(ordem)
    }

    pub async fn list_ordens(&self, user: &User) -> Result<Vec<Ordem>, AppError> {
        self.ordem_repo.list_by_user(user.id).await
    }

    pub async fn list_client_ordens(&self, user: &User, client_id: Uuid) -> Result<Vec<Ordem>, AppError> {
        self.ordem_repo.list_by_client(client_id, user.id).await
    }

    pub async fn get_ordem(&self, user: &User, ordem_id: Uuid) -> Result<Ordem, AppError> {
        self.ordem_repo
            .find_owned(ordem_id, user.id)
            .await?
            .ok_or(AppError::ResourceNotFound)
    }

    pub async fn update_ordem(
        &self,
        user: &User,
        ordem_id: Uuid,
        nome_servico: Option<&str>,
        descricao_servico: Option<&str>,
        valor: Option<Decimal>,
        status: Option<&str>,
    ) -> Result<Ordem, AppError> {
        let status = match status {
            Some(s) => Some(validar_status(s)?),
            None => None,
        };

        self.ordem_repo
            .update_owned(
                &self.pool,
                ordem_id,
                user.id,
                nome_servico,
                descricao_servico,
                valor,
                status.map(|s| s.as_str()),
            )
            .await?
            .ok_or(AppError::ResourceNotFound)
    }

    pub async fn update_status(
        &self,
        user: &User,
        ordem_id: Uuid,
        status: &str,
    ) -> Result<Ordem, AppError> {
        let status = validar_status(status)?;

        self.ordem_repo
            .update_owned(&self.pool, ordem_id, user.id, None, None, None, Some(status.as_str()))
            .await?
            .ok_or(AppError::ResourceNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validar_status_aceita_o_conjunto_fechado() {
        assert!(validar_status("Pendente").is_ok());
        assert!(validar_status("Em Andamento").is_ok());
        assert!(validar_status("Concluído").is_ok());
        assert!(validar_status("Cancelado").is_ok());
    }

    #[test]
    fn validar_status_rejeita_com_o_valor_ofensor() {
        match validar_status("Finalizado") {
            Err(AppError::InvalidStatus(v)) => assert_eq!(v, "Finalizado"),
            outro => panic!("esperava InvalidStatus, veio {:?}", outro),
        }
    }
}
