// src/config.rs

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{ClientRepository, OrdemRepository, UserRepository},
    services::{
        auth::AuthService, client_service::ClientService, ordem_service::OrdemService,
        token::TokenService,
    },
};

// TTL padrão dos tokens, em horas, quando TOKEN_TTL_HORAS não é definido.
const TOKEN_TTL_HORAS_PADRAO: i64 = 2;

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub client_service: ClientService,
    pub ordem_service: OrdemService,
}

impl AppState {
    // Carrega as configurações e monta o estado. Segredo ausente é erro
    // fatal de configuração: a aplicação não deve subir sem ele.
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL deve ser definida")?;
        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET deve ser definido")?;

        let token_ttl_horas = env::var("TOKEN_TTL_HORAS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(TOKEN_TTL_HORAS_PADRAO);

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        let user_repo = UserRepository::new(db_pool.clone());
        let client_repo = ClientRepository::new(db_pool.clone());
        let ordem_repo = OrdemRepository::new(db_pool.clone());

        let token_service = TokenService::new(jwt_secret, chrono::Duration::hours(token_ttl_horas));
        let auth_service = AuthService::new(user_repo, token_service);
        let client_service =
            ClientService::new(client_repo.clone(), ordem_repo.clone(), db_pool.clone());
        let ordem_service = OrdemService::new(ordem_repo, client_repo, db_pool.clone());

        Ok(Self { db_pool, auth_service, client_service, ordem_service })
    }
}
