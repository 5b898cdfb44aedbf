// src/services/auth.rs

use bcrypt::{hash, verify};

use crate::{
    common::error::AppError,
    db::UserRepository,
    models::auth::User,
    services::token::TokenService,
};

pub fn hash_password(password: &str) -> Result<String, AppError> {
    Ok(hash(password, bcrypt::DEFAULT_COST)?)
}

// Hash armazenado ilegível ou corrompido conta como falha de verificação,
// nunca como erro para o chamador.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    verify(password, password_hash).unwrap_or(false)
}

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    token_service: TokenService,
}

impl AuthService {
    pub fn new(user_repo: UserRepository, token_service: TokenService) -> Self {
        Self { user_repo, token_service }
    }

    // Registra o usuário e já devolve um token (auto-login).
    pub async fn register_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<String, AppError> {
        // O hashing é pesado; roda fora do executor async.
        let password_clone = password.to_owned();
        let hashed_password = tokio::task::spawn_blocking(move || hash_password(&password_clone))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        let new_user = self
            .user_repo
            .create_user(username, email, &hashed_password)
            .await?;

        self.token_service.issue(&new_user.username)
    }

    pub async fn login_user(&self, username: &str, password: &str) -> Result<String, AppError> {
        // Usuário desconhecido e senha errada produzem o mesmo erro.
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password_clone = password.to_owned();
        let password_hash_clone = user.password_hash.clone();

        let is_password_valid =
            tokio::task::spawn_blocking(move || verify_password(&password_clone, &password_hash_clone))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))?;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        self.token_service.issue(&user.username)
    }

    // Resolve o token em um User do banco. Token válido sem usuário
    // correspondente é uma anomalia de integridade (UserNotFound).
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let subject = self.token_service.verify(token)?;

        self.user_repo
            .find_by_username(&subject)
            .await?
            .ok_or(AppError::UserNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_e_verify_fecham_o_ciclo() {
        let hash = hash_password("senha123").unwrap();
        assert!(verify_password("senha123", &hash));
    }

    #[test]
    fn senha_errada_nao_verifica() {
        let hash = hash_password("senha123").unwrap();
        assert!(!verify_password("senha124", &hash));
    }

    #[test]
    fn hash_corrompido_conta_como_falha() {
        assert!(!verify_password("senha123", "isto-nao-e-um-hash-bcrypt"));
        assert!(!verify_password("senha123", ""));
    }

    #[test]
    fn sal_aleatorio_gera_hashes_diferentes() {
        let a = hash_password("senha123").unwrap();
        let b = hash_password("senha123").unwrap();
        assert_ne!(a, b);
        // Ambos continuam verificando a mesma senha.
        assert!(verify_password("senha123", &a));
        assert!(verify_password("senha123", &b));
    }
}
