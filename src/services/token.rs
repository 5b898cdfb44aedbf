// src/services/token.rs

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};

use crate::{common::error::AppError, models::auth::Claims};

// Emite e verifica tokens assinados e autocontidos (HS256).
// Sem estado no servidor: um token emitido vale até o `exp` vencer.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: String, ttl: Duration) -> Self {
        Self { secret, ttl }
    }

    pub fn issue(&self, subject: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + self.ttl;

        let claims = Claims {
            sub: subject.to_owned(),
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_ref()),
        )?)
    }

    // Devolve o subject (username) se a assinatura e o prazo estiverem válidos.
    pub fn verify(&self, token: &str) -> Result<String, AppError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_ref()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AppError::ExpiredToken,
            _ => AppError::InvalidToken,
        })?;

        Ok(token_data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn servico() -> TokenService {
        TokenService::new("segredo-de-teste".to_string(), Duration::hours(2))
    }

    #[test]
    fn emitir_e_verificar_devolve_o_subject() {
        let svc = servico();
        let token = svc.issue("alice").unwrap();
        assert_eq!(svc.verify(&token).unwrap(), "alice");
    }

    #[test]
    fn token_vencido_falha_com_expired_token() {
        // TTL negativo coloca o `exp` no passado já na emissão.
        let svc = TokenService::new("segredo-de-teste".to_string(), Duration::seconds(-120));
        let token = svc.issue("alice").unwrap();
        assert!(matches!(svc.verify(&token), Err(AppError::ExpiredToken)));
    }

    #[test]
    fn token_adulterado_falha_com_invalid_token() {
        let svc = servico();
        let token = svc.issue("alice").unwrap();

        // Troca um byte no meio do payload.
        let meio = token.len() / 2;
        let mut bytes = token.into_bytes();
        bytes[meio] = if bytes[meio] == b'A' { b'B' } else { b'A' };
        let adulterado = String::from_utf8(bytes).unwrap();

        assert!(matches!(svc.verify(&adulterado), Err(AppError::InvalidToken)));
    }

    #[test]
    fn segredo_diferente_falha_com_invalid_token() {
        let svc = servico();
        let outro = TokenService::new("outro-segredo".to_string(), Duration::hours(2));
        let token = svc.issue("alice").unwrap();
        assert!(matches!(outro.verify(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn lixo_falha_com_invalid_token() {
        let svc = servico();
        assert!(matches!(svc.verify("nao-e-um-token"), Err(AppError::InvalidToken)));
        assert!(matches!(svc.verify(""), Err(AppError::InvalidToken)));
    }
}
