// src/services/auth.rs

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::auth::{Claims, Viewer},
};

/// Validação dos tokens emitidos pelo serviço de login (HS256).
#[derive(Clone)]
pub struct AuthService {
    jwt_secret: String,
}

impl AuthService {
    pub fn new(jwt_secret: String) -> Self {
        Self { jwt_secret }
    }

    pub fn validate_token(&self, token: &str) -> Result<Viewer, AppError> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AppError::InvalidToken)?;

        Ok(Viewer { id: token_data.claims.sub })
    }

    /// Emite um token para o usuário, com validade de 7 dias. O login fica em
    /// outro serviço; isto serve aos testes e às ferramentas de desenvolvimento.
    pub fn create_token(&self, user_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::days(7);

        let claims = Claims {
            sub: user_id,
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_token_round_trips_to_its_viewer() {
        let auth = AuthService::new("segredo".into());
        let user_id = Uuid::new_v4();

        let token = auth.create_token(user_id).unwrap();
        assert_eq!(auth.validate_token(&token).unwrap(), Viewer { id: user_id });
    }

    #[test]
    fn tokens_signed_with_another_secret_are_rejected() {
        let token = AuthService::new("outro".into()).create_token(Uuid::new_v4()).unwrap();
        let result = AuthService::new("segredo".into()).validate_token(&token);
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn garbage_is_rejected() {
        let result = AuthService::new("segredo".into()).validate_token("nao-e-um-jwt");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }
}
