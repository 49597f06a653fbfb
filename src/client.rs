// src/client.rs
//
// Camada cliente da vitrine: máquinas de estado (contexto da loja, diálogo de
// produto, card e resumo do pedido) dirigidas por uma casca de UI.

pub mod api;
pub mod card;
pub mod dialog;
pub mod form;
pub mod sell;
pub mod store_context;

use std::env;

use thiserror::Error;

pub use api::{HttpStoreApi, ProductSelections, SelectOption, StoreApi};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Falha de transporte: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("A API respondeu com status {0}")]
    Status(u16),

    #[error("Configuração do cliente inválida: {0}")]
    Config(String),
}

/// Endereço da API e token do usuário logado, se houver.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub lang: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            lang: "pt".to_string(),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn from_env() -> Result<Self, ClientError> {
        dotenvy::dotenv().ok();

        let base_url = env::var("STOREFRONT_API_URL")
            .map_err(|_| ClientError::Config("STOREFRONT_API_URL deve ser definida".into()))?;
        let mut config = Self::new(base_url);
        config.token = env::var("STOREFRONT_API_TOKEN").ok().filter(|t| !t.is_empty());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_its_trailing_slash() {
        let config = ClientConfig::new("http://localhost:3000/").with_token("abc");
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.token.as_deref(), Some("abc"));
    }
}
