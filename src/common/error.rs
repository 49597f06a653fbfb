// src/common/error.rs

use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::{common::i18n::I18nStore, middleware::i18n::Locale};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Qualquer falha na consulta de produtos colapsa aqui, sem resultado parcial.
    #[error("Não foi possível buscar os produtos")]
    CannotGetProducts,

    #[error("Produto não encontrado")]
    ProductNotFound,

    #[error("Loja não encontrada")]
    StoreNotFound,

    #[error("Tag não encontrada")]
    TagNotFound,

    #[error("Categoria '{0}' já existe")]
    CategoryNameAlreadyExists(String),

    #[error("Tag '{0}' já existe")]
    TagNameAlreadyExists(String),

    #[error("Categoria não pertence à loja")]
    CategoryNotInStore,

    #[error("Tag não pertence à loja")]
    TagNotInStore,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Usuário não é gerente da loja")]
    NotStoreManager,

    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

/// Erro já traduzido, pronto para virar resposta HTTP.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Vec<String>>>,
}

impl ApiError {
    fn simple(status: StatusCode, error: String) -> Self {
        Self { status, error, details: None }
    }
}

/// Extrai um campo obrigatório já validado, devolvendo erro de validação se faltar.
pub fn required<T>(value: Option<T>, field: &'static str, message: &'static str) -> Result<T, AppError> {
    value.ok_or_else(|| {
        let mut errors = validator::ValidationErrors::new();
        let mut err = validator::ValidationError::new("required");
        err.message = Some(message.into());
        errors.add(field, err);
        AppError::ValidationError(errors)
    })
}

impl AppError {
    pub fn to_api_error(&self, locale: &Locale, i18n: &I18nStore) -> ApiError {
        let lang = locale.0.as_str();
        let t = |key: &str| i18n.translate(lang, key);

        match self {
            AppError::ValidationError(errors) => {
                let mut details = HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .map(|e| match &e.message {
                            Some(key) => t(&**key),
                            None => e.code.to_string(),
                        })
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                ApiError {
                    status: StatusCode::BAD_REQUEST,
                    error: t("validation.invalid_fields"),
                    details: Some(details),
                }
            }
            AppError::CannotGetProducts => {
                ApiError::simple(StatusCode::INTERNAL_SERVER_ERROR, t("products.cannot_get"))
            }
            AppError::ProductNotFound => ApiError::simple(StatusCode::NOT_FOUND, t("products.not_found")),
            AppError::StoreNotFound => ApiError::simple(StatusCode::NOT_FOUND, t("stores.not_found")),
            AppError::TagNotFound => ApiError::simple(StatusCode::NOT_FOUND, t("catalog.tag_not_found")),
            AppError::CategoryNameAlreadyExists(name) => ApiError::simple(
                StatusCode::CONFLICT,
                i18n.translate_with(lang, "catalog.category_exists", &[("name", name.as_str())]),
            ),
            AppError::TagNameAlreadyExists(name) => ApiError::simple(
                StatusCode::CONFLICT,
                i18n.translate_with(lang, "catalog.tag_exists", &[("name", name.as_str())]),
            ),
            AppError::CategoryNotInStore => {
                ApiError::simple(StatusCode::BAD_REQUEST, t("catalog.category_not_in_store"))
            }
            AppError::TagNotInStore => ApiError::simple(StatusCode::BAD_REQUEST, t("catalog.tag_not_in_store")),
            AppError::InvalidToken | AppError::JwtError(_) => {
                ApiError::simple(StatusCode::UNAUTHORIZED, t("auth.invalid_token"))
            }
            AppError::NotStoreManager => ApiError::simple(StatusCode::FORBIDDEN, t("auth.not_manager")),

            // Banco e erros internos viram 500; o detalhe fica só no log.
            e @ (AppError::DatabaseError(_) | AppError::InternalServerError(_)) => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                ApiError::simple(StatusCode::INTERNAL_SERVER_ERROR, t("server.unexpected"))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

// Usado por middlewares, onde não há `Locale` à mão.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_api_error(&Locale::default(), &I18nStore::default()).into_response()
    }
}
