// src/models/product.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidateUrl, ValidationError, ValidationErrors};

// ---
// Produto listado na vitrine (com categoria e tags agregadas)
// ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListedProduct {
    pub id: Uuid,
    #[schema(example = "Hamburguer")]
    pub name: String,
    pub description: Option<String>,
    #[schema(example = 25.9)]
    pub price: Decimal,
    pub promotional_price: Decimal,
    pub employee_commission: Decimal,
    #[schema(example = "https://i.imgur.com/abc.jpeg")]
    pub image: Option<String>,
    pub active: bool,
    #[schema(example = "Lanches")]
    pub category: String,
    #[schema(example = 1)]
    pub category_order: i32,
    // Lista vazia quando o produto não tem tags, nunca nula.
    pub tags: Vec<String>,
    pub store: Uuid,
}

// ---
// Linha da tabela `products`
// ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    #[serde(rename = "store")]
    pub store_id: Uuid,
    // A API expõe o id da categoria como `category`.
    #[serde(rename = "category")]
    pub category_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub promotional_price: Decimal,
    pub employee_commission: Decimal,
    pub image: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TagRef {
    pub id: Uuid,
}

/// Resposta de `GET /api/product?id=`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDetail {
    pub data: Product,
    pub tags: Vec<TagRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    Create,
    Update,
}

// ---
// Validações customizadas
// ---
fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() && !val.is_zero() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("validation.value_negative".into());
        return Err(err);
    }
    Ok(())
}

fn validate_price(val: &Decimal) -> Result<(), ValidationError> {
    validate_not_negative(val).map_err(|mut err| {
        err.message = Some("validation.price_negative".into());
        err
    })
}

// Só espaços conta como vazio (o nome é gravado sem espaços nas pontas).
pub(crate) fn validate_name(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("length");
        err.message = Some("validation.name_required".into());
        return Err(err);
    }
    Ok(())
}

// Vazio é permitido: significa "remover a imagem".
fn validate_image(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_url() {
        return Ok(());
    }
    let mut err = ValidationError::new("url");
    err.message = Some("validation.image_url".into());
    Err(err)
}

// ---
// Payload: formulário de produto (criação e edição)
// ---
// Campos opcionais ausentes não são serializados; na edição o servidor
// mantém o valor gravado quando o campo não vem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    #[validate(required(message = "validation.store_required"))]
    pub store: Option<Uuid>,

    #[validate(custom(function = "validate_name"))]
    #[schema(example = "Hamburguer")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[validate(custom(function = "validate_price"))]
    #[schema(example = 250)]
    pub price: Decimal,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotional_price: Option<Decimal>,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_commission: Option<Decimal>,

    #[validate(custom(function = "validate_image"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "https://i.imgur.com/abc.jpeg")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[validate(required(message = "validation.category_required"))]
    pub category: Option<Uuid>,

    // Ausente na edição = mantém as tags atuais.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Uuid>>,
}

impl ProductPayload {
    /// Validação do derive mais a regra de edição (precisa de `id`).
    pub fn validate_for(&self, mode: SaveMode) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if mode == SaveMode::Update && self.id.is_none() {
            let mut err = ValidationError::new("required");
            err.message = Some("validation.id_required".into());
            errors.add("id", err);
        }

        if errors.errors().is_empty() { Ok(()) } else { Err(errors) }
    }
}
