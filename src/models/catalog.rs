// src/models/catalog.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// --- Categorias ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    #[serde(rename = "store")]
    pub store_id: Uuid,
    #[schema(example = "Lanches")]
    pub name: String,
    // Ordem de exibição do grupo, não precisa ser única.
    #[serde(rename = "order")]
    #[schema(example = 1)]
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

// --- Tags ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: Uuid,
    #[serde(rename = "store")]
    pub store_id: Uuid,
    #[schema(example = "Vegano")]
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Envelope `{ data: [...] }` das listas de referência.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DataList<T> {
    pub data: Vec<T>,
}

impl<T> From<Vec<T>> for DataList<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

// ---
// Payloads
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryPayload {
    #[validate(required(message = "validation.store_required"))]
    pub store: Option<Uuid>,

    #[validate(custom(function = "crate::models::product::validate_name"))]
    #[schema(example = "Bebidas")]
    pub name: String,

    #[serde(default)]
    #[schema(example = 2)]
    pub order: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTagPayload {
    #[validate(required(message = "validation.store_required"))]
    pub store: Option<Uuid>,

    #[validate(custom(function = "crate::models::product::validate_name"))]
    #[schema(example = "Sem glúten")]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTagPayload {
    pub id: Uuid,

    #[validate(required(message = "validation.store_required"))]
    pub store: Option<Uuid>,

    #[validate(custom(function = "crate::models::product::validate_name"))]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_category_and_tag_names_are_rejected() {
        let category = CreateCategoryPayload { store: Some(Uuid::new_v4()), name: "   ".into(), order: 1 };
        assert!(category.validate().unwrap_err().field_errors().contains_key("name"));

        let tag = CreateTagPayload { store: Some(Uuid::new_v4()), name: " ".into() };
        assert!(tag.validate().unwrap_err().field_errors().contains_key("name"));

        let renamed = UpdateTagPayload { id: Uuid::new_v4(), store: Some(Uuid::new_v4()), name: "\t".into() };
        assert!(renamed.validate().unwrap_err().field_errors().contains_key("name"));
    }

    #[test]
    fn names_with_text_are_accepted() {
        let tag = CreateTagPayload { store: Some(Uuid::new_v4()), name: " Vegano ".into() };
        assert!(tag.validate().is_ok());
    }
}
