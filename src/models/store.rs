// src/models/store.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{models::product::ListedProduct, theme::StoreTheme};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: Uuid,
    #[schema(example = "Lanchonete do Zé")]
    pub name: String,
    #[schema(example = "#3366ff")]
    pub primary_color: Option<String>,
    #[schema(example = "#111111")]
    pub secondary_color: Option<String>,
    pub order_enabled: bool,
    pub created_at: DateTime<Utc>,
}

/// Relação do usuário logado com a loja (`GET /api/me?store=`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ViewerRole {
    pub manager: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfiguration {
    pub order_enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StoreSummary {
    pub id: Uuid,
    pub name: String,
}

/// Tudo o que a página da loja precisa para montar a listagem.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StorePage {
    pub store: StoreSummary,
    pub products: Vec<ListedProduct>,
    pub product_count: usize,
    pub order_enabled: bool,
    pub theme: StoreTheme,
}
