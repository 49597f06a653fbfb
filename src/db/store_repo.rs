// src/db/store_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, models::store::Store};

#[derive(Clone)]
pub struct StoreRepository {
    pool: PgPool,
}

impl StoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, store_id: Uuid) -> Result<Option<Store>, AppError> {
        let store = sqlx::query_as::<_, Store>("SELECT * FROM stores WHERE id = $1")
            .bind(store_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(store)
    }

    /// Quem não é membro da loja não é gerente.
    pub async fn is_manager(&self, store_id: Uuid, user_id: Uuid) -> Result<bool, AppError> {
        let manager = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT COALESCE(
                (SELECT manager FROM store_members WHERE store_id = $1 AND user_id = $2),
                FALSE
            )
            "#,
        )
        .bind(store_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(manager)
    }
}
