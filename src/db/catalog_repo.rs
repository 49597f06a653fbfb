// src/db/catalog_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::catalog::{Category, Tag},
};

// Categorias e tags de uma loja.
#[derive(Clone)]
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_categories(&self, store_id: Uuid) -> Result<Vec<Category>, AppError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT * FROM product_categories WHERE store_id = $1 ORDER BY display_order ASC, name ASC",
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(categories)
    }

    pub async fn list_tags(&self, store_id: Uuid) -> Result<Vec<Tag>, AppError> {
        let tags = sqlx::query_as::<_, Tag>("SELECT * FROM tags WHERE store_id = $1 ORDER BY name ASC")
            .bind(store_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(tags)
    }

    pub async fn create_category(&self, store_id: Uuid, name: &str, display_order: i32) -> Result<Category, AppError> {
        sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO product_categories (store_id, name, display_order)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(store_id)
        .bind(name)
        .bind(display_order)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::CategoryNameAlreadyExists(name.to_string());
                }
            }
            e.into()
        })
    }

    pub async fn create_tag(&self, store_id: Uuid, name: &str) -> Result<Tag, AppError> {
        sqlx::query_as::<_, Tag>("INSERT INTO tags (store_id, name) VALUES ($1, $2) RETURNING *")
            .bind(store_id)
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_tag_conflict(e, name))
    }

    pub async fn update_tag(&self, tag_id: Uuid, store_id: Uuid, name: &str) -> Result<Option<Tag>, AppError> {
        sqlx::query_as::<_, Tag>("UPDATE tags SET name = $3 WHERE id = $1 AND store_id = $2 RETURNING *")
            .bind(tag_id)
            .bind(store_id)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_tag_conflict(e, name))
    }

    // ---
    // Checagens de pertencimento (usadas na gravação de produtos)
    // ---

    pub async fn category_in_store<'e, E>(&self, executor: E, category_id: Uuid, store_id: Uuid) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM product_categories WHERE id = $1 AND store_id = $2)",
        )
        .bind(category_id)
        .bind(store_id)
        .fetch_one(executor)
        .await?;
        Ok(exists)
    }

    /// Verdadeiro quando todos os ids (sem repetição) são tags da loja.
    pub async fn tags_in_store<'e, E>(&self, executor: E, tag_ids: &[Uuid], store_id: Uuid) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let mut unique = tag_ids.to_vec();
        unique.sort_unstable();
        unique.dedup();
        if unique.is_empty() {
            return Ok(true);
        }

        let found = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tags WHERE store_id = $1 AND id = ANY($2)")
            .bind(store_id)
            .bind(&unique)
            .fetch_one(executor)
            .await?;

        Ok(found == unique.len() as i64)
    }
}

fn map_tag_conflict(e: sqlx::Error, name: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return AppError::TagNameAlreadyExists(name.to_string());
        }
    }
    e.into()
}
