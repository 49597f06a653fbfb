// src/db/product_repo.rs

use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::product::{ListedProduct, Product, TagRef},
};

/// Campos gravados na criação/edição, já validados pelo serviço.
#[derive(Debug, Clone)]
pub struct ProductWrite<'a> {
    pub store_id: Uuid,
    pub category_id: Uuid,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price: Decimal,
    pub promotional_price: Option<Decimal>,
    pub employee_commission: Option<Decimal>,
    pub image: Option<&'a str>,
    pub active: Option<bool>,
}

#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ---
    // Leitura
    // ---

    /// Produtos da loja com categoria (INNER JOIN) e tags agregadas (LEFT JOIN),
    /// ordenados por nome. A ordenação por categoria é feita depois, no serviço.
    pub async fn list_by_store(&self, store_id: Uuid) -> Result<Vec<ListedProduct>, AppError> {
        let products = sqlx::query_as::<_, ListedProduct>(
            r#"
            SELECT
                p.id,
                p.name,
                p.description,
                p.price,
                p.promotional_price,
                p.employee_commission,
                p.image,
                p.active,
                c.name AS category,
                c.display_order AS category_order,
                COALESCE(
                    array_agg(t.name ORDER BY t.name) FILTER (WHERE t.id IS NOT NULL),
                    ARRAY[]::text[]
                ) AS tags,
                p.store_id AS store
            FROM products p
            INNER JOIN product_categories c ON c.id = p.category_id
            LEFT JOIN products_to_tags pt ON pt.product_id = p.id
            LEFT JOIN tags t ON t.id = pt.tag_id
            WHERE p.store_id = $1
            GROUP BY p.id, c.name, c.display_order
            ORDER BY p.name ASC
            "#,
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    pub async fn find_by_id(&self, product_id: Uuid) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(product_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(product)
    }

    pub async fn tag_ids(&self, product_id: Uuid) -> Result<Vec<TagRef>, AppError> {
        let tags = sqlx::query_as::<_, TagRef>(
            "SELECT tag_id AS id FROM products_to_tags WHERE product_id = $1",
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(tags)
    }

    // ---
    // Escrita (rodam dentro da transação do serviço)
    // ---

    pub async fn insert<'e, E>(&self, executor: E, input: &ProductWrite<'_>) -> Result<Product, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products
                (store_id, category_id, name, description, price,
                 promotional_price, employee_commission, image, active)
            VALUES ($1, $2, $3, NULLIF($4::text, ''), $5,
                    COALESCE($6::numeric, 0), COALESCE($7::numeric, 0),
                    NULLIF($8::text, ''), COALESCE($9::boolean, TRUE))
            RETURNING *
            "#,
        )
        .bind(input.store_id)
        .bind(input.category_id)
        .bind(input.name)
        .bind(input.description)
        .bind(input.price)
        .bind(input.promotional_price)
        .bind(input.employee_commission)
        .bind(input.image)
        .bind(input.active)
        .fetch_one(executor)
        .await?;

        Ok(product)
    }

    /// Campos opcionais ausentes (`NULL`) mantêm o valor atual; texto vazio limpa.
    pub async fn update<'e, E>(
        &self,
        executor: E,
        product_id: Uuid,
        input: &ProductWrite<'_>,
    ) -> Result<Option<Product>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products SET
                category_id = $3,
                name = $4,
                description = CASE
                    WHEN $5::text IS NULL THEN description
                    ELSE NULLIF($5::text, '')
                END,
                price = $6,
                promotional_price = COALESCE($7, promotional_price),
                employee_commission = COALESCE($8, employee_commission),
                image = CASE
                    WHEN $9::text IS NULL THEN image
                    ELSE NULLIF($9::text, '')
                END,
                active = COALESCE($10, active),
                updated_at = NOW()
            WHERE id = $1 AND store_id = $2
            RETURNING *
            "#,
        )
        .bind(product_id)
        .bind(input.store_id)
        .bind(input.category_id)
        .bind(input.name)
        .bind(input.description)
        .bind(input.price)
        .bind(input.promotional_price)
        .bind(input.employee_commission)
        .bind(input.image)
        .bind(input.active)
        .fetch_optional(executor)
        .await?;

        Ok(product)
    }

    pub async fn clear_tags<'e, E>(&self, executor: E, product_id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM products_to_tags WHERE product_id = $1")
            .bind(product_id)
            .execute(executor)
            .await?;
        Ok(())
    }

    pub async fn attach_tags<'e, E>(&self, executor: E, product_id: Uuid, tag_ids: &[Uuid]) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        if tag_ids.is_empty() {
            return Ok(());
        }

        // Inserção em massa usando UNNEST
        sqlx::query(
            r#"
            INSERT INTO products_to_tags (product_id, tag_id)
            SELECT $1, unnest($2::uuid[])
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(product_id)
        .bind(tag_ids)
        .execute(executor)
        .await?;

        Ok(())
    }
}
