// src/services/product_service.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::{required, AppError},
    db::{CatalogRepository, ProductRepository, ProductWrite, StoreRepository},
    models::{
        auth::Viewer,
        product::{ListedProduct, Product, ProductDetail, ProductPayload, SaveMode},
    },
    services::store_service::ensure_manager,
};

/// Ordenação secundária: agrupa por ordem da categoria mantendo a ordem
/// por nome que veio do banco (a ordenação é estável).
pub fn sort_by_category_order(products: &mut [ListedProduct]) {
    products.sort_by_key(|product| product.category_order);
}

#[derive(Clone)]
pub struct ProductService {
    pool: PgPool,
    product_repo: ProductRepository,
    catalog_repo: CatalogRepository,
    store_repo: StoreRepository,
}

impl ProductService {
    pub fn new(
        pool: PgPool,
        product_repo: ProductRepository,
        catalog_repo: CatalogRepository,
        store_repo: StoreRepository,
    ) -> Self {
        Self { pool, product_repo, catalog_repo, store_repo }
    }

    pub async fn list_products(&self, store_id: Uuid) -> Result<Vec<ListedProduct>, AppError> {
        let mut products = self.product_repo.list_by_store(store_id).await.map_err(|e| {
            tracing::error!(%store_id, error = %e, "Falha ao buscar os produtos da loja.");
            AppError::CannotGetProducts
        })?;

        sort_by_category_order(&mut products);
        Ok(products)
    }

    pub async fn get_detail(&self, product_id: Uuid) -> Result<ProductDetail, AppError> {
        let data = self
            .product_repo
            .find_by_id(product_id)
            .await?
            .ok_or(AppError::ProductNotFound)?;
        let tags = self.product_repo.tag_ids(product_id).await?;

        Ok(ProductDetail { data, tags })
    }

    /// Cria ou edita um produto. Tudo roda em uma transação: se as tags
    /// falharem, o produto também é desfeito.
    pub async fn save(&self, viewer: &Viewer, mode: SaveMode, payload: &ProductPayload) -> Result<Product, AppError> {
        // Nada toca o banco antes da validação.
        payload.validate_for(mode)?;
        let store_id = required(payload.store, "store", "validation.store_required")?;
        let category_id = required(payload.category, "category", "validation.category_required")?;

        ensure_manager(&self.store_repo, store_id, viewer).await?;

        let input = ProductWrite {
            store_id,
            category_id,
            name: payload.name.trim(),
            description: payload.description.as_deref(),
            price: payload.price,
            promotional_price: payload.promotional_price,
            employee_commission: payload.employee_commission,
            image: payload.image.as_deref(),
            active: payload.active,
        };

        let mut tx = self.pool.begin().await?;

        if !self.catalog_repo.category_in_store(&mut *tx, category_id, store_id).await? {
            return Err(AppError::CategoryNotInStore);
        }
        if let Some(tag_ids) = &payload.tags {
            if !self.catalog_repo.tags_in_store(&mut *tx, tag_ids, store_id).await? {
                return Err(AppError::TagNotInStore);
            }
        }

        let product = match mode {
            SaveMode::Create => {
                let product = self.product_repo.insert(&mut *tx, &input).await?;
                if let Some(tag_ids) = &payload.tags {
                    self.product_repo.attach_tags(&mut *tx, product.id, tag_ids).await?;
                }
                product
            }
            SaveMode::Update => {
                let product_id = required(payload.id, "id", "validation.id_required")?;
                let product = self
                    .product_repo
                    .update(&mut *tx, product_id, &input)
                    .await?
                    .ok_or(AppError::ProductNotFound)?;

                // Ausente = mantém os vínculos atuais.
                if let Some(tag_ids) = &payload.tags {
                    self.product_repo.clear_tags(&mut *tx, product.id).await?;
                    self.product_repo.attach_tags(&mut *tx, product.id, tag_ids).await?;
                }
                product
            }
        };

        tx.commit().await?;

        tracing::info!(%store_id, product_id = %product.id, ?mode, "Produto salvo.");
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn listed(name: &str, category_order: i32) -> ListedProduct {
        ListedProduct {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            price: Decimal::from(10),
            promotional_price: Decimal::ZERO,
            employee_commission: Decimal::ZERO,
            image: None,
            active: true,
            category: format!("Categoria {category_order}"),
            category_order,
            tags: Vec::new(),
            store: Uuid::nil(),
        }
    }

    fn names(products: &[ListedProduct]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn groups_by_category_order_keeping_name_order_inside_each_group() {
        // Já vem ordenado por nome do banco.
        let mut products = vec![
            listed("Água", 2),
            listed("Batata", 1),
            listed("Cerveja", 2),
            listed("Coxinha", 1),
            listed("Suco", 2),
        ];

        sort_by_category_order(&mut products);

        assert_eq!(names(&products), vec!["Batata", "Coxinha", "Água", "Cerveja", "Suco"]);
    }

    #[test]
    fn equal_category_order_preserves_relative_order() {
        let mut products = vec![listed("Zebra", 0), listed("Abacaxi", 0), listed("Manga", 0)];

        sort_by_category_order(&mut products);

        assert_eq!(names(&products), vec!["Zebra", "Abacaxi", "Manga"]);
    }
}
