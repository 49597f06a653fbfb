// src/services/catalog_service.rs

use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::{required, AppError},
    db::{CatalogRepository, StoreRepository},
    models::{
        auth::Viewer,
        catalog::{Category, CreateCategoryPayload, CreateTagPayload, Tag, UpdateTagPayload},
    },
    services::store_service::ensure_manager,
};

#[derive(Clone)]
pub struct CatalogService {
    catalog_repo: CatalogRepository,
    store_repo: StoreRepository,
}

impl CatalogService {
    pub fn new(catalog_repo: CatalogRepository, store_repo: StoreRepository) -> Self {
        Self { catalog_repo, store_repo }
    }

    pub async fn list_categories(&self, store_id: Uuid) -> Result<Vec<Category>, AppError> {
        self.catalog_repo.list_categories(store_id).await
    }

    pub async fn list_tags(&self, store_id: Uuid) -> Result<Vec<Tag>, AppError> {
        self.catalog_repo.list_tags(store_id).await
    }

    pub async fn create_category(&self, viewer: &Viewer, payload: &CreateCategoryPayload) -> Result<Category, AppError> {
        payload.validate()?;
        let store_id = required(payload.store, "store", "validation.store_required")?;
        ensure_manager(&self.store_repo, store_id, viewer).await?;

        let category = self
            .catalog_repo
            .create_category(store_id, payload.name.trim(), payload.order)
            .await?;

        tracing::info!(%store_id, category_id = %category.id, "Categoria criada.");
        Ok(category)
    }

    pub async fn create_tag(&self, viewer: &Viewer, payload: &CreateTagPayload) -> Result<Tag, AppError> {
        payload.validate()?;
        let store_id = required(payload.store, "store", "validation.store_required")?;
        ensure_manager(&self.store_repo, store_id, viewer).await?;

        let tag = self.catalog_repo.create_tag(store_id, payload.name.trim()).await?;

        tracing::info!(%store_id, tag_id = %tag.id, "Tag criada.");
        Ok(tag)
    }

    pub async fn update_tag(&self, viewer: &Viewer, payload: &UpdateTagPayload) -> Result<Tag, AppError> {
        payload.validate()?;
        let store_id = required(payload.store, "store", "validation.store_required")?;
        ensure_manager(&self.store_repo, store_id, viewer).await?;

        self.catalog_repo
            .update_tag(payload.id, store_id, payload.name.trim())
            .await?
            .ok_or(AppError::TagNotFound)
    }
}
