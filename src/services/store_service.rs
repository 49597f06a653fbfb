// src/services/store_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::StoreRepository,
    models::{
        auth::Viewer,
        store::{StoreConfiguration, StorePage, StoreSummary, ViewerRole},
    },
    services::product_service::ProductService,
    theme::{StoreTheme, ThemeColors},
};

/// Só gerentes da loja podem alterar produtos, categorias e tags.
pub async fn ensure_manager(store_repo: &StoreRepository, store_id: Uuid, viewer: &Viewer) -> Result<(), AppError> {
    if store_repo.is_manager(store_id, viewer.id).await? {
        Ok(())
    } else {
        tracing::warn!(%store_id, user_id = %viewer.id, "Usuário sem papel de gerente tentou alterar a loja.");
        Err(AppError::NotStoreManager)
    }
}

#[derive(Clone)]
pub struct StoreService {
    store_repo: StoreRepository,
    product_service: ProductService,
}

impl StoreService {
    pub fn new(store_repo: StoreRepository, product_service: ProductService) -> Self {
        Self { store_repo, product_service }
    }

    pub async fn viewer_role(&self, store_id: Uuid, viewer: &Viewer) -> Result<ViewerRole, AppError> {
        let manager = self.store_repo.is_manager(store_id, viewer.id).await?;
        Ok(ViewerRole { manager })
    }

    pub async fn configuration(&self, store_id: Uuid) -> Result<StoreConfiguration, AppError> {
        let store = self.store_repo.find_by_id(store_id).await?.ok_or(AppError::StoreNotFound)?;
        Ok(StoreConfiguration { order_enabled: store.order_enabled })
    }

    pub async fn theme(&self, store_id: Uuid) -> Result<StoreTheme, AppError> {
        let store = self.store_repo.find_by_id(store_id).await?.ok_or(AppError::StoreNotFound)?;
        let colors = ThemeColors::derive(store.primary_color.as_deref(), store.secondary_color.as_deref());
        Ok(colors.into())
    }

    /// Loja e produtos são buscados em paralelo.
    pub async fn page(&self, store_id: Uuid) -> Result<StorePage, AppError> {
        let (store, products) = tokio::try_join!(
            async {
                self.store_repo
                    .find_by_id(store_id)
                    .await
                    .and_then(|store| store.ok_or(AppError::StoreNotFound))
            },
            self.product_service.list_products(store_id),
        )?;

        let colors = ThemeColors::derive(store.primary_color.as_deref(), store.secondary_color.as_deref());

        Ok(StorePage {
            store: StoreSummary { id: store.id, name: store.name },
            product_count: products.len(),
            products,
            order_enabled: store.order_enabled,
            theme: colors.into(),
        })
    }
}
