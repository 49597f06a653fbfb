// src/config.rs

use std::{env, net::SocketAddr, time::Duration};

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    common::i18n::I18nStore,
    db::{CatalogRepository, ProductRepository, StoreRepository},
    services::{
        auth::AuthService, catalog_service::CatalogService, product_service::ProductService,
        store_service::StoreService,
    },
};

/// Configuração lida do ambiente (e do `.env`, se existir).
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub jwt_secret: String,
    pub addr: SocketAddr,
    pub max_connections: u32,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL deve ser definida")?;
        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET deve ser definido")?;

        let addr = env::var("APP_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .context("APP_ADDR inválido")?;

        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => value.parse().context("DATABASE_MAX_CONNECTIONS inválido")?,
            Err(_) => 5,
        };

        Ok(Self { database_url, jwt_secret, addr, max_connections })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub i18n_store: I18nStore,
    pub product_service: ProductService,
    pub catalog_service: CatalogService,
    pub store_service: StoreService,
}

impl AppState {
    pub async fn new(settings: &Settings) -> anyhow::Result<Self> {
        let db_pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&settings.database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::with_pool(db_pool, settings.jwt_secret.clone()))
    }

    // --- Monta o gráfico de dependências ---
    pub fn with_pool(db_pool: PgPool, jwt_secret: String) -> Self {
        let product_repo = ProductRepository::new(db_pool.clone());
        let catalog_repo = CatalogRepository::new(db_pool.clone());
        let store_repo = StoreRepository::new(db_pool.clone());

        let product_service = ProductService::new(
            db_pool.clone(),
            product_repo,
            catalog_repo.clone(),
            store_repo.clone(),
        );
        let catalog_service = CatalogService::new(catalog_repo, store_repo.clone());
        let store_service = StoreService::new(store_repo, product_service.clone());

        Self {
            db_pool,
            auth_service: AuthService::new(jwt_secret),
            i18n_store: I18nStore::default(),
            product_service,
            catalog_service,
            store_service,
        }
    }
}
