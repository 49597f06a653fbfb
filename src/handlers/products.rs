// src/handlers/products.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::{auth::AuthenticatedUser, i18n::Locale},
    models::product::{ListedProduct, ProductDetail, ProductPayload, SaveMode},
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// ID do produto
    pub id: Uuid,
}

// GET /api/stores/{id}/products
#[utoipa::path(
    get,
    path = "/api/stores/{id}/products",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "ID da Loja")
    ),
    responses(
        (status = 200, description = "Produtos ordenados por categoria e nome", body = [ListedProduct]),
        (status = 500, description = "Não foi possível buscar os produtos")
    )
)]
pub async fn list_store_products(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(store_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let products = app_state
        .product_service
        .list_products(store_id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(products)))
}

// GET /api/product?id=
#[utoipa::path(
    get,
    path = "/api/product",
    tag = "Products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Produto e ids das suas tags", body = ProductDetail),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn get_product(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<ProductQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let detail = app_state
        .product_service
        .get_detail(query.id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(detail)))
}

// POST /api/product
#[utoipa::path(
    post,
    path = "/api/product",
    tag = "Products",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Produto criado"),
        (status = 400, description = "Campos inválidos"),
        (status = 403, description = "Usuário não é gerente da loja")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    Json(payload): Json<ProductPayload>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .product_service
        .save(&user.0, SaveMode::Create, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(json!({}))))
}

// PUT /api/product
#[utoipa::path(
    put,
    path = "/api/product",
    tag = "Products",
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Produto atualizado"),
        (status = 400, description = "Campos inválidos"),
        (status = 404, description = "Produto não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_product(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    Json(payload): Json<ProductPayload>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .product_service
        .save(&user.0, SaveMode::Update, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(json!({}))))
}
