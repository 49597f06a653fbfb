// src/handlers/catalog.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::{auth::AuthenticatedUser, i18n::Locale},
    models::catalog::{Category, CreateCategoryPayload, CreateTagPayload, DataList, Tag, UpdateTagPayload},
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StoreQuery {
    /// ID da Loja
    pub id: Uuid,
}

// ---
// Categorias
// ---

#[utoipa::path(
    get,
    path = "/api/product/category",
    tag = "Catalog",
    params(StoreQuery),
    responses(
        (status = 200, description = "Categorias da loja por ordem de exibição", body = DataList<Category>)
    )
)]
pub async fn list_categories(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<StoreQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let categories = app_state
        .catalog_service
        .list_categories(query.id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(DataList::from(categories))))
}

#[utoipa::path(
    post,
    path = "/api/product/category",
    tag = "Catalog",
    request_body = CreateCategoryPayload,
    responses(
        (status = 201, description = "Categoria criada", body = Category),
        (status = 409, description = "Já existe uma categoria com esse nome")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_category(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    Json(payload): Json<CreateCategoryPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let category = app_state
        .catalog_service
        .create_category(&user.0, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(category)))
}

// ---
// Tags
// ---

#[utoipa::path(
    get,
    path = "/api/tag",
    tag = "Catalog",
    params(StoreQuery),
    responses(
        (status = 200, description = "Tags da loja por nome", body = DataList<Tag>)
    )
)]
pub async fn list_tags(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<StoreQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let tags = app_state
        .catalog_service
        .list_tags(query.id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(DataList::from(tags))))
}

#[utoipa::path(
    post,
    path = "/api/tag",
    tag = "Catalog",
    request_body = CreateTagPayload,
    responses(
        (status = 201, description = "Tag criada", body = Tag),
        (status = 409, description = "Já existe uma tag com esse nome")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_tag(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    Json(payload): Json<CreateTagPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let tag = app_state
        .catalog_service
        .create_tag(&user.0, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(tag)))
}

#[utoipa::path(
    put,
    path = "/api/tag",
    tag = "Catalog",
    request_body = UpdateTagPayload,
    responses(
        (status = 200, description = "Tag renomeada", body = Tag),
        (status = 404, description = "Tag não encontrada"),
        (status = 409, description = "Já existe uma tag com esse nome")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_tag(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    Json(payload): Json<UpdateTagPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let tag = app_state
        .catalog_service
        .update_tag(&user.0, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(tag)))
}
