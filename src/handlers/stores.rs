// src/handlers/stores.rs

use axum::{
    extract::{Path, Query, State},
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
    models::store::{StoreConfiguration, StorePage, ViewerRole},
    theme::StoreTheme,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MeQuery {
    /// ID da Loja
    pub store: Uuid,
}

// GET /api/me?store=
#[utoipa::path(
    get,
    path = "/api/me",
    tag = "Stores",
    params(MeQuery),
    responses(
        (status = 200, description = "Papel do usuário na loja", body = ViewerRole),
        (status = 401, description = "Token ausente ou inválido")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_me(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    Query(query): Query<MeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let role = app_state
        .store_service
        .viewer_role(query.store, &user.0)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(role)))
}

#[utoipa::path(
    get,
    path = "/api/stores/{id}/configuration",
    tag = "Stores",
    params(("id" = Uuid, Path, description = "ID da Loja")),
    responses(
        (status = 200, description = "Configuração da loja", body = StoreConfiguration),
        (status = 404, description = "Loja não encontrada")
    )
)]
pub async fn get_configuration(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(store_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let configuration = app_state
        .store_service
        .configuration(store_id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(configuration)))
}

#[utoipa::path(
    get,
    path = "/api/stores/{id}/theme",
    tag = "Stores",
    params(("id" = Uuid, Path, description = "ID da Loja")),
    responses(
        (status = 200, description = "Cores derivadas e variáveis CSS", body = StoreTheme),
        (status = 404, description = "Loja não encontrada")
    )
)]
pub async fn get_theme(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(store_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let theme = app_state
        .store_service
        .theme(store_id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(theme)))
}

// Agregado da página: loja, produtos, contagem, pedidos e tema.
#[utoipa::path(
    get,
    path = "/api/stores/{id}/page",
    tag = "Stores",
    params(("id" = Uuid, Path, description = "ID da Loja")),
    responses(
        (status = 200, description = "Dados da página da loja", body = StorePage),
        (status = 404, description = "Loja não encontrada"),
        (status = 500, description = "Não foi possível buscar os produtos")
    )
)]
pub async fn get_page(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(store_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let page = app_state
        .store_service
        .page(store_id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(page)))
}
