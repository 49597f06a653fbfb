// src/routes.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers, middleware::auth::auth_guard};

pub fn app(app_state: AppState) -> Router {
    let guard = || axum_middleware::from_fn_with_state(app_state.clone(), auth_guard);

    // Leituras públicas e escritas protegidas dividem o mesmo caminho.
    let product_routes = Router::new()
        .route(
            "/product",
            get(handlers::products::get_product).merge(
                post(handlers::products::create_product)
                    .put(handlers::products::update_product)
                    .route_layer(guard()),
            ),
        )
        .route(
            "/product/category",
            get(handlers::catalog::list_categories)
                .merge(post(handlers::catalog::create_category).route_layer(guard())),
        )
        .route(
            "/tag",
            get(handlers::catalog::list_tags).merge(
                post(handlers::catalog::create_tag)
                    .put(handlers::catalog::update_tag)
                    .route_layer(guard()),
            ),
        );

    let store_routes = Router::new()
        .route("/{id}/products", get(handlers::products::list_store_products))
        .route("/{id}/configuration", get(handlers::stores::get_configuration))
        .route("/{id}/theme", get(handlers::stores::get_theme))
        .route("/{id}/page", get(handlers::stores::get_page));

    let user_routes = Router::new()
        .route("/me", get(handlers::stores::get_me))
        .route_layer(guard());

    let api = Router::new()
        .route("/health", get(|| async { "OK" }))
        .merge(product_routes)
        .merge(user_routes)
        .nest("/stores", store_routes);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;
    use uuid::Uuid;

    const SECRET: &str = "segredo-de-teste";

    // Pool que nunca conecta: as rotas testadas respondem antes de tocar o banco.
    fn state() -> AppState {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://storefront@localhost/storefront")
            .unwrap();
        AppState::with_pool(pool, SECRET.to_string())
    }

    fn bearer(state: &AppState) -> String {
        let token = state.auth_service.create_token(Uuid::new_v4()).unwrap();
        format!("Bearer {token}")
    }

    fn json_request(method: &str, uri: &str) -> axum::http::request::Builder {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_check_answers_ok() {
        let response = app(state())
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn writing_a_product_requires_a_token() {
        let body = json!({ "store": Uuid::new_v4(), "name": "X", "price": 10 });
        let response = app(state())
            .oneshot(
                json_request("POST", "/api/product")
                    .header(header::ACCEPT_LANGUAGE, "pt-BR")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Token de autenticação inválido ou ausente.");
    }

    #[tokio::test]
    async fn create_without_category_is_rejected_on_the_category_field() {
        let state = state();
        let auth = bearer(&state);
        let body = json!({ "store": Uuid::new_v4(), "name": "X-Salada", "price": 18.5 });

        let response = app(state)
            .oneshot(
                json_request("POST", "/api/product")
                    .header(header::AUTHORIZATION, auth)
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "One or more fields are invalid.");
        assert_eq!(json["details"]["category"][0], "The 'category' field is required.");
    }

    #[tokio::test]
    async fn update_without_id_is_rejected_on_the_id_field() {
        let state = state();
        let auth = bearer(&state);
        let body = json!({
            "store": Uuid::new_v4(),
            "category": Uuid::new_v4(),
            "name": "X-Salada",
            "price": 18.5
        });

        let response = app(state)
            .oneshot(
                json_request("PUT", "/api/product")
                    .header(header::AUTHORIZATION, auth)
                    .header(header::ACCEPT_LANGUAGE, "pt")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["details"]["id"][0], "O campo 'id' é obrigatório para edição.");
    }

    #[tokio::test]
    async fn a_token_signed_elsewhere_is_refused() {
        let foreign = AppState::with_pool(
            PgPoolOptions::new().connect_lazy("postgres://localhost/outro").unwrap(),
            "outro-segredo".to_string(),
        );
        let auth = bearer(&foreign);

        let response = app(state())
            .oneshot(
                Request::builder()
                    .uri(format!("/api/me?store={}", Uuid::new_v4()))
                    .header(header::AUTHORIZATION, auth)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn tag_creation_is_validated_before_the_database() {
        let state = state();
        let auth = bearer(&state);
        let body = json!({ "store": Uuid::new_v4(), "name": "" });

        let response = app(state)
            .oneshot(
                json_request("POST", "/api/tag")
                    .header(header::AUTHORIZATION, auth)
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["details"]["name"][0], "The name is required.");
    }

    #[tokio::test]
    async fn serves_the_openapi_document() {
        let response = app(state())
            .oneshot(Request::builder().uri("/api-docs/openapi.json").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["paths"]["/api/product"].is_object());
    }
}
