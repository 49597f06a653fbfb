// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;
use crate::theme;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Products ---
        handlers::products::list_store_products,
        handlers::products::get_product,
        handlers::products::create_product,
        handlers::products::update_product,

        // --- Catalog ---
        handlers::catalog::list_categories,
        handlers::catalog::create_category,
        handlers::catalog::list_tags,
        handlers::catalog::create_tag,
        handlers::catalog::update_tag,

        // --- Stores ---
        handlers::stores::get_me,
        handlers::stores::get_configuration,
        handlers::stores::get_theme,
        handlers::stores::get_page,
    ),
    components(
        schemas(
            // --- Products ---
            models::product::ListedProduct,
            models::product::Product,
            models::product::TagRef,
            models::product::ProductDetail,
            models::product::ProductPayload,

            // --- Catalog ---
            models::catalog::Category,
            models::catalog::Tag,
            models::catalog::CreateCategoryPayload,
            models::catalog::CreateTagPayload,
            models::catalog::UpdateTagPayload,

            // --- Stores ---
            models::store::Store,
            models::store::ViewerRole,
            models::store::StoreConfiguration,
            models::store::StoreSummary,
            models::store::StorePage,

            // --- Theme ---
            theme::Rgb,
            theme::ThemeVariant,
            theme::StoreTheme,
        )
    ),
    tags(
        (name = "Products", description = "Vitrine e cadastro de produtos"),
        (name = "Catalog", description = "Categorias e tags da loja"),
        (name = "Stores", description = "Página, configuração e tema da loja")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme("api_jwt", SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route_and_the_bearer_scheme() {
        let doc = ApiDoc::openapi();

        for path in ["/api/product", "/api/product/category", "/api/tag", "/api/me", "/api/stores/{id}/page"] {
            assert!(doc.paths.paths.contains_key(path), "faltando {path}");
        }
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("api_jwt"));
    }
}
