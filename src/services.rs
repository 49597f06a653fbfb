pub mod auth;
pub mod catalog_service;
pub mod product_service;
pub mod store_service;
