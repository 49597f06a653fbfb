pub mod catalog_repo;
pub use catalog_repo::CatalogRepository;
pub mod product_repo;
pub use product_repo::{ProductRepository, ProductWrite};
pub mod store_repo;
pub use store_repo::StoreRepository;
