pub mod auth;
pub mod catalog;
pub mod product;
pub mod store;
