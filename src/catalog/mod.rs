pub mod client;
pub mod models;

pub use client::{CatalogClient, CatalogError};
pub use models::{Product, ProductPage, SellerInfo, SellerProfile};
