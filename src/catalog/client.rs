use crate::catalog::models::{ProductPage, SellerProfile};
use crate::listing::ListingQuery;
use reqwest::{Client, Error as ReqwestError, StatusCode};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Not found")]
    NotFound,
    #[error("API error: {0}")]
    Api(StatusCode),
}

/// HTTP client for the catalog backend (products, categories, sellers)
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetch one page of products matching the derived query
    pub async fn list_products(&self, query: &ListingQuery) -> Result<ProductPage, CatalogError> {
        let url = format!("{}/api/products", self.base_url);
        let params = query.to_query_pairs();

        info!("📡 Catalog API: GET {} with {:?}", url, params);

        let response = self.client.get(&url).query(&params).send().await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            let page: ProductPage = response.json().await?;
            info!(
                "✓ Listing returned {} product(s), page {}/{}",
                page.products.len(),
                page.page,
                page.pages
            );
            Ok(page)
        } else if status == StatusCode::NOT_FOUND {
            warn!("✗ Catalog listing not found");
            Err(CatalogError::NotFound)
        } else {
            warn!("✗ Catalog API error: {}", status);
            Err(CatalogError::Api(status))
        }
    }

    /// Fetch the full category facet list. Always unscoped: the filter
    /// choices offered are the whole category universe, independent of the
    /// current selection or seller.
    pub async fn list_categories(&self) -> Result<Vec<String>, CatalogError> {
        let url = format!("{}/api/products/categories", self.base_url);

        info!("📡 Catalog API: GET {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status.is_success() {
            let categories: Vec<String> = response.json().await?;
            info!("✓ Category list returned {} entr(ies)", categories.len());
            Ok(categories)
        } else if status == StatusCode::NOT_FOUND {
            Err(CatalogError::NotFound)
        } else {
            warn!("✗ Catalog API error: {}", status);
            Err(CatalogError::Api(status))
        }
    }

    /// Fetch a seller's profile by user id
    pub async fn get_seller(&self, seller_id: &str) -> Result<SellerProfile, CatalogError> {
        let url = format!("{}/api/users/{}", self.base_url, seller_id);

        info!("📡 Catalog API: GET {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status.is_success() {
            let profile: SellerProfile = response.json().await?;
            info!("✓ Seller profile loaded: {}", profile.seller.name);
            Ok(profile)
        } else if status == StatusCode::NOT_FOUND {
            warn!("✗ Seller not found: {}", seller_id);
            Err(CatalogError::NotFound)
        } else {
            warn!("✗ Catalog API error: {}", status);
            Err(CatalogError::Api(status))
        }
    }
}
