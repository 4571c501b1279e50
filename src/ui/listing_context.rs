use crate::catalog::{CatalogClient, Product, SellerProfile};
use crate::listing::{FilterState, ListingQuery, RequestSequencer, SortOrder};
use dioxus::prelude::*;
use tracing::{debug, info, warn};

/// Screen-scoped listing state: the filter selections, the filter-panel
/// visibility flag, and one independent loading/error/data channel per
/// fetch (products, categories, seller profile).
///
/// Each screen instance owns its own copy, created at mount and dropped at
/// unmount. Filter mutations are synchronous; dispatch happens in the
/// screen effect that watches the filter signal, so every change triggers a
/// fresh invocation cycle.
#[derive(Clone)]
pub struct ListingContext {
    pub filters: Signal<FilterState>,
    pub filters_visible: Signal<bool>,

    // Product listing channel
    pub products: Signal<Vec<Product>>,
    pub page: Signal<u32>,
    pub pages: Signal<u32>,
    pub is_loading_products: Signal<bool>,
    pub products_error: Signal<Option<String>>,

    // Category facet channel
    pub categories: Signal<Vec<String>>,
    pub is_loading_categories: Signal<bool>,
    pub categories_error: Signal<Option<String>>,

    // Seller profile channel (seller screen only)
    pub seller: Signal<Option<SellerProfile>>,
    pub is_loading_seller: Signal<bool>,
    pub seller_error: Signal<Option<String>>,

    // One sequencer per channel: a screen instance survives in-place route
    // param changes, so every channel can see overlapping dispatches.
    listing_requests: Signal<RequestSequencer>,
    category_requests: Signal<RequestSequencer>,
    seller_requests: Signal<RequestSequencer>,
    catalog: CatalogClient,
}

impl ListingContext {
    pub fn new(catalog: CatalogClient) -> Self {
        Self {
            filters: Signal::new(FilterState::default()),
            filters_visible: Signal::new(false),
            products: Signal::new(Vec::new()),
            page: Signal::new(1),
            pages: Signal::new(0),
            is_loading_products: Signal::new(true),
            products_error: Signal::new(None),
            categories: Signal::new(Vec::new()),
            is_loading_categories: Signal::new(true),
            categories_error: Signal::new(None),
            seller: Signal::new(None),
            is_loading_seller: Signal::new(true),
            seller_error: Signal::new(None),
            listing_requests: Signal::new(RequestSequencer::default()),
            category_requests: Signal::new(RequestSequencer::default()),
            seller_requests: Signal::new(RequestSequencer::default()),
            catalog,
        }
    }

    // Filter setters. Mutation is synchronous; no validation beyond the
    // price-band table lookup (out-of-range values pass through as-is).

    pub fn set_category(&mut self, category: String) {
        self.filters.write().category = category;
    }

    pub fn set_price_band(&mut self, label: &str) {
        self.filters.write().apply_price_band(label);
    }

    pub fn set_rating(&mut self, rating: u8) {
        self.filters.write().min_rating = rating;
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.filters.write().sort_order = order;
    }

    pub fn toggle_filters(&mut self) {
        let visible = *self.filters_visible.peek();
        self.filters_visible.set(!visible);
    }

    /// Fetch one page of products matching `query`.
    ///
    /// Each dispatch is tagged; a completion whose tag has been superseded
    /// is dropped without touching the channel, so a slow response for an
    /// older filter state can never overwrite a newer one. Loading stays on
    /// in that case because the newer request still owns the channel.
    pub fn fetch_listing(&self, query: ListingQuery) {
        let mut products = self.products;
        let mut page = self.page;
        let mut pages = self.pages;
        let mut is_loading = self.is_loading_products;
        let mut error = self.products_error;
        let mut requests = self.listing_requests;
        let catalog = self.catalog.clone();

        let tag = requests.write().issue();
        is_loading.set(true);
        error.set(None);

        spawn(async move {
            info!("Dispatching listing fetch #{}", tag);
            let result = catalog.list_products(&query).await;

            if !requests.peek().is_current(tag) {
                debug!("Discarding stale listing response #{}", tag);
                return;
            }

            match result {
                Ok(listing) => {
                    products.set(listing.products);
                    page.set(listing.page);
                    pages.set(listing.pages);
                }
                Err(e) => {
                    warn!("Listing fetch failed: {}", e);
                    error.set(Some(format!("Failed to load products: {}", e)));
                }
            }
            is_loading.set(false);
        });
    }

    /// Fetch the category facet list. Runs in parallel with the listing
    /// fetch; neither blocks the other and each fails independently.
    /// Tagged like the listing fetch so an older cycle's error or data
    /// cannot land on top of a newer cycle's.
    pub fn fetch_categories(&self) {
        let mut categories = self.categories;
        let mut is_loading = self.is_loading_categories;
        let mut error = self.categories_error;
        let mut requests = self.category_requests;
        let catalog = self.catalog.clone();

        let tag = requests.write().issue();
        is_loading.set(true);
        error.set(None);

        spawn(async move {
            let result = catalog.list_categories().await;

            if !requests.peek().is_current(tag) {
                debug!("Discarding stale category response #{}", tag);
                return;
            }

            match result {
                Ok(list) => {
                    categories.set(list);
                }
                Err(e) => {
                    warn!("Category fetch failed: {}", e);
                    error.set(Some(format!("Failed to load categories: {}", e)));
                }
            }
            is_loading.set(false);
        });
    }

    /// Fetch the seller profile. Only re-dispatched when the seller id
    /// changes; filter and page changes leave the profile alone.
    ///
    /// Navigating from one storefront to another updates the mounted
    /// screen's props in place, so the previous seller's fetch may still
    /// be in flight. Completions are tagged and a superseded profile is
    /// dropped instead of overwriting the newer one.
    pub fn fetch_seller(&self, seller_id: String) {
        let mut seller = self.seller;
        let mut is_loading = self.is_loading_seller;
        let mut error = self.seller_error;
        let mut requests = self.seller_requests;
        let catalog = self.catalog.clone();

        let tag = requests.write().issue();
        is_loading.set(true);
        error.set(None);

        spawn(async move {
            let result = catalog.get_seller(&seller_id).await;

            if !requests.peek().is_current(tag) {
                debug!("Discarding stale seller response #{}", tag);
                return;
            }

            match result {
                Ok(profile) => {
                    seller.set(Some(profile));
                }
                Err(e) => {
                    warn!("Seller fetch failed: {}", e);
                    error.set(Some(format!("Failed to load seller: {}", e)));
                }
            }
            is_loading.set(false);
        });
    }
}
