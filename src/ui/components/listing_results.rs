use crate::listing::ListingScope;
use crate::ui::components::loading::LoadingBox;
use crate::ui::components::message::{MessageBox, MessageVariant};
use crate::ui::components::pagination::Pagination;
use crate::ui::components::product_card::ProductCard;
use crate::ui::listing_context::ListingContext;
use dioxus::prelude::*;

/// Result section for a listing screen: the products channel's tri-state,
/// the result grid, and the pagination row. Renders independently of the
/// category facet and seller channels.
#[component]
pub fn ListingResults(name: String, scope: ListingScope) -> Element {
    let ctx = use_context::<ListingContext>();
    let products = ctx.products;
    let page = ctx.page;
    let pages = ctx.pages;
    let is_loading = ctx.is_loading_products;
    let error = ctx.products_error;

    rsx! {
        if is_loading() {
            LoadingBox {}
        } else if let Some(err) = error() {
            MessageBox { variant: MessageVariant::Danger, message: err }
        } else {
            h2 { class: "text-2xl font-bold mb-4", "{products().len()} Results" }
            if products().is_empty() {
                MessageBox { message: "No Product Found" }
            }
            div { class: "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6",
                for product in products() {
                    ProductCard { product }
                }
            }
            Pagination {
                current_page: page(),
                total_pages: pages(),
                name,
                scope,
            }
        }
    }
}
