use crate::listing::{ListingQuery, ListingScope, ANY};
use crate::ui::app_context::AppContext;
use crate::ui::components::filter_panel::FilterPanel;
use crate::ui::components::listing_results::ListingResults;
use crate::ui::components::loading::LoadingBox;
use crate::ui::components::message::{MessageBox, MessageVariant};
use crate::ui::components::rating::Rating;
use crate::ui::components::search_box::SearchBox;
use crate::ui::listing_context::ListingContext;
use dioxus::prelude::*;
use tracing::debug;

/// Seller storefront screen: the seller's profile card beside a listing
/// scoped to that seller's catalog.
///
/// Three independent fetch channels: seller profile (re-dispatched only on
/// seller id change), products, and the category facet. A failure in any
/// one never suppresses the others.
#[component]
pub fn SellerScreen(
    seller_id: ReadSignal<String>,
    name: ReadSignal<String>,
    page_number: ReadSignal<u32>,
) -> Element {
    debug!("Component rendering");
    let app_ctx = use_context::<AppContext>();
    let ctx = use_context_provider(|| ListingContext::new(app_ctx.catalog.clone()));

    {
        let ctx = ctx.clone();
        use_effect(move || {
            ctx.fetch_seller(seller_id());
        });
    }

    {
        let ctx = ctx.clone();
        use_effect(move || {
            let filters = ctx.filters.read().clone();
            let scope = ListingScope::Seller(seller_id());
            let query = ListingQuery::derive(&filters, &name(), page_number(), &scope);
            ctx.fetch_listing(query);
            ctx.fetch_categories();
        });
    }

    rsx! {
        div { class: "container mx-auto p-6 flex flex-col md:flex-row gap-6 items-start",
            div { class: "md:w-1/4 w-full",
                SellerProfileCard {}
            }
            div { class: "md:w-3/4 w-full",
                div { class: "mb-4",
                    SearchBox {
                        seller_id: Some(seller_id()),
                        placeholder: Some("search seller products...".to_string()),
                    }
                }
                FilterPanel {}
                ListingResults {
                    name: name(),
                    scope: ListingScope::Seller(seller_id()),
                }
            }
        }
    }
}

/// Seller profile card fed by the context's seller channel
#[component]
fn SellerProfileCard() -> Element {
    let ctx = use_context::<ListingContext>();
    let seller = ctx.seller;
    let is_loading = ctx.is_loading_seller;
    let error = ctx.seller_error;

    rsx! {
        if is_loading() {
            LoadingBox {}
        } else if let Some(err) = error() {
            MessageBox { variant: MessageVariant::Danger, message: err }
        } else if let Some(profile) = seller() {
            ul { class: "card card-body bg-white rounded-lg shadow p-4 space-y-3",
                li {
                    div { class: "flex items-center gap-3",
                        img {
                            class: "small w-12 h-12 rounded-full object-cover",
                            src: "{profile.seller.logo}",
                            alt: "{profile.seller.name}",
                        }
                        h1 { class: "text-xl font-bold", "{profile.seller.name}" }
                    }
                }
                li {
                    Rating {
                        rating: profile.seller.rating,
                        num_reviews: profile.seller.num_reviews,
                    }
                }
                li { class: "text-gray-600", "{profile.seller.description}" }
            }
        }
    }
}

/// `/seller/:seller_id` with the default route parameters (name "Any",
/// page 1)
#[component]
pub fn SellerLanding(seller_id: String) -> Element {
    rsx! {
        SellerScreen {
            seller_id,
            name: ANY.to_string(),
            page_number: 1u32,
        }
    }
}
