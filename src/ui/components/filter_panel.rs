use crate::listing::{SortOrder, PRICE_BANDS, RATING_TIERS};
use crate::ui::components::loading::LoadingBox;
use crate::ui::components::message::{MessageBox, MessageVariant};
use crate::ui::listing_context::ListingContext;
use dioxus::prelude::*;

/// Filter controls for a listing screen: category (fed by the facet
/// channel), price band, minimum rating, and sort order. Visibility is an
/// explicit flag on the context rather than a toggle on rendered output.
#[component]
pub fn FilterPanel() -> Element {
    let ctx = use_context::<ListingContext>();
    let filters = ctx.filters;
    let filters_visible = ctx.filters_visible;
    let categories = ctx.categories;
    let is_loading_categories = ctx.is_loading_categories;
    let categories_error = ctx.categories_error;

    rsx! {
        button {
            class: "filter-button px-4 py-2 bg-gray-200 rounded-lg hover:bg-gray-300 font-medium mb-4",
            onclick: {
                let mut ctx = ctx.clone();
                move |_| ctx.toggle_filters()
            },
            "Filter"
        }
        if filters_visible() {
            div { class: "filter-options grid grid-cols-1 md:grid-cols-4 gap-4 mb-6",
                // The category facet has its own tri-state; a failure here
                // never hides the other controls or the results.
                if is_loading_categories() {
                    LoadingBox {}
                } else if let Some(err) = categories_error() {
                    MessageBox { variant: MessageVariant::Danger, message: err }
                } else {
                    div {
                        label { r#for: "category", "Category" }
                        select {
                            id: "category",
                            class: "w-full p-2 border border-gray-300 rounded-lg",
                            // The select is re-created whenever the facet
                            // channel reloads; bind it to the state it
                            // drives so it cannot desync from the active
                            // filter.
                            value: "{filters.read().category}",
                            onchange: {
                                let mut ctx = ctx.clone();
                                move |event: FormEvent| ctx.set_category(event.value())
                            },
                            option { value: "Any", "Any" }
                            for category in categories() {
                                option { value: "{category}", "{category}" }
                            }
                        }
                    }
                }
                div {
                    label { r#for: "priceRange", "Price Range" }
                    select {
                        id: "priceRange",
                        class: "w-full p-2 border border-gray-300 rounded-lg",
                        value: "{filters.read().price_band_label()}",
                        onchange: {
                            let mut ctx = ctx.clone();
                            move |event: FormEvent| ctx.set_price_band(&event.value())
                        },
                        for band in PRICE_BANDS {
                            option { value: "{band.label}", "{band.label}" }
                        }
                    }
                }
                div {
                    label { r#for: "averageCustomerRating", "Average Customer Rating" }
                    select {
                        id: "averageCustomerRating",
                        class: "w-full p-2 border border-gray-300 rounded-lg",
                        value: "{filters.read().min_rating}",
                        onchange: {
                            let mut ctx = ctx.clone();
                            move |event: FormEvent| {
                                ctx.set_rating(event.value().parse().unwrap_or(0))
                            }
                        },
                        for tier in RATING_TIERS {
                            option { value: "{tier.rating}", "{tier.label}" }
                        }
                    }
                }
                div {
                    label { r#for: "sortBy", "Sort By" }
                    select {
                        id: "sortBy",
                        class: "w-full p-2 border border-gray-300 rounded-lg",
                        value: "{filters.read().sort_order.as_str()}",
                        onchange: {
                            let mut ctx = ctx.clone();
                            move |event: FormEvent| {
                                ctx.set_sort_order(SortOrder::parse(&event.value()))
                            }
                        },
                        option { value: "newest", "Newest Arrivals" }
                        option { value: "lowest", "Price: Low to High" }
                        option { value: "highest", "Price: High to Low" }
                        option { value: "toprated", "High Customer Rating" }
                    }
                }
            }
        }
    }
}
