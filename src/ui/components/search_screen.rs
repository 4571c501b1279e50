use crate::listing::{ListingQuery, ListingScope, ANY};
use crate::ui::app_context::AppContext;
use crate::ui::components::filter_panel::FilterPanel;
use crate::ui::components::listing_results::ListingResults;
use crate::ui::listing_context::ListingContext;
use dioxus::prelude::*;
use tracing::debug;

/// Global product search screen.
///
/// Owns one ListingContext for its lifetime. An effect watches the route
/// params and the filter signal and re-dispatches the invocation cycle
/// (listing fetch + category facet fetch) on every change.
#[component]
pub fn SearchScreen(name: ReadSignal<String>, page_number: ReadSignal<u32>) -> Element {
    debug!("Component rendering");
    let app_ctx = use_context::<AppContext>();
    let ctx = use_context_provider(|| ListingContext::new(app_ctx.catalog.clone()));

    {
        let ctx = ctx.clone();
        use_effect(move || {
            let filters = ctx.filters.read().clone();
            let query =
                ListingQuery::derive(&filters, &name(), page_number(), &ListingScope::Global);
            ctx.fetch_listing(query);
            ctx.fetch_categories();
        });
    }

    rsx! {
        div { class: "container mx-auto p-6",
            FilterPanel {}
            ListingResults { name: name(), scope: ListingScope::Global }
        }
    }
}

/// `/search` with the default route parameters (name "Any", page 1)
#[component]
pub fn SearchLanding() -> Element {
    rsx! {
        SearchScreen { name: ANY.to_string(), page_number: 1u32 }
    }
}
