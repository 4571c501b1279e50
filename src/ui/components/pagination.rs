use crate::listing::{build_page_links, ListingScope};
use crate::ui::Route;
use dioxus::prelude::*;

/// Pagination row. One link per page, parameterized by the active name and
/// scope so targets keep the exact bookmarkable path shape.
#[component]
pub fn Pagination(
    current_page: u32,
    total_pages: u32,
    name: String,
    scope: ListingScope,
) -> Element {
    let links = build_page_links(current_page, total_pages, |page_number| match &scope {
        ListingScope::Global => Route::SearchScreen {
            name: name.clone(),
            page_number,
        },
        ListingScope::Seller(seller_id) => Route::SellerScreen {
            seller_id: seller_id.clone(),
            name: name.clone(),
            page_number,
        },
    });

    rsx! {
        div { class: "pagination flex flex-wrap justify-center gap-2 mt-6",
            for link in links {
                Link {
                    class: if link.is_active { "pagination-link active" } else { "pagination-link" },
                    to: link.target.clone(),
                    "{link.label}"
                }
            }
        }
    }
}
