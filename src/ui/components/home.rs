use crate::ui::Route;
use dioxus::prelude::*;

/// Home page
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "container mx-auto p-6",
            div {
                class: "text-center py-12",
                h1 {
                    class: "text-4xl font-bold mb-4",
                    "Welcome to bazaar"
                }
                p {
                    class: "text-xl text-gray-600 mb-8",
                    "Browse the catalog or search for products"
                }
                Link {
                    to: Route::SearchLanding {},
                    class: "bg-blue-500 text-white px-6 py-3 rounded-lg hover:bg-blue-600 transition-colors",
                    "Browse Products"
                }
            }
        }
    }
}
