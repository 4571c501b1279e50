use crate::ui::components::search_box::SearchBox;
use crate::ui::Route;
use dioxus::prelude::*;

/// Layout component with the brand link and the global product search box
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-gray-800 text-white p-4 flex items-center gap-6",
            Link {
                to: Route::Home {},
                class: "text-xl font-bold hover:text-blue-300 transition-colors",
                "bazaar"
            }
            div { class: "flex-1 max-w-xl",
                SearchBox {}
            }
        }

        Outlet::<Route> {}
    }
}
