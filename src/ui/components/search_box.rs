use crate::listing::ANY;
use crate::ui::Route;
use dioxus::prelude::*;

/// Name-filter entry box. Navigates to the listing route for the typed
/// name; an empty input navigates with the "Any" sentinel (no constraint).
/// With a seller id the target stays inside that seller's storefront.
#[component]
pub fn SearchBox(seller_id: Option<String>, placeholder: Option<String>) -> Element {
    let mut query = use_signal(String::new);

    let submit = {
        let seller_id = seller_id.clone();
        move || {
            let typed = query.read().trim().to_string();
            let name = if typed.is_empty() {
                ANY.to_string()
            } else {
                typed
            };
            let route = match &seller_id {
                Some(id) => Route::SellerScreen {
                    seller_id: id.clone(),
                    name,
                    page_number: 1,
                },
                None => Route::SearchScreen {
                    name,
                    page_number: 1,
                },
            };
            navigator().push(route);
        }
    };

    rsx! {
        div { class: "search-box flex gap-2",
            input {
                class: "flex-1 p-2 border border-gray-300 rounded-lg",
                placeholder: placeholder.clone().unwrap_or_else(|| "search products...".to_string()),
                value: "{query.read()}",
                oninput: move |event: FormEvent| {
                    query.set(event.value());
                },
                onkeydown: {
                    let submit = submit.clone();
                    move |event: KeyboardEvent| {
                        if event.key() == Key::Enter {
                            submit();
                        }
                    }
                },
            }
            button {
                class: "px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 font-medium",
                onclick: {
                    let submit = submit.clone();
                    move |_| submit()
                },
                "Search"
            }
        }
    }
}
