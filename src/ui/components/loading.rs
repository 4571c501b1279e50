use dioxus::prelude::*;

/// Loading spinner shown while a fetch channel is in flight
#[component]
pub fn LoadingBox() -> Element {
    rsx! {
        div {
            class: "flex justify-center items-center py-12",
            div {
                class: "spinner animate-spin rounded-full h-12 w-12 border-b-2 border-blue-500"
            }
            p {
                class: "ml-4 text-gray-500",
                "Loading..."
            }
        }
    }
}
