use dioxus::prelude::*;

/// Star rating with review count
#[component]
pub fn Rating(rating: f64, num_reviews: u32) -> Element {
    let full = rating.round().clamp(0.0, 5.0) as usize;
    let stars = format!("{}{}", "★".repeat(full), "☆".repeat(5 - full));

    rsx! {
        div { class: "rating text-sm",
            span { class: "text-yellow-500", "{stars}" }
            span { class: "ml-2 text-gray-500", "({num_reviews} reviews)" }
        }
    }
}
