use crate::catalog::Product;
use crate::ui::components::rating::Rating;
use dioxus::prelude::*;

/// One product tile in the results grid
#[component]
pub fn ProductCard(product: Product) -> Element {
    rsx! {
        div { class: "card bg-white rounded-lg shadow overflow-hidden",
            img {
                class: "w-full h-48 object-cover",
                src: "{product.image}",
                alt: "{product.name}",
            }
            div { class: "card-body p-4",
                h3 { class: "font-semibold mb-1", "{product.name}" }
                Rating { rating: product.rating, num_reviews: product.num_reviews }
                div { class: "price text-lg font-bold mt-2", "₹{product.price}" }
            }
        }
    }
}
