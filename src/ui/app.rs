#[cfg(feature = "desktop")]
use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;
use tracing::debug;

use crate::config::Config;
use crate::ui::app_context::AppContext;
use crate::ui::components::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home {},
    #[route("/search")]
    SearchLanding {},
    #[route("/search/name/:name/pageNumber/:page_number")]
    SearchScreen { name: String, page_number: u32 },
    #[route("/seller/:seller_id")]
    SellerLanding { seller_id: String },
    #[route("/seller/:seller_id/name/:name/pageNumber/:page_number")]
    SellerScreen { seller_id: String, name: String, page_number: u32 },
}

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    let config = use_hook(Config::load);
    use_context_provider(|| AppContext::new(config));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[cfg(feature = "desktop")]
pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

#[cfg(feature = "desktop")]
fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("bazaar")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1200, 800))
}
