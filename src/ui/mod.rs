pub mod app;
pub mod app_context;
pub mod components;
pub mod listing_context;

pub use app::*;
pub use app_context::AppContext;
pub use listing_context::ListingContext;
