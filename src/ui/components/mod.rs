pub mod filter_panel;
pub mod home;
pub mod listing_results;
pub mod loading;
pub mod message;
pub mod navbar;
pub mod pagination;
pub mod product_card;
pub mod rating;
pub mod search_box;
pub mod search_screen;
pub mod seller_screen;

pub use filter_panel::FilterPanel;
pub use home::Home;
pub use listing_results::ListingResults;
pub use loading::LoadingBox;
pub use message::{MessageBox, MessageVariant};
pub use navbar::Navbar;
pub use pagination::Pagination;
pub use product_card::ProductCard;
pub use rating::Rating;
pub use search_box::SearchBox;
pub use search_screen::{SearchLanding, SearchScreen};
pub use seller_screen::{SellerLanding, SellerScreen};
