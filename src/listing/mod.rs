pub mod filter;
pub mod paging;
pub mod query;
pub mod requests;

pub use filter::{FilterState, PriceBand, RatingTier, SortOrder, PRICE_BANDS, RATING_TIERS};
pub use paging::{build_page_links, PageLink};
pub use query::{ListingQuery, ListingScope, ANY};
pub use requests::RequestSequencer;
