use crate::listing::filter::{FilterState, SortOrder};

/// Sentinel the UI uses for "no constraint" on the name and category
/// filters. Translated to an empty string at the query boundary; sending
/// the literal string would filter for products named "Any".
pub const ANY: &str = "Any";

/// Whether a listing query runs against the whole catalog or is bound to
/// one seller's storefront
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingScope {
    Global,
    Seller(String),
}

/// Normalized query parameters for one listing fetch.
///
/// Derived deterministically from filter state plus routing context, never
/// stored on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    pub page_number: u32,
    pub name: String,
    pub category: String,
    pub min: u32,
    pub max: u32,
    pub rating: u8,
    pub order: SortOrder,
    pub seller: Option<String>,
}

impl ListingQuery {
    /// Derive the backend query from filter state and routing context
    pub fn derive(
        filter: &FilterState,
        route_name: &str,
        page_number: u32,
        scope: &ListingScope,
    ) -> Self {
        Self {
            page_number,
            name: if route_name == ANY {
                String::new()
            } else {
                route_name.to_string()
            },
            category: if filter.category == ANY {
                String::new()
            } else {
                filter.category.clone()
            },
            min: filter.min_price,
            max: filter.max_price,
            rating: filter.min_rating,
            order: filter.sort_order,
            seller: match scope {
                ListingScope::Global => None,
                ListingScope::Seller(id) => Some(id.clone()),
            },
        }
    }

    /// Key/value pairs for the HTTP query string. `seller` is omitted
    /// entirely for global-scope queries.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("pageNumber", self.page_number.to_string()),
            ("name", self.name.clone()),
            ("category", self.category.clone()),
            ("min", self.min.to_string()),
            ("max", self.max.to_string()),
            ("rating", self.rating.to_string()),
            ("order", self.order.as_str().to_string()),
        ];

        if let Some(seller) = &self.seller {
            pairs.push(("seller", seller.clone()));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_sentinels_map_to_empty_strings() {
        let filter = FilterState::default();
        let query = ListingQuery::derive(&filter, "Any", 1, &ListingScope::Global);

        assert_eq!(query.name, "");
        assert_eq!(query.category, "");
    }

    #[test]
    fn test_literal_name_and_category_pass_through() {
        let filter = FilterState {
            category: "Electronics".to_string(),
            ..FilterState::default()
        };
        let query = ListingQuery::derive(&filter, "phone", 1, &ListingScope::Global);

        assert_eq!(query.name, "phone");
        assert_eq!(query.category, "Electronics");
    }

    #[test]
    fn test_filter_bounds_and_order_carry_over() {
        let mut filter = FilterState::default();
        filter.apply_price_band("₹1 to ₹100");
        filter.min_rating = 4;
        filter.sort_order = SortOrder::TopRated;

        let query = ListingQuery::derive(&filter, "Any", 3, &ListingScope::Global);

        assert_eq!(query.page_number, 3);
        assert_eq!((query.min, query.max), (1, 100));
        assert_eq!(query.rating, 4);
        assert_eq!(query.order, SortOrder::TopRated);
    }

    #[test]
    fn test_seller_pair_present_only_for_seller_scope() {
        let filter = FilterState::default();

        let global = ListingQuery::derive(&filter, "Any", 1, &ListingScope::Global);
        assert!(!global.to_query_pairs().iter().any(|(k, _)| *k == "seller"));

        let scoped = ListingQuery::derive(
            &filter,
            "Any",
            1,
            &ListingScope::Seller("u7".to_string()),
        );
        let pairs = scoped.to_query_pairs();
        assert_eq!(
            pairs.last(),
            Some(&("seller", "u7".to_string()))
        );
    }

    #[test]
    fn test_query_pair_order_matches_backend_contract() {
        let filter = FilterState::default();
        let query = ListingQuery::derive(&filter, "shirt", 2, &ListingScope::Global);

        let keys: Vec<&str> = query.to_query_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            ["pageNumber", "name", "category", "min", "max", "rating", "order"]
        );
    }
}
