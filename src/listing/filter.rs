use crate::listing::query::ANY;

/// Sort order for product listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Lowest,
    Highest,
    TopRated,
}

impl SortOrder {
    /// Wire name used by the catalog API and the sort select
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Lowest => "lowest",
            SortOrder::Highest => "highest",
            SortOrder::TopRated => "toprated",
        }
    }

    /// Parse a wire name. The sort select only emits known names, so an
    /// unknown value falls back to Newest rather than erroring.
    pub fn parse(value: &str) -> Self {
        match value {
            "lowest" => SortOrder::Lowest,
            "highest" => SortOrder::Highest,
            "toprated" => SortOrder::TopRated,
            _ => SortOrder::Newest,
        }
    }
}

/// A price range filter choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBand {
    pub label: &'static str,
    pub min: u32,
    pub max: u32,
}

/// A minimum-rating filter choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingTier {
    pub label: &'static str,
    pub rating: u8,
}

/// Price bands offered in the filter panel. min = max = 0 means
/// unconstrained.
pub const PRICE_BANDS: &[PriceBand] = &[
    PriceBand { label: "Any", min: 0, max: 0 },
    PriceBand { label: "₹1 to ₹100", min: 1, max: 100 },
    PriceBand { label: "₹101 to ₹1000", min: 101, max: 1000 },
    PriceBand { label: "more than ₹1000", min: 1001, max: 1_000_000 },
];

/// Minimum average-customer-rating tiers offered in the filter panel
pub const RATING_TIERS: &[RatingTier] = &[
    RatingTier { label: "Any", rating: 0 },
    RatingTier { label: "4 stars & up", rating: 4 },
    RatingTier { label: "3 stars & up", rating: 3 },
    RatingTier { label: "2 stars & up", rating: 2 },
    RatingTier { label: "1 star & up", rating: 1 },
];

/// User-adjustable filter selections for one listing screen.
///
/// Created with defaults at screen mount and discarded at unmount. Bounds
/// only ever come from PRICE_BANDS, so min_price <= max_price holds
/// whenever max_price > 0.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub category: String,
    pub min_price: u32,
    pub max_price: u32,
    pub min_rating: u8,
    pub sort_order: SortOrder,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: ANY.to_string(),
            min_price: 0,
            max_price: 0,
            min_rating: 0,
            sort_order: SortOrder::Newest,
        }
    }
}

impl FilterState {
    /// Apply a price-band selection by its label.
    ///
    /// The label must match a PRICE_BANDS entry exactly. An unrecognized
    /// label fails closed: bounds reset to the unconstrained band instead
    /// of keeping whatever was set before.
    pub fn apply_price_band(&mut self, label: &str) {
        let (min, max) = PRICE_BANDS
            .iter()
            .find(|band| band.label == label)
            .map(|band| (band.min, band.max))
            .unwrap_or((0, 0));

        self.min_price = min;
        self.max_price = max;
    }

    /// Label of the band matching the current bounds. Bounds only ever
    /// come from PRICE_BANDS, so a miss can only mean the unconstrained
    /// default; fall back to its label.
    pub fn price_band_label(&self) -> &'static str {
        PRICE_BANDS
            .iter()
            .find(|band| (band.min, band.max) == (self.min_price, self.max_price))
            .map(|band| band.label)
            .unwrap_or(PRICE_BANDS[0].label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_price_band_label_maps_to_its_bounds() {
        let mut filter = FilterState::default();
        for band in PRICE_BANDS {
            filter.apply_price_band(band.label);
            assert_eq!((filter.min_price, filter.max_price), (band.min, band.max));
        }
    }

    #[test]
    fn test_unrecognized_price_band_resets_bounds() {
        let mut filter = FilterState::default();
        filter.apply_price_band("₹101 to ₹1000");
        assert_eq!((filter.min_price, filter.max_price), (101, 1000));

        filter.apply_price_band("₹5 to ₹50");
        assert_eq!((filter.min_price, filter.max_price), (0, 0));
    }

    #[test]
    fn test_price_band_label_round_trips() {
        let mut filter = FilterState::default();
        assert_eq!(filter.price_band_label(), "Any");

        for band in PRICE_BANDS {
            filter.apply_price_band(band.label);
            assert_eq!(filter.price_band_label(), band.label);
        }
    }

    #[test]
    fn test_default_filter_is_unconstrained() {
        let filter = FilterState::default();
        assert_eq!(filter.category, "Any");
        assert_eq!((filter.min_price, filter.max_price), (0, 0));
        assert_eq!(filter.min_rating, 0);
        assert_eq!(filter.sort_order, SortOrder::Newest);
    }

    #[test]
    fn test_sort_order_wire_names_round_trip() {
        for order in [
            SortOrder::Newest,
            SortOrder::Lowest,
            SortOrder::Highest,
            SortOrder::TopRated,
        ] {
            assert_eq!(SortOrder::parse(order.as_str()), order);
        }
        assert_eq!(SortOrder::parse("cheapest"), SortOrder::Newest);
    }
}
