/// Tags listing fetches so late responses from superseded requests can be
/// recognized and dropped.
///
/// Filter, page, and scope changes each issue a new request while earlier
/// ones may still be in flight. Requests are not aborted; instead every
/// completion checks its tag against the latest issued one and a stale
/// completion is discarded, so an out-of-order response can never overwrite
/// fresher state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RequestSequencer {
    issued: u64,
}

impl RequestSequencer {
    /// Tag a new request. Issuing supersedes every earlier tag.
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Whether `tag` belongs to the most recently issued request
    pub fn is_current(&self, tag: u64) -> bool {
        tag == self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_tag_is_current() {
        let mut requests = RequestSequencer::default();
        let tag = requests.issue();
        assert!(requests.is_current(tag));
    }

    #[test]
    fn test_issuing_supersedes_earlier_tags() {
        let mut requests = RequestSequencer::default();
        let first = requests.issue();
        let second = requests.issue();

        assert!(!requests.is_current(first));
        assert!(requests.is_current(second));
    }

    /// User selects "4 stars & up" while the fetch for the previous rating
    /// is still in flight. The earlier response arrives after the newer one
    /// and must not overwrite it.
    #[test]
    fn test_stale_response_does_not_overwrite_newer_state() {
        let mut requests = RequestSequencer::default();
        let mut shown: Option<&str> = None;

        let unrated_fetch = requests.issue();
        let four_star_fetch = requests.issue();

        // Newer response lands first.
        if requests.is_current(four_star_fetch) {
            shown = Some("four-star products");
        }
        // Stale response trickles in afterwards and is discarded.
        if requests.is_current(unrated_fetch) {
            shown = Some("unrated products");
        }

        assert_eq!(shown, Some("four-star products"));
    }

    /// Navigating from one storefront to another re-dispatches the seller
    /// profile fetch while the first seller's may still be in flight. The
    /// first profile arriving last must not replace the second.
    #[test]
    fn test_superseded_seller_profile_is_discarded() {
        let mut requests = RequestSequencer::default();
        let mut shown: Option<&str> = None;

        let seller_a_fetch = requests.issue();
        let seller_b_fetch = requests.issue();

        // Seller B's profile lands first.
        if requests.is_current(seller_b_fetch) {
            shown = Some("seller B");
        }
        // Seller A's slow response arrives afterwards and is discarded.
        if requests.is_current(seller_a_fetch) {
            shown = Some("seller A");
        }

        assert_eq!(shown, Some("seller B"));
    }
}
