/// One navigable page link
#[derive(Debug, Clone, PartialEq)]
pub struct PageLink<T> {
    pub label: u32,
    pub target: T,
    pub is_active: bool,
}

/// Build the full run of page links, 1 through `total_pages`.
///
/// Every page gets a link; there is no ellipsis or truncation for large
/// counts (known scaling limitation, preserved as-is). `is_active` is true
/// exactly for the entry matching `current_page`. A zero page count yields
/// an empty run.
pub fn build_page_links<T>(
    current_page: u32,
    total_pages: u32,
    mut target: impl FnMut(u32) -> T,
) -> Vec<PageLink<T>> {
    (1..=total_pages)
        .map(|label| PageLink {
            label,
            target: target(label),
            is_active: label == current_page,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_cover_every_page_with_one_active() {
        let links = build_page_links(2, 5, |n| n);

        assert_eq!(links.len(), 5);
        let labels: Vec<u32> = links.iter().map(|l| l.label).collect();
        assert_eq!(labels, [1, 2, 3, 4, 5]);

        let active: Vec<u32> = links.iter().filter(|l| l.is_active).map(|l| l.label).collect();
        assert_eq!(active, [2]);
    }

    #[test]
    fn test_zero_pages_yields_no_links() {
        let links = build_page_links(1, 0, |n| n);
        assert!(links.is_empty());
    }

    #[test]
    fn test_targets_carry_the_name_context() {
        let links = build_page_links(1, 3, |n| format!("/search/name/phone/pageNumber/{}", n));

        assert_eq!(links[2].target, "/search/name/phone/pageNumber/3");
    }
}
