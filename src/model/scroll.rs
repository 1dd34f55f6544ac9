pub const SAME_PAGE_LINK_SELECTOR: &str = "a[href^=\"#\"]";
pub const BACK_TO_TOP_ID: &str = "back-to-top";

/// Id referenced by a same-page link, or `None` for a bare `#`.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#')
        .map(str::trim)
        .filter(|id| !id.is_empty())
}

/// Back-to-top visibility: strictly past the threshold.
pub fn back_to_top_visible(scroll_offset: f64, threshold: f64) -> bool {
    scroll_offset > threshold
}
