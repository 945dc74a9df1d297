//! In-page anchor links.

/// Gap left between the fixed nav bar and the section heading.
pub const ANCHOR_GAP_PX: f64 = 20.0;

/// Returns the href back if it points at a fragment on this page.
///
/// Bare `#` and anything not starting with `#` (external or relative URLs)
/// are left to the browser.
pub fn in_page_fragment(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Vertical scroll position that puts `target_offset_top` just below the nav.
pub fn scroll_target_top(target_offset_top: f64, nav_height: f64, gap: f64) -> f64 {
    target_offset_top - nav_height - gap
}
