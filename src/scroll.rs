use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

use crate::error::PageError;

/// The element id a link's `href` points at, if it is an in-page fragment.
///
/// A bare `#` (used by buttons styled as links) points nowhere.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn scroll_to_id(id: &str) -> Result<(), PageError> {
    let document = window()
        .ok_or(PageError::NoWindow)?
        .document()
        .ok_or(PageError::NoDocument)?;
    let target = document
        .get_element_by_id(id)
        .ok_or_else(|| PageError::MissingElement(format!("#{}", id)))?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    log::debug!("scrolling to #{}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_links_resolve() {
        assert_eq!(anchor_id("#section--1"), Some("section--1"));
    }

    #[test]
    fn test_bare_hash_and_urls_do_not() {
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id(""), None);
        assert_eq!(anchor_id("/pricing"), None);
        assert_eq!(anchor_id("https://example.com/#x"), None);
    }
}
