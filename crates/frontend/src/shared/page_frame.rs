//! PageFrame: root wrapper for a console page.
//!
//! Sets two metadata attributes on the root DOM element:
//!   - `id`: `"{entity}--{category}"`, e.g. `"a001_application--parameters"`
//!   - `data-page-category`: one of the PAGE_CAT_* constants
//!
//! The entity part of the id matches the `domain/` directory of the page.

use leptos::prelude::*;

/// Editing page for a single object
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Placeholder shown when nothing is selected
pub const PAGE_CAT_EMPTY: &str = "empty";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, category)) if !entity.is_empty() && !category.is_empty())
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("PageFrame: page id {:?} is not in entity--category form", page_id);
    }
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_application--parameters"));
        assert!(is_valid_page_id("a--b--c"));
        assert!(!is_valid_page_id("a001_application"));
        assert!(!is_valid_page_id("--detail"));
        assert!(!is_valid_page_id("a001_application--"));
    }
}
