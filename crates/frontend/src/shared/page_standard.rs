//! Page category constants for screen standardization.
//!
//! Every screen declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"tours--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The entity part is the resource path, so the id copied from the DOM
//! inspector names the resource directly.

/// List of records.
pub const PAGE_CAT_LIST: &str = "list";

/// Read-only view of a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Create or edit form.
pub const PAGE_CAT_FORM: &str = "form";

/// Entry dashboard with links to every resource.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Login and other chrome outside the resource screens.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Build a page id for `entity` in `category`.
pub fn page_id(entity: &str, category: &str) -> String {
    format!("{}--{}", entity, category)
}

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert_eq!(page_id("tours", PAGE_CAT_LIST), "tours--list");
        assert!(is_valid_page_id(&page_id("career-req", PAGE_CAT_FORM)));
        assert!(!is_valid_page_id("tours"));
        assert!(!is_valid_page_id("--list"));
    }
}
