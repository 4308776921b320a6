//! API paths, media URLs and client-side routes.

use crate::domain::common::ResourceKind;

/// `/api/{resource}` or `/api/{resource}/{id}`.
pub fn api_path(kind: ResourceKind, id: Option<i64>) -> String {
    match id {
        Some(id) => format!("/api/{}/{}", kind.path(), id),
        None => format!("/api/{}", kind.path()),
    }
}

/// Join a base URL and a path with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if base.is_empty() {
        format!("/{}", path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Resolve a stored image/document reference for display.
///
/// Absolute and data URLs are used as they are; anything else is served by
/// the API host.
pub fn media_url(base: &str, reference: &str) -> String {
    let reference = reference.trim();
    if reference.starts_with("http://")
        || reference.starts_with("https://")
        || reference.starts_with("//")
        || reference.starts_with("data:")
        || reference.starts_with("blob:")
    {
        reference.to_string()
    } else {
        join_url(base, reference)
    }
}

/// Client-side routes.
pub mod routes {
    use super::ResourceKind;

    pub const LOGIN: &str = "/";
    pub const DASHBOARD: &str = "/admin";

    pub fn list(kind: ResourceKind) -> String {
        format!("{}/{}", DASHBOARD, kind.path())
    }

    pub fn add(kind: ResourceKind) -> String {
        format!("{}/{}/add", DASHBOARD, kind.path())
    }

    pub fn view(kind: ResourceKind, id: i64) -> String {
        format!("{}/{}/view/{}", DASHBOARD, kind.path(), id)
    }

    pub fn edit(kind: ResourceKind, id: i64) -> String {
        format!("{}/{}/edit/{}", DASHBOARD, kind.path(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_path() {
        assert_eq!(api_path(ResourceKind::Tours, None), "/api/tours");
        assert_eq!(
            api_path(ResourceKind::ContactMails, Some(9)),
            "/api/contact-mails/9"
        );
    }

    #[test]
    fn test_join_url_slashes() {
        assert_eq!(join_url("https://api.example.tm/", "/api/faq"), "https://api.example.tm/api/faq");
        assert_eq!(join_url("https://api.example.tm", "uploads/a.jpg"), "https://api.example.tm/uploads/a.jpg");
        assert_eq!(join_url("", "api/faq"), "/api/faq");
    }

    #[test]
    fn test_media_url() {
        assert_eq!(
            media_url("http://localhost:8080", "uploads/x.png"),
            "http://localhost:8080/uploads/x.png"
        );
        assert_eq!(
            media_url("http://localhost:8080", "https://cdn.example.com/x.png"),
            "https://cdn.example.com/x.png"
        );
    }

    #[test]
    fn test_routes() {
        assert_eq!(routes::list(ResourceKind::Itinerary), "/admin/itinerary");
        assert_eq!(routes::add(ResourceKind::Faq), "/admin/faq/add");
        assert_eq!(routes::view(ResourceKind::Blogs, 3), "/admin/blogs/view/3");
        assert_eq!(routes::edit(ResourceKind::Blogs, 3), "/admin/blogs/edit/3");
    }
}
