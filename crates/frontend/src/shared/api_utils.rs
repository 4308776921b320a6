//! Runtime configuration for frontend-backend communication
//!
//! The API origin comes from the `ADMIN_API_BASE` environment variable at
//! build time; without it the console talks to the origin it was served from.

use contracts::shared::urls::{join_url, media_url};

/// Local storage key holding the bearer token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Local storage key holding the selected UI language.
pub const LANG_KEY: &str = "admin_lang";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// API origin without trailing slash, e.g. "https://api.example.tm"
    pub api_base: String,
}

impl AppConfig {
    /// Resolve the configuration once at start-up.
    pub fn resolve() -> Self {
        let api_base = option_env!("ADMIN_API_BASE")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(page_origin);
        Self { api_base }
    }

    /// Build a full API URL from a path
    ///
    /// # Example
    /// ```rust,ignore
    /// let url = config.api_url("/api/tours/12");
    /// ```
    pub fn api_url(&self, path: &str) -> String {
        join_url(&self.api_base, path)
    }

    /// URL for displaying an uploaded image or document.
    pub fn media_url(&self, reference: &str) -> String {
        media_url(&self.api_base, reference)
    }
}

/// Origin of the current page, e.g. "http://localhost:8080".
/// Empty string if window is not available.
fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}
