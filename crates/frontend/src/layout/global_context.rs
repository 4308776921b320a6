//! UI-wide state: the selected interface language.
//!
//! The choice is persisted in localStorage and restored on start; English is
//! used when nothing was stored yet.

use contracts::domain::common::{Lang, Tr};
use leptos::prelude::*;

use crate::system::auth::storage;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub lang: RwSignal<Lang>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let lang = storage::get_lang()
            .map(|code| Lang::from_code(&code))
            .unwrap_or_default();
        Self {
            lang: RwSignal::new(lang),
        }
    }

    /// Set the language and persist to storage.
    pub fn set_lang(&self, lang: Lang) {
        storage::save_lang(lang.code());
        self.lang.set(lang);
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("lang", lang.code());
        }
    }

    /// Reactive lookup of a UI string in the current language.
    pub fn t(&self, text: Tr) -> &'static str {
        text.get(self.lang.get())
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the global UI context
pub fn use_global() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
