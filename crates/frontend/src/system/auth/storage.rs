use web_sys::window;

use crate::shared::api_utils::{AUTH_TOKEN_KEY, LANG_KEY};

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save access token to localStorage
pub fn save_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(AUTH_TOKEN_KEY, token);
    }
}

/// Get access token from localStorage
pub fn get_token() -> Option<String> {
    get_local_storage()?
        .get_item(AUTH_TOKEN_KEY)
        .ok()?
        .filter(|t| !t.trim().is_empty())
}

pub fn clear_token() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(AUTH_TOKEN_KEY);
    }
}

pub fn get_lang() -> Option<String> {
    get_local_storage()?.get_item(LANG_KEY).ok()?
}

pub fn save_lang(code: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(LANG_KEY, code);
    }
}
