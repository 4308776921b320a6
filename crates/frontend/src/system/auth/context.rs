use contracts::shared::urls::routes;
use contracts::system::auth::SessionProvider;
use leptos::prelude::*;

use super::storage;

/// Signed-in state shared with every screen through context.
///
/// Local storage stays the source of truth for the token; the signals only
/// let the UI react to sign-in/sign-out and to pending redirects.
#[derive(Clone, Copy, Debug)]
pub struct Session {
    token: RwSignal<Option<String>>,
    redirect: RwSignal<Option<String>>,
}

impl Session {
    /// Restore the session from localStorage.
    pub fn restore() -> Self {
        Self {
            token: RwSignal::new(storage::get_token()),
            redirect: RwSignal::new(None),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.with(|t| t.is_some())
    }

    pub fn sign_in(&self, token: String) {
        storage::save_token(&token);
        self.token.set(Some(token));
    }

    pub fn sign_out(&self) {
        log::info!("signing out");
        storage::clear_token();
        self.token.set(None);
        self.redirect_to(routes::LOGIN);
    }

    /// Ask the router to navigate; consumed by `AuthRedirect`.
    pub fn redirect_to(&self, path: &str) {
        self.redirect.set(Some(path.to_string()));
    }

    pub fn pending_redirect(&self) -> Option<String> {
        self.redirect.get()
    }

    pub fn clear_redirect(&self) {
        self.redirect.set(None);
    }
}

impl SessionProvider for Session {
    fn token(&self) -> Option<String> {
        storage::get_token()
    }

    fn on_unauthorized(&self) {
        log::warn!("session rejected, redirecting to login");
        storage::clear_token();
        self.token.set(None);
        self.redirect_to(routes::LOGIN);
    }
}

/// Hook to access the session
pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not found in component tree")
}
