use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::shared::api_error::ApiError;

/// Login endpoint of the external auth API.
pub const LOGIN_PATH: &str = "/api/login";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "access_token", alias = "accessToken")]
    pub token: String,
}

/// Access to the bearer token, injected into every API client.
pub trait SessionProvider {
    /// Current bearer token, if the user is signed in.
    fn token(&self) -> Option<String>;

    /// Called when the API rejects the session; navigates to the login route.
    fn on_unauthorized(&self);
}

/// Wraps a session so that a rejected session redirects exactly once and no
/// further requests go out until a new token is stored.
#[derive(Debug)]
pub struct AuthGate<S> {
    session: S,
    rejected: AtomicBool,
}

impl<S: SessionProvider> AuthGate<S> {
    pub fn new(session: S) -> Self {
        Self {
            session,
            rejected: AtomicBool::new(false),
        }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// `Bearer <token>` header value for the next request.
    pub fn bearer(&self) -> Result<String, ApiError> {
        if self.is_rejected() {
            return Err(ApiError::Unauthorized);
        }
        match self.session.token().filter(|t| !t.trim().is_empty()) {
            Some(token) => Ok(format!("Bearer {}", token)),
            None => {
                self.reject();
                Err(ApiError::MissingToken)
            }
        }
    }

    /// Pass a call result through, tripping the redirect on auth failures.
    pub fn observe<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if let Err(err) = &result {
            if err.requires_login() {
                self.reject();
            }
        }
        result
    }

    pub fn is_rejected(&self) -> bool {
        self.rejected.load(Ordering::SeqCst)
    }

    /// Re-arm after a successful login.
    pub fn reset(&self) {
        self.rejected.store(false, Ordering::SeqCst);
    }

    fn reject(&self) {
        if !self.rejected.swap(true, Ordering::SeqCst) {
            self.session.on_unauthorized();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeSession {
        token: RefCell<Option<String>>,
        redirects: Cell<u32>,
    }

    impl SessionProvider for FakeSession {
        fn token(&self) -> Option<String> {
            self.token.borrow().clone()
        }

        fn on_unauthorized(&self) {
            self.redirects.set(self.redirects.get() + 1);
        }
    }

    fn signed_in() -> AuthGate<FakeSession> {
        let session = FakeSession::default();
        *session.token.borrow_mut() = Some("abc".into());
        AuthGate::new(session)
    }

    #[test]
    fn test_bearer_header() {
        let gate = signed_in();
        assert_eq!(gate.bearer().unwrap(), "Bearer abc");
        assert_eq!(gate.session().redirects.get(), 0);
    }

    #[test]
    fn test_missing_token_redirects_without_request() {
        let gate = AuthGate::new(FakeSession::default());
        assert_eq!(gate.bearer(), Err(ApiError::MissingToken));
        assert_eq!(gate.session().redirects.get(), 1);
    }

    #[test]
    fn test_401_redirects_exactly_once_and_blocks_further_calls() {
        let gate = signed_in();
        let first: Result<(), ApiError> = gate.observe(Err(ApiError::Unauthorized));
        assert_eq!(first, Err(ApiError::Unauthorized));
        let _ = gate.observe::<()>(Err(ApiError::Unauthorized));

        assert_eq!(gate.session().redirects.get(), 1);
        // the token is still in storage, but no further request may be built
        assert_eq!(gate.bearer(), Err(ApiError::Unauthorized));
        assert_eq!(gate.session().redirects.get(), 1);
    }

    #[test]
    fn test_other_errors_do_not_redirect() {
        let gate = signed_in();
        let _ = gate.observe::<()>(Err(ApiError::from_status(500, "boom")));
        assert!(!gate.is_rejected());
        assert_eq!(gate.session().redirects.get(), 0);
    }

    #[test]
    fn test_reset_after_login() {
        let gate = signed_in();
        let _ = gate.observe::<()>(Err(ApiError::Unauthorized));
        gate.reset();
        assert_eq!(gate.bearer().unwrap(), "Bearer abc");
    }

    #[test]
    fn test_login_response_aliases() {
        let a: LoginResponse = serde_json::from_str(r#"{"token":"t1"}"#).unwrap();
        let b: LoginResponse = serde_json::from_str(r#"{"access_token":"t2","user":{}}"#).unwrap();
        assert_eq!(a.token, "t1");
        assert_eq!(b.token, "t2");
    }
}
