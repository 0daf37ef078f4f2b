//! Session guard.
//!
//! ```text
//! no token ───────────────▶ Unauthenticated
//! token ──▶ Pending ──verify ok──▶ Authenticated(user)
//!                  └─verify fails─▶ Unauthenticated (storage cleared)
//! ```

use std::rc::Rc;

use contracts::system::auth::{LoginRequest, SignupRequest, SignupResponse, UserInfo};

use super::api;
use super::storage::{BrowserStorage, SessionStore};
use crate::shared::api::{client, ApiClient, ApiError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    /// Stored token is being verified
    Pending,
    Authenticated(UserInfo),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SessionState::Pending)
    }

    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Owns the stored session and talks to `/auth/*`.
#[derive(Clone)]
pub struct SessionGuard {
    store: Rc<dyn SessionStore>,
    client: ApiClient,
}

impl SessionGuard {
    pub fn new(store: Rc<dyn SessionStore>, client: ApiClient) -> Self {
        Self { store, client }
    }

    /// Guard over `localStorage` and the configured backend.
    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage), client())
    }

    /// State to render before any network call.
    pub fn initial_state(&self) -> SessionState {
        if self.store.token().is_some() {
            SessionState::Pending
        } else {
            SessionState::Unauthenticated
        }
    }

    /// Verify the stored token, if any.
    pub async fn restore(&self) -> SessionState {
        let Some(token) = self.store.token() else {
            log::debug!("no stored session");
            return SessionState::Unauthenticated;
        };
        match api::verify(&self.client, &token).await {
            Ok(user) => {
                log::info!("session restored for {}", user.email);
                self.store.save_profile(&user);
                SessionState::Authenticated(user)
            }
            Err(e) => {
                log::info!("stored session rejected: {}", e);
                self.store.clear();
                SessionState::Unauthenticated
            }
        }
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<UserInfo, ApiError> {
        let response = api::login(&self.client, request).await?;
        let mut user = response.user;
        if user.email.is_empty() {
            user.email = request.email.clone();
        }
        self.store.save(&response.token, &user);
        log::info!("signed in as {}", user.email);
        Ok(user)
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, ApiError> {
        api::signup(&self.client, request).await
    }

    /// Best-effort server logout; local state is cleared regardless.
    pub async fn logout(&self) {
        if let Some(token) = self.store.token() {
            if let Err(e) = api::logout(&self.client, &token).await {
                log::warn!("logout call failed: {}", e);
            }
        }
        self.store.clear();
        log::info!("signed out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::ScriptedTransport;
    use crate::shared::api::RawResponse;
    use crate::system::auth::storage::MemoryStore;
    use futures::executor::block_on;
    use serde_json::json;

    fn guard_with(
        store: Rc<MemoryStore>,
        handler: impl Fn(&crate::shared::api::ApiRequest) -> Result<RawResponse, ApiError> + 'static,
    ) -> (SessionGuard, Rc<ScriptedTransport>) {
        let transport = Rc::new(ScriptedTransport::new(handler));
        let client = ApiClient::new("http://localhost:5000/api", transport.clone());
        (SessionGuard::new(store, client), transport)
    }

    fn user_json() -> serde_json::Value {
        json!({"id": 3, "email": "tech01@gmail.com", "full_name": "Tech-01"})
    }

    #[test]
    fn test_no_token_makes_no_calls() {
        let (guard, transport) = guard_with(Rc::new(MemoryStore::default()), |_| {
            Ok(RawResponse::new(200, "{}"))
        });
        assert_eq!(guard.initial_state(), SessionState::Unauthenticated);
        assert_eq!(block_on(guard.restore()), SessionState::Unauthenticated);
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_valid_token_authenticates() {
        let store = Rc::new(MemoryStore::with_token("abc"));
        let (guard, transport) = guard_with(store.clone(), |_| {
            Ok(RawResponse::json(200, &json!({"success": true, "user": user_json()})))
        });
        assert_eq!(guard.initial_state(), SessionState::Pending);

        let state = block_on(guard.restore());
        assert_eq!(state.user().map(|u| u.display_name()), Some("Tech-01"));
        assert_eq!(store.profile().name.as_deref(), Some("Tech-01"));

        let calls = transport.requests();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].path, "/auth/verify");
        assert!(calls[0]
            .headers
            .contains(&("Authorization".to_string(), "Bearer abc".to_string())));
    }

    #[test]
    fn test_rejected_token_clears_storage() {
        let store = Rc::new(MemoryStore::with_token("expired"));
        let (guard, _) = guard_with(store.clone(), |_| {
            Ok(RawResponse::json(
                401,
                &json!({"success": false, "error": "Invalid or expired token"}),
            ))
        });
        assert_eq!(block_on(guard.restore()), SessionState::Unauthenticated);
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_network_failure_clears_storage() {
        let store = Rc::new(MemoryStore::with_token("abc"));
        let (guard, _) = guard_with(store.clone(), |_| Err(ApiError::Network("down".into())));
        assert_eq!(block_on(guard.restore()), SessionState::Unauthenticated);
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_login_stores_session() {
        let store = Rc::new(MemoryStore::default());
        let (guard, _) = guard_with(store.clone(), |_| {
            Ok(RawResponse::json(
                200,
                &json!({"success": true, "token": "new-token", "user": user_json()}),
            ))
        });
        let user = block_on(guard.login(&LoginRequest::new("tech01@gmail.com", "password1"))).unwrap();
        assert_eq!(user.display_name(), "Tech-01");
        assert_eq!(store.token().as_deref(), Some("new-token"));
        assert_eq!(store.profile().email.as_deref(), Some("tech01@gmail.com"));
    }

    #[test]
    fn test_logout_clears_even_when_server_fails() {
        let store = Rc::new(MemoryStore::with_token("abc"));
        let (guard, transport) = guard_with(store.clone(), |_| Err(ApiError::Network("down".into())));
        block_on(guard.logout());
        assert_eq!(store.token(), None);
        assert_eq!(transport.requests()[0].path, "/auth/logout");
    }
}
