//! Session state machine
//!
//! [`SessionManager`] is the only place where the session state changes. It
//! talks to the backend through an [`AuthGateway`], keeps the bearer
//! credential in a [`SessionStore`] and publishes every transition on a
//! `watch` channel so views can re-render when the session changes.

use super::error::AuthError;
use async_trait::async_trait;
use folio_http::client::store::SessionStore;
use folio_http::types::{LoginResponse, User, VerifyResponse};
use folio_http::{ApiClient, ClientError};
use std::cell::Cell;
use std::rc::Rc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// What the application currently believes about the visitor
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Verification not attempted yet, or still in flight
    #[default]
    Unresolved,
    Authenticated {
        user: User,
    },
    Anonymous,
}

impl SessionState {
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::Unresolved)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Signed-in user, if any
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated { user } => Some(user),
            _ => None,
        }
    }
}

/// Backend calls the session manager depends on
#[async_trait(?Send)]
pub trait AuthGateway {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ClientError>;
    async fn verify_session(&self) -> Result<VerifyResponse, ClientError>;
}

#[async_trait(?Send)]
impl<T: AuthGateway + ?Sized> AuthGateway for Rc<T> {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ClientError> {
        (**self).login(username, password).await
    }

    async fn verify_session(&self) -> Result<VerifyResponse, ClientError> {
        (**self).verify_session().await
    }
}

#[async_trait(?Send)]
impl AuthGateway for ApiClient {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ClientError> {
        ApiClient::login(self, username, password).await
    }

    async fn verify_session(&self) -> Result<VerifyResponse, ClientError> {
        ApiClient::verify_session(self).await
    }
}

/// Owns the session state and every transition of it
pub struct SessionManager<G> {
    gateway: G,
    store: Rc<dyn SessionStore>,
    state: watch::Sender<SessionState>,
    mounted: Cell<bool>,
}

impl<G: AuthGateway> SessionManager<G> {
    /// Create a manager in the `Unresolved` state
    pub fn new(gateway: G, store: Rc<dyn SessionStore>) -> Self {
        let (state, _) = watch::channel(SessionState::Unresolved);
        Self {
            gateway,
            store,
            state,
            mounted: Cell::new(false),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state transition
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Signed-in user, if any
    pub fn user(&self) -> Option<User> {
        self.state.borrow().user().cloned()
    }

    /// Resolve the initial state from the stored credential
    ///
    /// Runs once per manager. Without a stored credential the session is
    /// anonymous and no request is made. Otherwise the credential is verified
    /// and any outcome other than `valid: true` clears it.
    pub async fn mount(&self) {
        if self.mounted.replace(true) {
            return;
        }

        if self.store.read().is_none() {
            debug!("no stored credential");
            self.transition(SessionState::Anonymous);
            return;
        }

        let outcome = self.gateway.verify_session().await;

        // login or logout may have resolved the session while verify was in flight
        if !self.state.borrow().is_unresolved() {
            debug!("discarding stale verification result");
            return;
        }

        match outcome {
            Ok(VerifyResponse { valid: true, user }) => {
                self.transition(SessionState::Authenticated {
                    user: user.unwrap_or_default(),
                });
            }
            Ok(_) => {
                debug!("stored credential is no longer valid");
                self.end_session();
            }
            Err(error) => {
                warn!(%error, "session verification failed");
                self.end_session();
            }
        }
    }

    /// Sign in with a username and password
    ///
    /// On success the returned credential is stored and the session becomes
    /// authenticated as the submitted username. If the credential cannot be
    /// stored the session stays as it was and [`AuthError::Storage`] is
    /// returned. On failure neither the state nor the store is touched.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        match self.gateway.login(username, password).await {
            Ok(response) => {
                if let Err(error) = self.store.save(&response.token) {
                    warn!(%error, username, "credential not stored, staying signed out");
                    return Err(error.into());
                }
                self.transition(SessionState::Authenticated {
                    user: User::new(username),
                });
                info!(username, "signed in");
                Ok(response)
            }
            Err(error) => {
                warn!(%error, username, "login rejected");
                Err(error.into())
            }
        }
    }

    /// Sign out locally. Idempotent, makes no request.
    pub fn logout(&self) {
        if self.state.borrow().is_authenticated() {
            info!("signed out");
        }
        self.end_session();
    }

    /// Check that the current session is still accepted by the backend
    ///
    /// Only an explicit `valid: false` or a 401 ends the session. Transport
    /// and server failures keep it.
    pub async fn revalidate(&self) {
        if !self.state.borrow().is_authenticated() {
            return;
        }
        let credential = self.store.read();

        let outcome = self.gateway.verify_session().await;

        if !self.state.borrow().is_authenticated() || self.store.read() != credential {
            debug!("session changed during revalidation");
            return;
        }

        match outcome {
            Ok(VerifyResponse { valid: true, .. }) => debug!("session still valid"),
            Ok(_) => {
                info!("session expired");
                self.end_session();
            }
            Err(error) if error.is_auth_expired() => {
                info!("session rejected by backend");
                self.end_session();
            }
            Err(error) => warn!(%error, "revalidation failed, keeping session"),
        }
    }

    fn end_session(&self) {
        if let Err(error) = self.store.clear() {
            warn!(%error, "stored credential could not be removed");
        }
        self.transition(SessionState::Anonymous);
    }

    fn transition(&self, next: SessionState) {
        let changed = self.state.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
        if changed {
            debug!(state = ?*self.state.borrow(), "session state changed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_http::client::store::{MemorySessionStore, StoreError};
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub Gateway {}

        #[async_trait(?Send)]
        impl AuthGateway for Gateway {
            async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ClientError>;
            async fn verify_session(&self) -> Result<VerifyResponse, ClientError>;
        }
    }

    mock! {
        pub Store {}

        impl SessionStore for Store {
            fn save(&self, credential: &str) -> Result<(), StoreError>;
            fn read(&self) -> Option<String>;
            fn clear(&self) -> Result<(), StoreError>;
        }
    }

    fn manager(
        gateway: MockGateway,
        store: &Rc<MemorySessionStore>,
    ) -> SessionManager<MockGateway> {
        SessionManager::new(gateway, store.clone())
    }

    fn verified(username: &str) -> VerifyResponse {
        VerifyResponse {
            valid: true,
            user: Some(User::new(username)),
        }
    }

    fn issued(token: &str) -> LoginResponse {
        LoginResponse {
            token: token.to_string(),
            user: Some(User::new("admin")),
        }
    }

    #[tokio::test]
    async fn test_mount_without_credential_skips_verify() {
        let mut gateway = MockGateway::new();
        gateway.expect_verify_session().never();
        let store = Rc::new(MemorySessionStore::default());
        let session = manager(gateway, &store);

        assert_eq!(session.state(), SessionState::Unresolved);
        session.mount().await;

        assert_eq!(session.state(), SessionState::Anonymous);
        assert_eq!(store.read(), None);
    }

    #[tokio::test]
    async fn test_mount_with_valid_credential_authenticates() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_verify_session()
            .times(1)
            .returning(|| Ok(verified("admin")));
        let store = Rc::new(MemorySessionStore::with_credential("tok123"));
        let session = manager(gateway, &store);

        session.mount().await;

        assert_eq!(
            session.state(),
            SessionState::Authenticated {
                user: User::new("admin")
            }
        );
        assert_eq!(store.read().as_deref(), Some("tok123"));
    }

    #[tokio::test]
    async fn test_mount_with_invalid_credential_clears_store() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_verify_session()
            .returning(|| Ok(VerifyResponse::default()));
        let store = Rc::new(MemorySessionStore::with_credential("stale"));
        let session = manager(gateway, &store);

        session.mount().await;

        assert_eq!(session.state(), SessionState::Anonymous);
        assert_eq!(store.read(), None);
    }

    #[tokio::test]
    async fn test_mount_verify_failure_falls_back_to_anonymous() {
        let mut gateway = MockGateway::new();
        gateway.expect_verify_session().returning(|| {
            Err(ClientError::ServerError {
                status: 503,
                message: "unavailable".into(),
            })
        });
        let store = Rc::new(MemorySessionStore::with_credential("tok123"));
        let session = manager(gateway, &store);

        session.mount().await;

        assert_eq!(session.state(), SessionState::Anonymous);
        assert_eq!(store.read(), None);
    }

    #[tokio::test]
    async fn test_mount_runs_once() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_verify_session()
            .times(1)
            .returning(|| Ok(verified("admin")));
        let store = Rc::new(MemorySessionStore::with_credential("tok123"));
        let session = manager(gateway, &store);

        session.mount().await;
        session.logout();
        session.mount().await;

        assert_eq!(session.state(), SessionState::Anonymous);
    }

    #[tokio::test]
    async fn test_valid_session_without_user_uses_fallback_name() {
        let mut gateway = MockGateway::new();
        gateway.expect_verify_session().returning(|| {
            Ok(VerifyResponse {
                valid: true,
                user: None,
            })
        });
        let store = Rc::new(MemorySessionStore::with_credential("tok123"));
        let session = manager(gateway, &store);

        session.mount().await;

        assert_eq!(session.user().unwrap().display_name(), "Admin");
    }

    #[tokio::test]
    async fn test_rejected_login_leaves_session_untouched() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_login()
            .with(eq("admin"), eq("wrong"))
            .returning(|_, _| {
                Err(ClientError::AuthenticationFailed(
                    r#"{"error":"Invalid credentials"}"#.into(),
                ))
            });
        let store = Rc::new(MemorySessionStore::default());
        let session = manager(gateway, &store);
        session.mount().await;

        let error = session.login("admin", "wrong").await.unwrap_err();

        assert_eq!(error.user_message(), "Invalid credentials");
        assert_eq!(session.state(), SessionState::Anonymous);
        assert_eq!(store.read(), None);
    }

    #[tokio::test]
    async fn test_successful_login_stores_credential() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_login()
            .with(eq("admin"), eq("right"))
            .times(1)
            .returning(|_, _| Ok(issued("abc")));
        let store = Rc::new(MemorySessionStore::default());
        let session = manager(gateway, &store);
        session.mount().await;

        let response = session.login("admin", "right").await.unwrap();

        assert_eq!(response.token, "abc");
        assert_eq!(store.read().as_deref(), Some("abc"));
        assert!(session.state().is_authenticated());
    }

    #[tokio::test]
    async fn test_login_is_refused_when_credential_cannot_be_stored() {
        let mut gateway = MockGateway::new();
        gateway.expect_login().returning(|_, _| Ok(issued("abc")));
        let mut store = MockStore::new();
        store.expect_read().return_const(None);
        store
            .expect_save()
            .with(eq("abc"))
            .times(1)
            .returning(|_| Err(StoreError::Rejected("QuotaExceededError".into())));
        let session = SessionManager::new(gateway, Rc::new(store));
        session.mount().await;
        let mut updates = session.subscribe();

        let error = session.login("admin", "right").await.unwrap_err();

        assert!(matches!(error, AuthError::Storage(_)));
        assert_eq!(session.state(), SessionState::Anonymous);
        assert!(!updates.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_logout_with_failing_clear_still_signs_out() {
        let mut gateway = MockGateway::new();
        gateway.expect_login().returning(|_, _| Ok(issued("abc")));
        let mut store = MockStore::new();
        store.expect_save().returning(|_| Ok(()));
        store
            .expect_clear()
            .times(1)
            .returning(|| Err(StoreError::Unavailable));
        let session = SessionManager::new(gateway, Rc::new(store));
        session.login("admin", "right").await.unwrap();

        session.logout();

        assert_eq!(session.state(), SessionState::Anonymous);
    }

    #[tokio::test]
    async fn test_login_uses_submitted_username() {
        let mut gateway = MockGateway::new();
        gateway.expect_login().returning(|_, _| {
            Ok(LoginResponse {
                token: "abc".into(),
                user: Some(User::new("someone-else")),
            })
        });
        let store = Rc::new(MemorySessionStore::default());
        let session = manager(gateway, &store);

        session.login("editor", "pw").await.unwrap();

        assert_eq!(session.user(), Some(User::new("editor")));
    }

    #[tokio::test]
    async fn test_login_with_blank_field_makes_no_request() {
        let mut gateway = MockGateway::new();
        gateway.expect_login().never();
        let store = Rc::new(MemorySessionStore::default());
        let session = manager(gateway, &store);

        let error = session.login("admin", "").await.unwrap_err();
        assert!(matches!(error, AuthError::MissingFields));

        let error = session.login("", "secret").await.unwrap_err();
        assert!(matches!(error, AuthError::MissingFields));
    }

    #[tokio::test]
    async fn test_login_then_logout_clears_everything() {
        let mut gateway = MockGateway::new();
        gateway.expect_login().returning(|_, _| Ok(issued("abc")));
        let store = Rc::new(MemorySessionStore::default());
        let session = manager(gateway, &store);

        for _ in 0..3 {
            session.login("admin", "right").await.unwrap();
            session.logout();
            assert_eq!(session.state(), SessionState::Anonymous);
            assert_eq!(store.read(), None);
        }
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let mut gateway = MockGateway::new();
        gateway.expect_login().returning(|_, _| Ok(issued("abc")));
        let store = Rc::new(MemorySessionStore::default());
        let session = manager(gateway, &store);
        session.login("admin", "right").await.unwrap();
        let mut updates = session.subscribe();

        session.logout();
        assert!(updates.has_changed().unwrap());
        updates.borrow_and_update();

        session.logout();
        assert!(!updates.has_changed().unwrap());
        assert_eq!(session.state(), SessionState::Anonymous);
        assert_eq!(store.read(), None);
    }

    #[tokio::test]
    async fn test_subscribers_see_transitions() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_verify_session()
            .returning(|| Ok(verified("admin")));
        let store = Rc::new(MemorySessionStore::with_credential("tok123"));
        let session = manager(gateway, &store);
        let mut updates = session.subscribe();

        session.mount().await;

        assert!(updates.has_changed().unwrap());
        assert!(updates.borrow_and_update().is_authenticated());

        session.logout();
        assert_eq!(*updates.borrow_and_update(), SessionState::Anonymous);
    }

    #[tokio::test]
    async fn test_revalidate_ends_session_on_invalid_credential() {
        let mut gateway = MockGateway::new();
        gateway.expect_login().returning(|_, _| Ok(issued("abc")));
        gateway
            .expect_verify_session()
            .returning(|| Ok(VerifyResponse::default()));
        let store = Rc::new(MemorySessionStore::default());
        let session = manager(gateway, &store);
        session.login("admin", "right").await.unwrap();

        session.revalidate().await;

        assert_eq!(session.state(), SessionState::Anonymous);
        assert_eq!(store.read(), None);
    }

    #[tokio::test]
    async fn test_revalidate_ends_session_on_unauthorized() {
        let mut gateway = MockGateway::new();
        gateway.expect_login().returning(|_, _| Ok(issued("abc")));
        gateway
            .expect_verify_session()
            .returning(|| Err(ClientError::AuthenticationFailed(String::new())));
        let store = Rc::new(MemorySessionStore::default());
        let session = manager(gateway, &store);
        session.login("admin", "right").await.unwrap();

        session.revalidate().await;

        assert_eq!(session.state(), SessionState::Anonymous);
    }

    #[tokio::test]
    async fn test_revalidate_keeps_session_on_server_failure() {
        let mut gateway = MockGateway::new();
        gateway.expect_login().returning(|_, _| Ok(issued("abc")));
        gateway.expect_verify_session().returning(|| {
            Err(ClientError::ServerError {
                status: 500,
                message: "boom".into(),
            })
        });
        let store = Rc::new(MemorySessionStore::default());
        let session = manager(gateway, &store);
        session.login("admin", "right").await.unwrap();

        session.revalidate().await;

        assert!(session.state().is_authenticated());
        assert_eq!(store.read().as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_revalidate_is_skipped_when_anonymous() {
        let mut gateway = MockGateway::new();
        gateway.expect_verify_session().never();
        let store = Rc::new(MemorySessionStore::default());
        let session = manager(gateway, &store);
        session.mount().await;

        session.revalidate().await;

        assert_eq!(session.state(), SessionState::Anonymous);
    }
}
