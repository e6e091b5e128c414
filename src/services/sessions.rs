use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{User, UserId},
};

use super::accounts::CredentialVerifier;

/// Opaque per-client session handle
pub type SessionToken = Uuid;

/// Identity held by one client session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "user_id", rename_all = "snake_case")]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(UserId),
}

impl Session {
    /// Verifies credentials and, on a match, authenticates as that user
    ///
    /// A successful login replaces whatever identity the session held. A
    /// failed one leaves the session as it was. Attempts are not counted.
    pub fn login<V>(&mut self, verifier: &V, email: &str, secret: &str) -> AppResult<User>
    where
        V: CredentialVerifier + ?Sized,
    {
        match verifier.find_by_credential(email, secret) {
            Ok(user) => {
                *self = Session::Authenticated(user.id);
                tracing::info!(user_id = user.id, "Login succeeded");
                Ok(user)
            }
            Err(e) => {
                tracing::warn!(email = %email, "Login failed");
                Err(e)
            }
        }
    }

    /// Returns to anonymous; a no-op when already anonymous
    pub fn logout(&mut self) {
        if let Session::Authenticated(user_id) = *self {
            tracing::info!(user_id, "Logged out");
        }
        *self = Session::Anonymous;
    }

    pub fn current_user(&self) -> Option<UserId> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated(id) => Some(*id),
        }
    }

    pub fn require_user(&self) -> AppResult<UserId> {
        self.current_user().ok_or(AppError::Unauthenticated)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }
}

/// Sessions keyed by client token
///
/// Each client gets its own [`Session`], so concurrent users never overwrite
/// each other's identity.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<SessionToken, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a fresh anonymous session
    pub fn open(&mut self) -> SessionToken {
        self.insert(Session::Anonymous)
    }

    /// Stores an existing session under a new token
    pub fn insert(&mut self, session: Session) -> SessionToken {
        let token = Uuid::new_v4();
        self.sessions.insert(token, session);
        tracing::debug!(token = %token, ?session, "Session opened");
        token
    }

    pub fn get(&self, token: &SessionToken) -> AppResult<Session> {
        self.sessions.get(token).copied().ok_or(AppError::Unauthenticated)
    }

    pub fn get_mut(&mut self, token: &SessionToken) -> AppResult<&mut Session> {
        self.sessions.get_mut(token).ok_or(AppError::Unauthenticated)
    }

    /// Drops a session entirely; returns whether it existed
    pub fn close(&mut self, token: &SessionToken) -> bool {
        self.sessions.remove(token).is_some()
    }

    /// Logs the session out and drops its entry
    ///
    /// Unknown tokens are treated as already logged out, so repeating the
    /// call is harmless.
    pub fn logout(&mut self, token: &SessionToken) -> Session {
        if let Some(mut session) = self.sessions.remove(token) {
            session.logout();
            tracing::debug!(token = %token, "Session closed");
            session
        } else {
            Session::Anonymous
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::services::accounts::{AccountRegistry, MockCredentialVerifier};
    use mockall::predicate::eq;

    fn fixture_registry() -> AccountRegistry {
        AccountRegistry::new(Catalog::fixture().users())
    }

    #[test]
    fn test_new_session_is_anonymous() {
        let session = Session::default();
        assert_eq!(session, Session::Anonymous);
        assert_eq!(session.require_user(), Err(AppError::Unauthenticated));
    }

    #[test]
    fn test_login_with_valid_credentials() {
        let registry = fixture_registry();
        let mut session = Session::default();

        let user = session.login(&registry, "john@example.com", "password123").unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(session, Session::Authenticated(1));
    }

    #[test]
    fn test_failed_login_stays_anonymous() {
        let registry = fixture_registry();
        let mut session = Session::default();

        let result = session.login(&registry, "john@example.com", "wrong");
        assert_eq!(result.unwrap_err(), AppError::CredentialsNotFound);
        assert_eq!(session, Session::Anonymous);
    }

    #[test]
    fn test_failed_login_keeps_existing_identity() {
        let registry = fixture_registry();
        let mut session = Session::Authenticated(2);

        assert!(session.login(&registry, "john@example.com", "nope").is_err());
        assert_eq!(session.current_user(), Some(2));
    }

    #[test]
    fn test_second_login_overwrites() {
        let registry = fixture_registry();
        let mut session = Session::default();

        session.login(&registry, "john@example.com", "password123").unwrap();
        session.login(&registry, "jane.smith@example.com", "password456").unwrap();
        assert_eq!(session.current_user(), Some(2));
    }

    #[test]
    fn test_logout_is_idempotent() {
        let registry = fixture_registry();
        let mut session = Session::default();
        session.login(&registry, "john@example.com", "password123").unwrap();

        session.logout();
        assert_eq!(session, Session::Anonymous);
        session.logout();
        assert_eq!(session, Session::Anonymous);
    }

    #[test]
    fn test_login_delegates_to_verifier() {
        let mut verifier = MockCredentialVerifier::new();
        verifier
            .expect_find_by_credential()
            .with(eq("x@example.com"), eq("s3cret"))
            .times(1)
            .returning(|email, secret| Ok(User::new(42, "X", email, secret, 50)));

        let mut session = Session::default();
        session.login(&verifier, "x@example.com", "s3cret").unwrap();
        assert_eq!(session, Session::Authenticated(42));
    }

    #[test]
    fn test_verifier_errors_pass_through() {
        let mut verifier = MockCredentialVerifier::new();
        verifier
            .expect_find_by_credential()
            .returning(|_, _| Err(AppError::CredentialsNotFound));

        let mut session = Session::default();
        assert_eq!(
            session.login(&verifier, "a", "b").unwrap_err(),
            AppError::CredentialsNotFound
        );
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_store_sessions_are_isolated() {
        let registry = fixture_registry();
        let mut store = SessionStore::new();
        let a = store.open();
        let b = store.open();
        assert_ne!(a, b);

        store
            .get_mut(&a)
            .unwrap()
            .login(&registry, "john@example.com", "password123")
            .unwrap();

        assert_eq!(store.get(&a).unwrap(), Session::Authenticated(1));
        assert_eq!(store.get(&b).unwrap(), Session::Anonymous);
    }

    #[test]
    fn test_store_unknown_token() {
        let mut store = SessionStore::new();
        let missing = Uuid::new_v4();
        assert_eq!(store.get(&missing), Err(AppError::Unauthenticated));
        assert!(store.get_mut(&missing).is_err());
        assert!(!store.close(&missing));
    }

    #[test]
    fn test_store_insert_keeps_identity() {
        let mut store = SessionStore::new();
        let token = store.insert(Session::Authenticated(5));
        assert_eq!(store.get(&token).unwrap().current_user(), Some(5));
    }

    #[test]
    fn test_store_close() {
        let mut store = SessionStore::new();
        let token = store.open();
        assert_eq!(store.len(), 1);
        assert!(store.close(&token));
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_logout_removes_entry() {
        let registry = fixture_registry();
        let mut store = SessionStore::new();
        let token = store.open();
        let other = store.open();
        store
            .get_mut(&token)
            .unwrap()
            .login(&registry, "john@example.com", "password123")
            .unwrap();

        assert_eq!(store.logout(&token), Session::Anonymous);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&token), Err(AppError::Unauthenticated));
        assert_eq!(store.get(&other), Ok(Session::Anonymous));

        // Repeat on a token that is already gone
        assert_eq!(store.logout(&token), Session::Anonymous);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_session_serializes_with_state_tag() {
        let json = serde_json::to_value(Session::Authenticated(3)).unwrap();
        assert_eq!(json["state"], "authenticated");
        assert_eq!(json["user_id"], 3);

        let json = serde_json::to_value(Session::Anonymous).unwrap();
        assert_eq!(json["state"], "anonymous");
    }
}
