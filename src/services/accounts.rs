use crate::{
    error::{AppError, AppResult},
    models::{User, UserId},
};

/// Credential check used by sessions to resolve a login
#[cfg_attr(test, mockall::automock)]
pub trait CredentialVerifier {
    /// Returns the unique user whose email and secret both match exactly
    fn find_by_credential(&self, email: &str, secret: &str) -> AppResult<User>;
}

/// In-memory account store
///
/// Seeded from the catalog user set. Grows only through [`register`];
/// accounts are never removed, so identifiers are never reused.
///
/// [`register`]: AccountRegistry::register
#[derive(Debug, Clone, Default)]
pub struct AccountRegistry {
    users: Vec<User>,
}

impl AccountRegistry {
    pub fn new(seed: &[User]) -> Self {
        Self {
            users: seed.to_vec(),
        }
    }

    /// Creates a new account with id = current max id + 1
    ///
    /// Fails with [`AppError::DuplicateEmail`] on an exact email match and
    /// leaves the registry untouched. The secret is not validated.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        secret: impl Into<String>,
        age: u8,
    ) -> AppResult<User> {
        let email = email.into();

        if self.users.iter().any(|u| u.email == email) {
            tracing::debug!(email = %email, "Registration rejected, email taken");
            return Err(AppError::DuplicateEmail(email));
        }

        let id = self.next_id();
        let user = User::new(id, name, email, secret, age);
        self.users.push(user.clone());

        tracing::info!(user_id = id, "Account registered");

        Ok(user)
    }

    pub fn get(&self, user_id: UserId) -> AppResult<&User> {
        self.users
            .iter()
            .find(|u| u.id == user_id)
            .ok_or(AppError::UnknownUser(user_id))
    }

    pub fn contains(&self, user_id: UserId) -> bool {
        self.users.iter().any(|u| u.id == user_id)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn next_id(&self) -> UserId {
        self.users.iter().map(|u| u.id).max().unwrap_or(0) + 1
    }
}

impl CredentialVerifier for AccountRegistry {
    fn find_by_credential(&self, email: &str, secret: &str) -> AppResult<User> {
        self.users
            .iter()
            .find(|u| u.matches(email, secret))
            .cloned()
            .ok_or(AppError::CredentialsNotFound)
    }
}
