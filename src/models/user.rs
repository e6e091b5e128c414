use serde::Serialize;

use super::UserId;

/// A registered account, including its credential secret
///
/// The secret is stored and compared verbatim. It is never serialized;
/// use [`UserView`] for anything that leaves the process.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Unique across the registry, compared case-sensitively
    pub email: String,
    pub secret: String,
    pub age: u8,
}

impl User {
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        secret: impl Into<String>,
        age: u8,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            secret: secret.into(),
            age,
        }
    }

    /// Exact, plaintext credential match
    pub fn matches(&self, email: &str, secret: &str) -> bool {
        self.email == email && self.secret == secret
    }
}

/// Public projection of a [`User`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserView {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub age: u8,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            age: user.age,
        }
    }
}
