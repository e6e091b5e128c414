use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    catalog::Catalog,
    services::{AccountRegistry, SessionStore},
};

/// Shared application state
///
/// The catalog is read-only and shared without a lock. Accounts and sessions
/// change on registration, login and logout, so they sit behind one lock.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub inner: Arc<RwLock<AppStateInner>>,
}

/// Mutable part of the state
pub struct AppStateInner {
    pub accounts: AccountRegistry,
    pub sessions: SessionStore,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::fixture())
    }
}

impl AppState {
    /// Creates state over a catalog, seeding accounts from its users
    pub fn new(catalog: Catalog) -> Self {
        let accounts = AccountRegistry::new(catalog.users());
        tracing::info!(users = accounts.len(), "Account registry seeded");

        Self {
            catalog: Arc::new(catalog),
            inner: Arc::new(RwLock::new(AppStateInner {
                accounts,
                sessions: SessionStore::new(),
            })),
        }
    }
}
