pub mod accounts;
pub mod profile;
pub mod recommendations;
pub mod sessions;

pub use accounts::{AccountRegistry, CredentialVerifier};
pub use profile::ProfileAggregator;
pub use sessions::{Session, SessionStore, SessionToken};
