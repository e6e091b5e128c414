use crate::{
    catalog::Catalog,
    error::{AppError, AppResult},
    models::{RecommendationBundle, UserId},
};

/// Returns the curated bundle for a user
///
/// Bundles are a fixed table in the catalog; there is no scoring. Users
/// without an entry (including every account registered after load) fail
/// with [`AppError::UnknownUser`].
pub fn bundle_for(catalog: &Catalog, user_id: UserId) -> AppResult<RecommendationBundle> {
    catalog.bundle(user_id).cloned().ok_or_else(|| {
        tracing::debug!(user_id, "No recommendation bundle");
        AppError::UnknownUser(user_id)
    })
}
