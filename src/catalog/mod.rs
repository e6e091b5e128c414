//! Immutable reference data loaded once at startup
//!
//! Every per-user table is keyed by [`UserId`]. The catalog never changes
//! after construction; new accounts live in the
//! [`AccountRegistry`](crate::services::AccountRegistry), which is seeded
//! from [`Catalog::users`].

use std::collections::HashMap;

use crate::models::{PlanDetails, RecommendationBundle, Review, User, UserId, WatchEvent};

mod fixtures;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    users: Vec<User>,
    reviews: Vec<Review>,
    watch_history: Vec<WatchEvent>,
    favorite_genres: HashMap<UserId, String>,
    plans: HashMap<UserId, PlanDetails>,
    bundles: HashMap<UserId, RecommendationBundle>,
}

impl Catalog {
    /// Creates an empty catalog
    pub fn empty() -> Self {
        Self::default()
    }

    /// The sample streaming dataset: ten users with one review, one watch
    /// event, a favourite genre, a plan and a recommendation bundle each
    pub fn fixture() -> Self {
        fixtures::load()
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }

    pub fn with_review(mut self, review: Review) -> Self {
        self.reviews.push(review);
        self
    }

    pub fn with_watch(mut self, event: WatchEvent) -> Self {
        self.watch_history.push(event);
        self
    }

    pub fn with_genre(mut self, user_id: UserId, genre: impl Into<String>) -> Self {
        self.favorite_genres.insert(user_id, genre.into());
        self
    }

    pub fn with_plan(mut self, user_id: UserId, plan: PlanDetails) -> Self {
        self.plans.insert(user_id, plan);
        self
    }

    pub fn with_bundle(mut self, user_id: UserId, bundle: RecommendationBundle) -> Self {
        self.bundles.insert(user_id, bundle);
        self
    }

    /// Users present at load time, in load order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn watch_history(&self) -> &[WatchEvent] {
        &self.watch_history
    }

    pub fn reviews_by(&self, user_id: UserId) -> impl Iterator<Item = &Review> {
        self.reviews.iter().filter(move |r| r.user_id == user_id)
    }

    pub fn watch_history_of(&self, user_id: UserId) -> impl Iterator<Item = &WatchEvent> {
        self.watch_history.iter().filter(move |w| w.user_id == user_id)
    }

    pub fn favorite_genre(&self, user_id: UserId) -> Option<&str> {
        self.favorite_genres.get(&user_id).map(String::as_str)
    }

    pub fn plan(&self, user_id: UserId) -> Option<&PlanDetails> {
        self.plans.get(&user_id)
    }

    pub fn bundle(&self, user_id: UserId) -> Option<&RecommendationBundle> {
        self.bundles.get(&user_id)
    }
}
