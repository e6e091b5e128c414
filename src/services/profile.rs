use crate::{
    catalog::Catalog,
    error::{AppError, AppResult},
    models::{GlobalBaseline, Peer, PlanDetails, ProfileStats, StatDelta, UserId},
};

use super::accounts::AccountRegistry;

/// Arithmetic mean, or [`AppError::EmptyAggregate`] over zero values
pub fn mean<I>(values: I) -> AppResult<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        return Err(AppError::EmptyAggregate);
    }

    Ok(sum / count as f64)
}

/// Per-user statistics joined from catalog tables
///
/// Nothing is cached: every call rescans the catalog.
pub struct ProfileAggregator<'a> {
    catalog: &'a Catalog,
    accounts: &'a AccountRegistry,
}

impl<'a> ProfileAggregator<'a> {
    pub fn new(catalog: &'a Catalog, accounts: &'a AccountRegistry) -> Self {
        Self { catalog, accounts }
    }

    pub fn compute_stats(&self, user_id: UserId) -> AppResult<ProfileStats> {
        self.ensure_known(user_id)?;

        let average_rating = mean(
            self.catalog
                .reviews_by(user_id)
                .map(|r| f64::from(r.rating)),
        )
        .ok();
        let average_progress = mean(
            self.catalog
                .watch_history_of(user_id)
                .map(|w| f64::from(w.progress)),
        )
        .ok();

        tracing::debug!(
            user_id,
            ?average_rating,
            ?average_progress,
            "Computed profile stats"
        );

        Ok(ProfileStats {
            user_id,
            average_rating,
            average_progress,
            favorite_genre: self.catalog.favorite_genre(user_id).map(str::to_string),
            plan: self.catalog.plan(user_id).map(|p| p.plan.clone()),
        })
    }

    pub fn global_baseline(&self) -> GlobalBaseline {
        GlobalBaseline {
            average_rating: mean(self.catalog.reviews().iter().map(|r| f64::from(r.rating))).ok(),
            average_progress: mean(
                self.catalog
                    .watch_history()
                    .iter()
                    .map(|w| f64::from(w.progress)),
            )
            .ok(),
        }
    }

    pub fn deltas(&self, stats: &ProfileStats) -> StatDelta {
        StatDelta::between(stats, &self.global_baseline())
    }

    /// Billing details, `None` for accounts created after load
    pub fn plan_details(&self, user_id: UserId) -> AppResult<Option<PlanDetails>> {
        self.ensure_known(user_id)?;
        Ok(self.catalog.plan(user_id).cloned())
    }

    /// Users sharing the requester's favourite genre, requester included
    pub fn peers(&self, user_id: UserId) -> AppResult<Vec<Peer>> {
        self.ensure_known(user_id)?;

        let Some(genre) = self.catalog.favorite_genre(user_id) else {
            return Ok(Vec::new());
        };

        Ok(self
            .accounts
            .users()
            .iter()
            .filter(|u| self.catalog.favorite_genre(u.id) == Some(genre))
            .map(|u| Peer {
                name: u.name.clone(),
                age: u.age,
            })
            .collect())
    }

    fn ensure_known(&self, user_id: UserId) -> AppResult<()> {
        if self.accounts.contains(user_id) {
            Ok(())
        } else {
            Err(AppError::UnknownUser(user_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Review, User, WatchEvent};

    fn fixture() -> (Catalog, AccountRegistry) {
        let catalog = Catalog::fixture();
        let accounts = AccountRegistry::new(catalog.users());
        (catalog, accounts)
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean([2.0, 4.0]), Ok(3.0));
        assert_eq!(mean(std::iter::empty::<f64>()), Err(AppError::EmptyAggregate));
    }

    #[test]
    fn test_fixture_user_stats() {
        let (catalog, accounts) = fixture();
        let stats = ProfileAggregator::new(&catalog, &accounts).compute_stats(4).unwrap();
        assert_eq!(stats.average_rating, Some(2.0));
        assert_eq!(stats.average_progress, Some(20.0));
        assert_eq!(stats.favorite_genre.as_deref(), Some("Horror"));
        assert_eq!(stats.plan.as_deref(), Some("Premium"));
    }

    #[test]
    fn test_single_review_average_is_exact() {
        let catalog = Catalog::empty()
            .with_user(User::new(1, "Solo", "solo@example.com", "pw", 30))
            .with_review(Review {
                user_id: 1,
                content_id: 201,
                rating: 3,
            });
        let accounts = AccountRegistry::new(catalog.users());

        let stats = ProfileAggregator::new(&catalog, &accounts).compute_stats(1).unwrap();
        assert_eq!(stats.average_rating, Some(3.0));
    }

    #[test]
    fn test_no_watch_history_yields_empty_sentinel() {
        let catalog = Catalog::empty()
            .with_user(User::new(1, "Solo", "solo@example.com", "pw", 30))
            .with_review(Review {
                user_id: 1,
                content_id: 201,
                rating: 5,
            });
        let accounts = AccountRegistry::new(catalog.users());

        let stats = ProfileAggregator::new(&catalog, &accounts).compute_stats(1).unwrap();
        assert_eq!(stats.average_progress, None);
        assert_eq!(stats.favorite_genre, None);
    }

    #[test]
    fn test_multiple_rows_are_averaged() {
        let catalog = Catalog::empty()
            .with_user(User::new(1, "Binge", "binge@example.com", "pw", 30))
            .with_watch(WatchEvent {
                user_id: 1,
                content_id: 201,
                progress: 100,
            })
            .with_watch(WatchEvent {
                user_id: 1,
                content_id: 202,
                progress: 50,
            });
        let accounts = AccountRegistry::new(catalog.users());

        let stats = ProfileAggregator::new(&catalog, &accounts).compute_stats(1).unwrap();
        assert_eq!(stats.average_progress, Some(75.0));
    }

    #[test]
    fn test_unknown_user_fails() {
        let (catalog, accounts) = fixture();
        let aggregator = ProfileAggregator::new(&catalog, &accounts);
        assert_eq!(aggregator.compute_stats(99), Err(AppError::UnknownUser(99)));
        assert_eq!(aggregator.peers(99), Err(AppError::UnknownUser(99)));
        assert_eq!(aggregator.plan_details(99), Err(AppError::UnknownUser(99)));
    }

    #[test]
    fn test_registered_user_has_empty_stats() {
        let (catalog, mut accounts) = fixture();
        let nina = accounts.register("Nina", "nina@example.com", "pw", 25).unwrap();

        let aggregator = ProfileAggregator::new(&catalog, &accounts);
        let stats = aggregator.compute_stats(nina.id).unwrap();
        assert_eq!(stats.average_rating, None);
        assert_eq!(stats.average_progress, None);
        assert_eq!(stats.plan, None);
        assert_eq!(aggregator.plan_details(nina.id), Ok(None));
        assert!(aggregator.peers(nina.id).unwrap().is_empty());
    }

    #[test]
    fn test_global_baseline() {
        let (catalog, accounts) = fixture();
        let baseline = ProfileAggregator::new(&catalog, &accounts).global_baseline();
        // ratings sum to 38, progress to 670, over ten rows each
        assert!((baseline.average_rating.unwrap() - 3.8).abs() < 1e-9);
        assert!((baseline.average_progress.unwrap() - 67.0).abs() < 1e-9);
    }

    #[test]
    fn test_global_baseline_on_empty_catalog() {
        let catalog = Catalog::empty();
        let accounts = AccountRegistry::default();
        let baseline = ProfileAggregator::new(&catalog, &accounts).global_baseline();
        assert_eq!(baseline.average_rating, None);
        assert_eq!(baseline.average_progress, None);
    }

    #[test]
    fn test_deltas_against_baseline() {
        let (catalog, accounts) = fixture();
        let aggregator = ProfileAggregator::new(&catalog, &accounts);
        let stats = aggregator.compute_stats(1).unwrap();
        let delta = aggregator.deltas(&stats);
        assert!((delta.rating.unwrap() - 0.2).abs() < 1e-9);
        assert!((delta.progress.unwrap() - 33.0).abs() < 1e-9);
    }

    #[test]
    fn test_peers_share_genre_and_include_self() {
        let (catalog, accounts) = fixture();
        let peers = ProfileAggregator::new(&catalog, &accounts).peers(1).unwrap();
        let names: Vec<&str> = peers.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["John Doe", "David Miller"]);
        assert_eq!(peers[1].age, 40);
    }

    #[test]
    fn test_plan_details() {
        let (catalog, accounts) = fixture();
        let plan = ProfileAggregator::new(&catalog, &accounts)
            .plan_details(4)
            .unwrap()
            .unwrap();
        assert_eq!(plan.plan, "Premium");
        assert_eq!(plan.amount_paid, 59.97);
        assert_eq!(plan.perks, "Ultra HD + Offline");
        assert_eq!(plan.device_type, "Smart TV");
        assert_eq!(plan.next_payment_date.to_string(), "2025-11-01");
    }
}
