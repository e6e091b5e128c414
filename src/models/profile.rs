use serde::Serialize;

use super::UserId;

/// Derived per-user statistics
///
/// Averages are `None` when the user has no rows to average over; they
/// serialize as `null`. `favorite_genre` and `plan` are `None` for accounts
/// that have no fixture row (anyone who signed up after load).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileStats {
    pub user_id: UserId,
    pub average_rating: Option<f64>,
    pub average_progress: Option<f64>,
    pub favorite_genre: Option<String>,
    pub plan: Option<String>,
}

/// Means across every user's rows
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlobalBaseline {
    pub average_rating: Option<f64>,
    pub average_progress: Option<f64>,
}

/// User value minus global value, per metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatDelta {
    pub rating: Option<f64>,
    pub progress: Option<f64>,
}

impl StatDelta {
    pub fn between(stats: &ProfileStats, baseline: &GlobalBaseline) -> Self {
        Self {
            rating: diff(stats.average_rating, baseline.average_rating),
            progress: diff(stats.average_progress, baseline.average_progress),
        }
    }
}

fn diff(user: Option<f64>, global: Option<f64>) -> Option<f64> {
    Some(user? - global?)
}

/// Another user sharing a favourite genre
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Peer {
    pub name: String,
    pub age: u8,
}
