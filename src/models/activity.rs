use serde::Serialize;

use super::{ContentId, UserId};

/// A star rating a user left on a title
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Review {
    pub user_id: UserId,
    pub content_id: ContentId,
    /// 1 to 5
    pub rating: u8,
}

/// One row of watch history
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WatchEvent {
    pub user_id: UserId,
    pub content_id: ContentId,
    /// Completion percentage, 0 to 100
    pub progress: u8,
}
