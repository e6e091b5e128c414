pub mod activity;
pub mod plan;
pub mod profile;
pub mod recommendation;
pub mod user;

pub use activity::{Review, WatchEvent};
pub use plan::PlanDetails;
pub use profile::{GlobalBaseline, Peer, ProfileStats, StatDelta};
pub use recommendation::RecommendationBundle;
pub use user::{User, UserView};

/// Numeric identifier shared by every per-user fixture table
pub type UserId = u32;

/// Numeric identifier of a catalogue title
pub type ContentId = u32;
