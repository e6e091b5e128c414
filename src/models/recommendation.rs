use serde::Serialize;

/// Curated "because you watched" bundle for one user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationBundle {
    /// Title the user is currently watching
    pub current_title: String,
    pub lead_performer: String,
    pub similar_titles: Vec<String>,
    /// Other titles featuring the lead performer
    pub performer_titles: Vec<String>,
}

impl RecommendationBundle {
    pub fn new(
        current_title: &str,
        lead_performer: &str,
        similar_titles: [&str; 3],
        performer_titles: [&str; 3],
    ) -> Self {
        Self {
            current_title: current_title.to_string(),
            lead_performer: lead_performer.to_string(),
            similar_titles: similar_titles.iter().map(|t| t.to_string()).collect(),
            performer_titles: performer_titles.iter().map(|t| t.to_string()).collect(),
        }
    }
}
