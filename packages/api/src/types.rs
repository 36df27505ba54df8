use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    pub id: Uuid,
    pub owner_user_id: Uuid,
    pub title: String,
    pub created_at: OffsetDateTime,
    pub thumbnail_url: Option<String>,
}

impl Recording {
    /// Route of the public share page for this recording.
    pub fn share_path(&self) -> String {
        share_path(&self.id.to_string())
    }
}

pub fn share_path(id: &str) -> String {
    format!("/share/{id}")
}
