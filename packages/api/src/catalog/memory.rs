use super::RecordingCatalog;
use crate::types::Recording;
use anyhow::{bail, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryCatalog {
    recordings: RwLock<HashMap<Uuid, Recording>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.recordings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl RecordingCatalog for InMemoryCatalog {
    async fn list_for_owner(&self, owner: Uuid) -> Result<Vec<Recording>> {
        let recordings = self.recordings.read().await;
        let mut mine: Vec<Recording> = recordings
            .values()
            .filter(|r| r.owner_user_id == owner)
            .cloned()
            .collect();
        // Ties broken by id so the order is stable across calls.
        mine.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(mine)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Recording>> {
        Ok(self.recordings.read().await.get(&id).cloned())
    }

    async fn insert(&self, recording: Recording) -> Result<()> {
        let mut recordings = self.recordings.write().await;
        if recordings.contains_key(&recording.id) {
            bail!("recording {} already exists", recording.id);
        }
        recordings.insert(recording.id, recording);
        Ok(())
    }
}
