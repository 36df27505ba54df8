use crate::types::Recording;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

pub mod memory;
pub mod seed;

pub use memory::InMemoryCatalog;

/// Read/write access to recording metadata.
///
/// Media bytes live elsewhere; a catalog only knows who recorded what and when.
#[async_trait]
pub trait RecordingCatalog: Send + Sync {
    /// Recordings owned by `owner`, newest first.
    async fn list_for_owner(&self, owner: Uuid) -> Result<Vec<Recording>>;

    async fn get(&self, id: Uuid) -> Result<Option<Recording>>;

    async fn insert(&self, recording: Recording) -> Result<()>;
}
