//! Helpers for driving server functions from tests without a running server.

use crate::catalog::{InMemoryCatalog, RecordingCatalog};
use crate::config::{AppConfig, AppMode};
use crate::state::{AppState, TEST_STATE};
use crate::types::Recording;
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "test-secret-key-min-32-characters-long";

pub struct TestContext {
    pub catalog: Arc<InMemoryCatalog>,
    pub state: Arc<AppState>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_mode(AppMode::Local)
    }

    pub fn with_mode(mode: AppMode) -> Self {
        let catalog = Arc::new(InMemoryCatalog::new());
        let config = AppConfig {
            mode,
            jwt_secret: TEST_JWT_SECRET.to_string(),
        };
        let state = Arc::new(AppState::with_catalog(
            config,
            catalog.clone() as Arc<dyn RecordingCatalog>,
        ));

        Self { catalog, state }
    }

    /// Install this context's state for the current thread.
    ///
    /// `#[tokio::test]` runs on a current-thread runtime, so server
    /// functions awaited in the test body see it.
    pub fn set_global(&self) {
        TEST_STATE.with(|s| *s.borrow_mut() = Some(self.state.clone()));
    }

    pub fn token_for(&self, user_id: Uuid) -> String {
        crate::auth::server::issue_session_token(TEST_JWT_SECRET, user_id)
            .expect("Failed to issue test token")
    }

    /// A token for `user_id` whose expiry passed long ago.
    pub fn expired_token_for(&self, user_id: Uuid) -> String {
        let issued_at = OffsetDateTime::now_utc() - time::Duration::days(365);
        crate::auth::server::issue_session_token_at(
            TEST_JWT_SECRET,
            user_id,
            issued_at.unix_timestamp() as usize,
        )
        .expect("Failed to issue expired test token")
    }

    pub async fn add_recording(
        &self,
        owner: Uuid,
        title: &str,
        created_at: OffsetDateTime,
    ) -> Recording {
        let recording = Recording {
            id: Uuid::new_v4(),
            owner_user_id: owner,
            title: title.to_string(),
            created_at,
            thumbnail_url: None,
        };
        self.catalog
            .insert(recording.clone())
            .await
            .expect("Failed to insert test recording");
        recording
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        TEST_STATE.with(|s| {
            let mut current = s.borrow_mut();
            if current
                .as_ref()
                .is_some_and(|state| Arc::ptr_eq(state, &self.state))
            {
                *current = None;
            }
        });
    }
}
