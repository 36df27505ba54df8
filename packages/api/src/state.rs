use crate::catalog::{seed, InMemoryCatalog, RecordingCatalog};
use crate::config::{AppConfig, AppMode};
use anyhow::Result;
use std::sync::{Arc, OnceLock};
use time::OffsetDateTime;

/// Global application state shared by every server function.
pub struct AppState {
    pub catalog: Arc<dyn RecordingCatalog>,
    pub config: AppConfig,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Build state from configuration.
    ///
    /// Local mode seeds the catalog with demo recordings owned by
    /// [`seed::DEMO_USER_ID`].
    pub async fn from_config(config: AppConfig) -> Result<Self> {
        match config.mode {
            AppMode::Local => tracing::info!("App Mode: LOCAL"),
            AppMode::Production => tracing::info!("App Mode: PRODUCTION"),
        }

        let catalog = InMemoryCatalog::new();
        if config.mode == AppMode::Local && catalog.is_empty().await {
            tracing::info!("Seeding empty catalog with demo recordings...");
            seed::seed_catalog(&catalog, OffsetDateTime::now_utc()).await?;
            tracing::info!("  Demo user: {}", seed::DEMO_USER_ID);
        }

        Ok(Self::with_catalog(config, Arc::new(catalog)))
    }

    pub fn with_catalog(config: AppConfig, catalog: Arc<dyn RecordingCatalog>) -> Self {
        Self { catalog, config }
    }

    /// Set the global AppState instance
    ///
    /// This should be called once at server startup.
    /// Panics if called more than once.
    pub fn set_global(state: Arc<Self>) {
        STATE
            .set(state)
            .expect("AppState::set_global called more than once");
    }

    /// Get the global AppState instance
    ///
    /// Panics if called before set_global.
    pub fn global() -> Arc<Self> {
        // In tests, check thread-local state first
        if let Some(test_state) = TEST_STATE.with(|s| s.borrow().clone()) {
            return test_state;
        }

        STATE
            .get()
            .expect("AppState::global called before set_global")
            .clone()
    }
}

/// Global state storage using OnceLock for thread-safe initialization
pub(crate) static STATE: OnceLock<Arc<AppState>> = OnceLock::new();

thread_local! {
    /// Thread-local state override for testing
    pub(crate) static TEST_STATE: std::cell::RefCell<Option<Arc<AppState>>> = const { std::cell::RefCell::new(None) };
}
