//! This crate contains all shared fullstack server functions.
use dioxus::prelude::*;

pub mod config;
pub mod time_ago;
pub mod types;

#[cfg(feature = "server")]
pub mod catalog;

#[cfg(feature = "server")]
pub mod state;

mod auth;
mod recordings;

#[cfg(test)]
mod types_tests;

#[cfg(feature = "server")]
pub mod test_utils;

/// Health check endpoint
#[get("/api/health")]
pub async fn health_check() -> Result<String, ServerFnError> {
    #[cfg(feature = "server")]
    tracing::debug!("health_check");
    Ok("OK".to_string())
}

pub use auth::{local_session, require_user_id, AUTH_ERROR_PREFIX};
pub use recordings::{get_recording, list_my_recordings};
pub use time_ago::{time_ago, time_ago_now};
