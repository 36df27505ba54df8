use crate::types::Recording;
use dioxus::prelude::*;
#[cfg(feature = "server")]
use tracing::debug;

/// Recordings owned by the signed-in caller, newest first.
#[dioxus::prelude::post("/api/recordings/mine")]
pub async fn list_my_recordings(id_token: String) -> Result<Vec<Recording>, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = id_token;
        Err(ServerFnError::new("list_my_recordings is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let user_id = crate::auth::require_user_id(id_token).await?;
        let state = crate::state::AppState::global();

        let recordings = state
            .catalog
            .list_for_owner(user_id)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

        debug!(
            "recordings.list_my_recordings: user_id={} count={}",
            user_id,
            recordings.len()
        );
        Ok(recordings)
    }
}

/// A single recording, as shown on its share page.
#[dioxus::prelude::get("/api/recordings/get/:id")]
pub async fn get_recording(id: String) -> Result<Recording, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = id;
        Err(ServerFnError::new("get_recording is server-only"))
    }

    #[cfg(feature = "server")]
    {
        use uuid::Uuid;

        let rid = Uuid::parse_str(&id).map_err(|_| ServerFnError::new("invalid id"))?;
        let state = crate::state::AppState::global();

        let recording = state
            .catalog
            .get(rid)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?
            .ok_or_else(|| ServerFnError::new("recording not found"))?;

        debug!("recordings.get_recording: id={}", rid);
        Ok(recording)
    }
}
