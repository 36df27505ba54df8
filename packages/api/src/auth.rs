use dioxus::prelude::ServerFnError;
use uuid::Uuid;

/// Prefix of every error caused by a missing or rejected session.
pub const AUTH_ERROR_PREFIX: &str = "auth:";

#[cfg(feature = "server")]
pub(crate) mod server {
    use anyhow::Context;
    use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
    use serde::{Deserialize, Serialize};
    use tracing::debug;
    use uuid::Uuid;

    const ISSUER: &str = "screenity";
    const SESSION_TTL_SECS: usize = 30 * 24 * 60 * 60; // 30 days

    #[derive(Debug, Serialize, Deserialize)]
    struct SessionClaims {
        sub: String,
        iss: String,
        exp: usize,
        iat: usize,
    }

    pub fn issue_session_token(secret: &str, user_id: Uuid) -> Result<String, anyhow::Error> {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_secs() as usize;
        issue_session_token_at(secret, user_id, now)
    }

    /// Issue a token as if it had been signed at `now` (unix seconds).
    pub fn issue_session_token_at(
        secret: &str,
        user_id: Uuid,
        now: usize,
    ) -> Result<String, anyhow::Error> {
        let claims = SessionClaims {
            sub: user_id.to_string(),
            iss: ISSUER.to_string(),
            exp: now + SESSION_TTL_SECS,
            iat: now,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )?;

        debug!("auth.issue_session_token: user_id={}", user_id);
        Ok(token)
    }

    pub fn verify_session_token(secret: &str, token: &str) -> Result<Uuid, anyhow::Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[ISSUER]);

        let token_data = decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )
        .context("session token rejected")?;

        let user_id = Uuid::parse_str(&token_data.claims.sub).context("bad subject")?;
        debug!("auth.verify_session_token: user_id={}", user_id);
        Ok(user_id)
    }

}

/// Resolve the caller's user id from a bearer token.
pub async fn require_user_id(id_token: String) -> Result<Uuid, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = id_token;
        Err(ServerFnError::new("require_user_id is server-only"))
    }

    #[cfg(feature = "server")]
    {
        tracing::debug!("auth.require_user_id: token_len={}", id_token.len());
        if id_token.trim().is_empty() {
            return Err(ServerFnError::new(format!(
                "{AUTH_ERROR_PREFIX} not signed in"
            )));
        }

        let state = crate::state::AppState::global();
        let user_id = server::verify_session_token(&state.config.jwt_secret, &id_token)
            .map_err(|e| ServerFnError::new(format!("{AUTH_ERROR_PREFIX} {e:#}")))?;
        tracing::debug!("auth.require_user_id: user_id={}", user_id);
        Ok(user_id)
    }
}

/// Hand out a session for the demo user. Only available in local mode.
#[dioxus::prelude::post("/api/auth/local_session")]
pub async fn local_session() -> Result<String, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("local_session is server-only"))
    }

    #[cfg(feature = "server")]
    {
        use crate::config::AppMode;

        let state = crate::state::AppState::global();
        if state.config.mode != AppMode::Local {
            tracing::debug!("auth.local_session: refused outside local mode");
            return Err(ServerFnError::new("local sessions are disabled"));
        }

        let token = server::issue_session_token(
            &state.config.jwt_secret,
            crate::catalog::seed::DEMO_USER_ID,
        )
        .map_err(|e| ServerFnError::new(e.to_string()))?;
        tracing::info!("auth.local_session: issued demo session");
        Ok(token)
    }
}
