/// Route visitors are sent to when a page needs a session they don't have.
pub const SIGN_IN_ROUTE: &str = "/sign-in";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    /// The stored session hasn't been read yet.
    Loading,
    Authenticated,
    Unauthenticated,
}

impl AuthStatus {
    pub fn from_session(loaded: bool, id_token: Option<&str>) -> Self {
        match id_token {
            Some(token) if !token.trim().is_empty() => AuthStatus::Authenticated,
            _ if !loaded => AuthStatus::Loading,
            _ => AuthStatus::Unauthenticated,
        }
    }
}

/// What a protected page should do for a given [`AuthStatus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Wait,
    Render,
    Redirect(&'static str),
}

pub fn guard(status: AuthStatus) -> GuardDecision {
    match status {
        AuthStatus::Loading => GuardDecision::Wait,
        AuthStatus::Authenticated => GuardDecision::Render,
        AuthStatus::Unauthenticated => GuardDecision::Redirect(SIGN_IN_ROUTE),
    }
}

/// Whether a failed request means the saved session is no longer accepted.
pub fn session_rejected(error: &str) -> bool {
    error.contains(api::AUTH_ERROR_PREFIX)
}
