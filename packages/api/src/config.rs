#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_MODE").unwrap_or_default())
    }

    fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }
}

/// Secret used to sign session tokens when running in local mode.
pub const LOCAL_JWT_SECRET: &str = "screenity-local-dev-secret-not-for-production";

#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: AppMode,
    pub jwt_secret: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("mode", &self.mode)
            .field("jwt_secret", &"***")
            .finish()
    }
}

#[cfg(feature = "server")]
impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let mode = AppMode::from_env();
        let jwt_secret = match (mode, std::env::var("JWT_SECRET").ok()) {
            (_, Some(secret)) if !secret.trim().is_empty() => secret,
            (AppMode::Local, _) => LOCAL_JWT_SECRET.to_string(),
            (AppMode::Production, _) => anyhow::bail!("JWT_SECRET must be set in production mode"),
        };

        Ok(Self { mode, jwt_secret })
    }
}

/// Load `.env` from the working directory if there is one.
#[cfg(feature = "server")]
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("config.load_dotenv: loaded {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => eprintln!("startup: WARNING failed to read .env: {e}"),
    }
}
