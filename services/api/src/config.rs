use std::path::PathBuf;

/// Administrative override pair. Requests presenting exactly this pair are
/// resolved to the admin sentinel without touching the user store.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

/// API service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ApiConfig {
    /// TCP port for the HTTP server (default 5000). Env var: `PORT`.
    pub port: u16,
    /// Directory holding the JSON record sets (default `data`). Env var: `DATA_DIR`.
    pub data_dir: PathBuf,
    /// Administrative override from `BASIC_USER` / `BASIC_PASS`. When either
    /// var is absent the override is disabled and only registered users can
    /// authenticate.
    pub admin: Option<AdminCredentials>,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let admin = match (
            std::env::var("BASIC_USER").ok(),
            std::env::var("BASIC_PASS").ok(),
        ) {
            (Some(username), Some(password)) => Some(AdminCredentials { username, password }),
            _ => None,
        };
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            admin,
        }
    }
}
