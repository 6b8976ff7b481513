use std::env;

use crate::error::ConfigError;

/// PostgreSQL settings. Without `DATABASE_URL` the service runs on an
/// in-memory user store.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = env::var("DATABASE_URL").ok().filter(|u| !u.trim().is_empty());

        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "DATABASE_MAX_CONNECTIONS",
                reason: format!("expected a positive integer, got {raw:?}"),
            })?,
            Err(_) => 5,
        };

        Ok(Self {
            url,
            max_connections,
        })
    }
}

// The URL may carry credentials.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "[redacted]"))
            .field("max_connections", &self.max_connections)
            .finish()
    }
}
