//! Token signing configuration.
//!
//! The signing secret comes from `JWT_SECRET`, or from the file named by
//! `JWT_SECRET_FILE` (for mounted secrets). There is no compiled-in default:
//! a missing or short secret stops the process at startup.
//!
//! - `JWT_SECRET` / `JWT_SECRET_FILE`: HMAC secret, at least 32 bytes
//! - `JWT_TOKEN_TTL_SECS`: token lifetime in seconds (default: 86400, at
//!   most ten years)

use std::env;

use crate::error::ConfigError;

pub const MIN_SECRET_BYTES: usize = 32;
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 24 * 60 * 60;
pub const MAX_TOKEN_TTL_SECS: i64 = 10 * 365 * DEFAULT_TOKEN_TTL_SECS;

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub token_ttl_secs: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, token_ttl_secs: i64) -> Result<Self, ConfigError> {
        let secret = secret.into().trim().to_string();
        if secret.len() < MIN_SECRET_BYTES {
            return Err(ConfigError::Invalid {
                name: "JWT_SECRET",
                reason: format!("must be at least {MIN_SECRET_BYTES} bytes"),
            });
        }
        if token_ttl_secs <= 0 {
            return Err(ConfigError::Invalid {
                name: "JWT_TOKEN_TTL_SECS",
                reason: "must be positive".to_string(),
            });
        }
        if token_ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(ConfigError::Invalid {
                name: "JWT_TOKEN_TTL_SECS",
                reason: format!("must be at most {MAX_TOKEN_TTL_SECS} seconds"),
            });
        }
        Ok(Self {
            secret,
            token_ttl_secs,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = match lookup("JWT_SECRET") {
            Some(secret) => secret,
            None => {
                let path = lookup("JWT_SECRET_FILE").ok_or(ConfigError::Missing("JWT_SECRET"))?;
                std::fs::read_to_string(&path)
                    .map_err(|source| ConfigError::SecretFile { path, source })?
            }
        };

        let token_ttl_secs = match lookup("JWT_TOKEN_TTL_SECS") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "JWT_TOKEN_TTL_SECS",
                reason: format!("expected an integer, got {raw:?}"),
            })?,
            None => DEFAULT_TOKEN_TTL_SECS,
        };

        Self::new(secret, token_ttl_secs)
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[redacted]")
            .field("token_ttl_secs", &self.token_ttl_secs)
            .finish()
    }
}
