//! # Gradebook Config
//!
//! Configuration types for the Gradebook API, loaded from environment
//! variables at startup:
//!
//! - [`jwt`]: Token signing secret and token lifetime
//! - [`server`]: Listener address and log directory
//! - [`database`]: Optional PostgreSQL connection settings
//!
//! Loading fails with [`ConfigError`] instead of falling back to unsafe
//! defaults; in particular there is no built-in signing secret.
//!
//! # Example
//!
//! ```ignore
//! use gradebook_config::{DatabaseConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let server_config = ServerConfig::from_env()?;
//! let database_config = DatabaseConfig::from_env()?;
//! ```

pub mod database;
pub mod error;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use jwt::{JwtConfig, MAX_TOKEN_TTL_SECS};
pub use server::ServerConfig;
