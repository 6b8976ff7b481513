//! # Gradebook Auth
//!
//! Session tokens for the Gradebook API.
//!
//! - [`claims`]: The claim set carried by every token
//! - [`jwt`]: [`TokenService`], which issues and validates HS256 JWTs
//!
//! Tokens are stateless. A token is accepted while its signature verifies
//! against the process secret and the current time is before `exp`; expiry is
//! the only way a token stops working.
//!
//! # Example
//!
//! ```ignore
//! use gradebook_auth::TokenService;
//! use gradebook_config::JwtConfig;
//!
//! let tokens = TokenService::new(&JwtConfig::from_env()?);
//! let token = tokens.issue("admin@example.com")?;
//! let claims = tokens.validate(&token)?;
//! assert_eq!(claims.sub, "admin@example.com");
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{TokenError, TokenService};
