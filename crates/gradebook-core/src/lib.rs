//! # Gradebook Core
//!
//! Core types shared by every Gradebook crate:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: Password strength policy, hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use gradebook_core::{AppError, hash_password, verify_password};
//!
//! let hash = hash_password("correct horse battery")?;
//! if !verify_password("correct horse battery", &hash)? {
//!     return Err(AppError::unauthorized("invalid credentials"));
//! }
//! ```

pub mod errors;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{
    PasswordError, hash_password, validate_password_strength, verify_against_placeholder,
    verify_password,
};
