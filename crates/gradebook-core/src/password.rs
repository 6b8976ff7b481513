//! Password hashing, verification and strength policy.
//!
//! Hashes are produced with bcrypt at [`DEFAULT_COST`]; the algorithm, cost,
//! salt and digest are encoded together in one opaque string. Verification
//! goes through bcrypt's own comparison, which is constant-time over the
//! digest bytes.

use std::sync::OnceLock;

use bcrypt::{DEFAULT_COST, hash, verify};
use thiserror::Error;

/// Minimum number of characters a password must have.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// bcrypt only reads the first 72 bytes of its input.
pub const MAX_PASSWORD_BYTES: usize = 72;

static PLACEHOLDER_HASH: OnceLock<String> = OnceLock::new();

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("password must not be empty")]
    Empty,
    #[error("password must be at least {min} characters long")]
    TooShort { min: usize },
    #[error("password must be at most {max} bytes long")]
    TooLong { max: usize },
    #[error("password hashing backend failed: {0}")]
    Backend(#[from] bcrypt::BcryptError),
}

impl PasswordError {
    /// True for policy violations, false for backend failures.
    pub fn is_weak_password(&self) -> bool {
        !matches!(self, PasswordError::Backend(_))
    }
}

/// Checks a candidate password against the strength policy.
pub fn validate_password_strength(password: &str) -> Result<(), PasswordError> {
    if password.is_empty() {
        return Err(PasswordError::Empty);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordError::TooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(PasswordError::TooLong {
            max: MAX_PASSWORD_BYTES,
        });
    }
    Ok(())
}

/// Validates and hashes a password for storage.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    validate_password_strength(password)?;
    Ok(hash(password, DEFAULT_COST)?)
}

/// Returns `Ok(false)` on mismatch and `Err` only if `hashed` is not a valid
/// bcrypt string.
pub fn verify_password(password: &str, hashed: &str) -> Result<bool, PasswordError> {
    Ok(verify(password, hashed)?)
}

/// Hash of a fixed string at [`DEFAULT_COST`], created on first use.
pub fn placeholder_hash() -> Result<&'static str, PasswordError> {
    if let Some(hashed) = PLACEHOLDER_HASH.get() {
        return Ok(hashed);
    }
    let hashed = hash("gradebook-placeholder-credential", DEFAULT_COST)?;
    Ok(PLACEHOLDER_HASH.get_or_init(|| hashed))
}

/// Runs a full verification against [`placeholder_hash`] and discards the
/// outcome. Login calls this for unknown accounts so they cost as much as a
/// wrong password.
pub fn verify_against_placeholder(password: &str) -> Result<(), PasswordError> {
    verify(password, placeholder_hash()?)?;
    Ok(())
}
