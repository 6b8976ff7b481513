//! Issuing and validating session tokens.
//!
//! [`TokenService`] is built once at startup from [`JwtConfig`] and shared
//! through application state. It holds the HS256 keys derived from the
//! secret; the secret itself is not kept and is never logged.
//!
//! Validation failures are deliberately uniform: a malformed token, a bad
//! signature and an expired token all return [`TokenError::Invalid`]. The
//! actual cause is only recorded in a debug log.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;
use tracing::debug;

use gradebook_config::{JwtConfig, MAX_TOKEN_TTL_SECS};
use gradebook_core::AppError;

use crate::claims::Claims;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid token")]
    Invalid,
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
    #[error("token expiry out of range")]
    ExpiryOutOfRange,
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Invalid => AppError::unauthorized("invalid token"),
            TokenError::Signing(_) | TokenError::ExpiryOutOfRange => AppError::internal(err),
        }
    }
}

/// Internal classification of a rejected token, for logs only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Malformed,
    BadSignature,
    Expired,
}

impl From<&ErrorKind> for Rejection {
    fn from(kind: &ErrorKind) -> Self {
        match kind {
            ErrorKind::InvalidSignature => Rejection::BadSignature,
            ErrorKind::ExpiredSignature => Rejection::Expired,
            _ => Rejection::Malformed,
        }
    }
}

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            // The config already enforces this range; clamping keeps a
            // hand-built config from panicking here.
            ttl: Duration::seconds(config.token_ttl_secs.clamp(1, MAX_TOKEN_TTL_SECS)),
        }
    }

    /// Default lifetime of issued tokens.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issues a token for `subject` with the configured lifetime.
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.issue_with_ttl(subject, self.ttl)
    }

    pub fn issue_with_ttl(&self, subject: &str, ttl: Duration) -> Result<String, TokenError> {
        self.issue_at(subject, Utc::now(), ttl)
    }

    /// Issues a token as if it were created at `issued_at`.
    pub fn issue_at(
        &self,
        subject: &str,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let expires_at = issued_at
            .checked_add_signed(ttl)
            .ok_or(TokenError::ExpiryOutOfRange)?;

        let claims = Claims {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }

    /// Verifies signature and expiry and returns the embedded claims.
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(cause = ?Rejection::from(e.kind()), "Token rejected");
                TokenError::Invalid
            })?;

        // The decoder still accepts a token in its final second.
        if claims.is_expired_at(Utc::now().timestamp()) {
            debug!(cause = ?Rejection::Expired, "Token rejected");
            return Err(TokenError::Invalid);
        }

        Ok(claims)
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &"HS256")
            .field("ttl_secs", &self.ttl.num_seconds())
            .finish_non_exhaustive()
    }
}
