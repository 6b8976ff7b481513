use axum::http::{HeaderMap, header};
use tracing::{debug, warn};

use gradebook_core::AppError;
use gradebook_db::StoreError;
use gradebook_models::User;

use crate::state::AppState;

const BEARER_SCHEME: &str = "bearer";

/// Splits an `Authorization` value into its token.
///
/// The value must be exactly two space-separated parts with a scheme equal to
/// `bearer`, ignoring case.
pub fn parse_bearer(value: &str) -> Option<&str> {
    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case(BEARER_SCHEME) => {
            Some(token)
        }
        _ => None,
    }
}

/// Resolves the caller's identity from request headers.
///
/// Runs header extraction, scheme parsing, token validation and user lookup,
/// stopping at the first failure. A missing account is reported exactly like
/// any other unauthenticated request; only a store outage becomes a 5xx.
pub async fn authenticate(headers: &HeaderMap, state: &AppState) -> Result<User, AppError> {
    let value = headers.get(header::AUTHORIZATION).ok_or_else(|| {
        debug!("Rejected request without authorization header");
        AppError::unauthorized("missing authorization header")
    })?;

    let token = value.to_str().ok().and_then(parse_bearer).ok_or_else(|| {
        debug!("Rejected malformed authorization header");
        AppError::unauthorized("invalid authorization header")
    })?;

    let claims = state
        .tokens
        .validate(token)
        .map_err(|_| AppError::unauthorized("invalid token"))?;

    match state.users.find_by_email(&claims.sub).await {
        Ok(user) => Ok(user),
        Err(StoreError::NotFound) => {
            debug!("Token subject has no matching account");
            Err(AppError::unauthorized("user not found"))
        }
        Err(e) => {
            warn!(error = %e, "User store failed while resolving identity");
            Err(AppError::internal(e))
        }
    }
}
