//! JWT claim structure for session tokens.

use serde::{Deserialize, Serialize};

/// Claims embedded in a session token.
///
/// - `sub`: the account email, used to resolve the identity per request
/// - `iat`: issued-at, Unix seconds
/// - `exp`: expiry, Unix seconds; the token is valid while `now < exp`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}
