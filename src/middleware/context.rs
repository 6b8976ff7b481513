//! Request-scoped identity.
//!
//! The role gate stores the resolved [`User`] in the request's extensions
//! under [`Authenticated`], a type private to this module. Nothing outside
//! this module can insert, replace or shadow it; handlers only read it
//! through the [`CurrentUser`] extractor.

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
};

use gradebook_core::AppError;
use gradebook_models::User;

#[derive(Clone)]
struct Authenticated(Arc<User>);

/// Stores the identity for this request. The first identity attached wins.
pub(crate) fn attach(req: &mut Request, user: User) {
    let extensions = req.extensions_mut();
    if extensions.get::<Authenticated>().is_none() {
        extensions.insert(Authenticated(Arc::new(user)));
    }
}

/// The identity resolved by the role gate for the current request.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Arc<User>);

impl CurrentUser {
    pub fn from_parts(parts: &Parts) -> Option<Self> {
        parts
            .extensions
            .get::<Authenticated>()
            .map(|Authenticated(user)| CurrentUser(Arc::clone(user)))
    }
}

impl std::ops::Deref for CurrentUser {
    type Target = User;

    fn deref(&self) -> &User {
        &self.0
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Only reachable when a handler using CurrentUser was mounted without a gate.
        Self::from_parts(parts).ok_or_else(|| {
            AppError::internal(anyhow::anyhow!(
                "no authenticated identity on request; route is not protected"
            ))
        })
    }
}
