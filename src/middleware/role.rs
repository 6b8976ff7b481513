//! Role-based authorization middleware for Axum.
//!
//! A [`RoleGate`] pairs application state with the set of roles allowed on a
//! route. Gates are built while the router is assembled, so an empty
//! allow-set fails at startup instead of on the first request.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use crate::middleware::role::{RoleGate, protect};
//!
//! let staff = RoleGate::new(state.clone(), [Role::Admin, Role::Lecturer])?;
//! let router = Router::new().route("/users", protect(get(list_users), staff));
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::{self, Next},
    response::Response,
    routing::MethodRouter,
};
use tracing::debug;

use gradebook_config::ConfigError;
use gradebook_core::AppError;
use gradebook_models::{Role, User};

use crate::middleware::auth::authenticate;
use crate::middleware::context;
use crate::state::AppState;

#[derive(Clone)]
pub struct RoleGate {
    state: AppState,
    allowed: Arc<[Role]>,
}

impl RoleGate {
    /// Builds a gate for `roles`. Duplicates are dropped; an empty set is a
    /// configuration error.
    pub fn new(
        state: AppState,
        roles: impl IntoIterator<Item = Role>,
    ) -> Result<Self, ConfigError> {
        let mut allowed: Vec<Role> = Vec::new();
        for role in roles {
            if !allowed.contains(&role) {
                allowed.push(role);
            }
        }

        if allowed.is_empty() {
            return Err(ConfigError::EmptyAllowSet);
        }

        Ok(Self {
            state,
            allowed: allowed.into(),
        })
    }

    pub fn allowed(&self) -> &[Role] {
        &self.allowed
    }

    /// Authenticates the request and checks the caller's role.
    pub async fn check(&self, headers: &HeaderMap) -> Result<User, AppError> {
        let user = authenticate(headers, &self.state).await?;
        authorize(&user, &self.allowed)?;
        Ok(user)
    }
}

impl std::fmt::Debug for RoleGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleGate")
            .field("allowed", &self.allowed)
            .finish_non_exhaustive()
    }
}

/// Fails with 403 unless the user's role is in `allowed`.
pub fn authorize(user: &User, allowed: &[Role]) -> Result<(), AppError> {
    if allowed.contains(&user.role) {
        return Ok(());
    }

    debug!(
        user_id = user.id,
        role = %user.role,
        allowed = ?allowed,
        "Role not permitted on route"
    );
    Err(AppError::forbidden("forbidden"))
}

/// Middleware body: on success the identity is attached to the request and
/// the wrapped handler runs; otherwise the error is the response.
pub async fn require_roles(
    State(gate): State<RoleGate>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = gate.check(req.headers()).await?;
    context::attach(&mut req, user);
    Ok(next.run(req).await)
}

/// Wraps a route so it only runs for callers holding one of the gate's roles.
pub fn protect(route: MethodRouter<AppState>, gate: RoleGate) -> MethodRouter<AppState> {
    route.route_layer(middleware::from_fn_with_state(gate, require_roles))
}
