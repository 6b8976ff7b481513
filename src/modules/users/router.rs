use axum::{Router, routing::get};

use gradebook_config::ConfigError;
use gradebook_models::Role;

use crate::middleware::role::{RoleGate, protect};
use crate::state::AppState;

use super::controller::{get_all_users, get_me, get_user_by_id, get_users_by_role};

pub fn init_users_router(state: &AppState) -> Result<Router<AppState>, ConfigError> {
    let any_role = RoleGate::new(state.clone(), Role::ALL)?;
    let admin_only = RoleGate::new(state.clone(), [Role::Admin])?;
    let staff = RoleGate::new(state.clone(), [Role::Admin, Role::Lecturer])?;

    Ok(Router::new()
        .route("/me", protect(get(get_me), any_role))
        .route("/admin/users", protect(get(get_all_users), admin_only))
        .route("/users", protect(get(get_users_by_role), staff.clone()))
        .route("/users/{id}", protect(get(get_user_by_id), staff)))
}
