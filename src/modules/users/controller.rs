use axum::Json;
use axum::extract::{
    Path, Query, State,
    rejection::{PathRejection, QueryRejection},
};
use tracing::instrument;

use gradebook_core::AppError;
use gradebook_models::{UserListQuery, UserResponse};

use crate::middleware::context::CurrentUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;

use super::service::UserService;

/// Get the authenticated user's own record
#[utoipa::path(
    get,
    path = "/me",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip_all, fields(user_id = current.id))]
pub async fn get_me(current: CurrentUser) -> Json<UserResponse> {
    Json(UserResponse::from(&*current))
}

/// List every registered user (admin only)
#[utoipa::path(
    get,
    path = "/admin/users",
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip_all, fields(user_id = current.id))]
pub async fn get_all_users(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = UserService::list_users(&state, None).await?;
    Ok(Json(users))
}

/// List users, optionally filtered by role (admins and lecturers)
#[utoipa::path(
    get,
    path = "/users",
    params(
        ("role" = Option<String>, Query, description = "One of student, lecturer, admin")
    ),
    responses(
        (status = 200, description = "Matching users", body = Vec<UserResponse>),
        (status = 400, description = "Unknown role filter", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is neither admin nor lecturer", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip_all, fields(user_id = current.id))]
pub async fn get_users_by_role(
    State(state): State<AppState>,
    current: CurrentUser,
    query: Result<Query<UserListQuery>, QueryRejection>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let Query(query) = query.map_err(|_| {
        AppError::bad_request(anyhow::anyhow!(
            "role must be one of student, lecturer, admin"
        ))
    })?;

    let users = UserService::list_users(&state, query.role).await?;
    Ok(Json(users))
}

/// Get one user by id (admins and lecturers)
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "The user", body = UserResponse),
        (status = 400, description = "Id is not an integer", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is neither admin nor lecturer", body = ErrorResponse),
        (status = 404, description = "No user with this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip_all, fields(user_id = current.id))]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    current: CurrentUser,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<UserResponse>, AppError> {
    let Path(id) =
        id.map_err(|_| AppError::bad_request(anyhow::anyhow!("id must be an integer")))?;

    let user = UserService::get_user(&state, id).await?;
    Ok(Json(user))
}
