use tracing::instrument;

use gradebook_core::AppError;
use gradebook_models::{Role, UserResponse};

use crate::state::AppState;

pub struct UserService;

impl UserService {
    #[instrument(skip(state))]
    pub async fn list_users(
        state: &AppState,
        role: Option<Role>,
    ) -> Result<Vec<UserResponse>, AppError> {
        let users = state.users.list(role).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    #[instrument(skip(state))]
    pub async fn get_user(state: &AppState, id: i64) -> Result<UserResponse, AppError> {
        let user = state.users.find_by_id(id).await?;
        Ok(user.into())
    }
}
