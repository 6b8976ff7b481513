use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{login_user, signup_user};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup_user))
        .route("/login", post(login_user))
}
