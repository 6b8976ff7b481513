use tokio::task;
use tracing::{info, instrument, warn};

use gradebook_core::{AppError, hash_password, verify_against_placeholder, verify_password};
use gradebook_db::StoreError;
use gradebook_models::{LoginRequest, LoginResponse, NewUser, Role, SignupRequest, User};

use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "invalid credentials";

pub struct AuthService;

impl AuthService {
    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn signup(state: &AppState, dto: SignupRequest) -> Result<User, AppError> {
        let role: Role = dto.role.parse().map_err(AppError::bad_request)?;

        // bcrypt is CPU-bound; keep it off the async workers.
        let password = dto.password;
        let password_hash = task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(AppError::internal)??;

        let user = state
            .users
            .create(NewUser {
                name: dto.name,
                email: dto.email,
                role,
                password_hash,
            })
            .await?;

        info!(user_id = user.id, role = %user.role, "User registered");
        Ok(user)
    }

    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn login(state: &AppState, dto: LoginRequest) -> Result<LoginResponse, AppError> {
        let user = match state.users.find_by_email(&dto.email).await {
            Ok(user) => user,
            Err(StoreError::NotFound) => {
                // Same bcrypt work as a wrong password, so timing does not
                // reveal whether the account exists.
                let password = dto.password;
                task::spawn_blocking(move || verify_against_placeholder(&password))
                    .await
                    .map_err(AppError::internal)??;
                warn!("Login failed: unknown account");
                return Err(AppError::unauthorized(INVALID_CREDENTIALS));
            }
            Err(e) => return Err(e.into()),
        };

        let password = dto.password;
        let stored_hash = user.password_hash.clone();
        let is_valid = task::spawn_blocking(move || verify_password(&password, &stored_hash))
            .await
            .map_err(AppError::internal)??;

        if !is_valid {
            warn!(user_id = user.id, "Login failed: wrong password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        let token = state.tokens.issue(&user.email)?;
        info!(user_id = user.id, "Token issued");

        Ok(LoginResponse {
            token,
            token_type: "Bearer".to_string(),
            expires_in: state.tokens.ttl().num_seconds(),
            user: user.into(),
        })
    }
}
