use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use gradebook::gradebook_auth::TokenService;
use gradebook::gradebook_config::JwtConfig;
use gradebook::gradebook_db::{MemoryUserStore, UserStore};
use gradebook::gradebook_models::{NewUser, Role, User};
use gradebook::state::AppState;
use http_body_util::BodyExt;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";

/// Placeholder for users that never log in with a password.
#[allow(dead_code)]
pub const UNUSED_HASH: &str = "$2b$12$C6UzMDM.H6dfI/f/IKcEeO6Qr5EmXyq8Ef6dgJDqrg1xtGjVw8mBu";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig::new(TEST_SECRET, 3600).unwrap()
}

pub fn test_token_service() -> TokenService {
    TokenService::new(&test_jwt_config())
}

pub fn test_state() -> (AppState, Arc<MemoryUserStore>) {
    let store = Arc::new(MemoryUserStore::new());
    let state = AppState::new(store.clone(), test_token_service());
    (state, store)
}

#[allow(dead_code)]
pub async fn create_test_user(store: &MemoryUserStore, email: &str, role: Role) -> User {
    store
        .create(NewUser {
            name: "Test User".to_string(),
            email: email.to_string(),
            role,
            password_hash: UNUSED_HASH.to_string(),
        })
        .await
        .unwrap()
}

#[allow(dead_code)]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[allow(dead_code)]
pub fn get_request(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header("authorization", value);
    }
    builder.body(Body::empty()).unwrap()
}

#[allow(dead_code)]
pub fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", uuid::Uuid::new_v4())
}
