//! # Gradebook DB
//!
//! The user store: the lookup the authorization middleware uses to turn a
//! token subject into a full [`User`], plus the writes signup needs.
//!
//! - [`UserStore`]: the store contract, object-safe so it can live in
//!   application state as `Arc<dyn UserStore>`
//! - [`memory`]: [`MemoryUserStore`], backed by a tokio `RwLock`
//! - [`postgres`]: [`PgUserStore`], backed by a SQLx PostgreSQL pool
//!
//! # Example
//!
//! ```ignore
//! use gradebook_db::{MemoryUserStore, UserStore};
//!
//! let store = MemoryUserStore::new();
//! let user = store.find_by_email("admin@example.com").await?;
//! ```

use async_trait::async_trait;
use thiserror::Error;

use gradebook_core::AppError;
use gradebook_models::{NewUser, Role, User};

pub mod memory;
pub mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::{PgUserStore, init_db_pool};

// Re-export PgPool for convenience
pub use sqlx::PgPool;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user not found")]
    NotFound,
    #[error("email already registered: {0}")]
    Duplicate(String),
    #[error("user store failure: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Backend(other.to_string()),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AppError::not_found(err),
            StoreError::Duplicate(_) => AppError::conflict(err),
            StoreError::Backend(_) => AppError::internal(err),
        }
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<User, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<User, StoreError>;

    /// Fails with [`StoreError::Duplicate`] if the email is taken.
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError>;

    /// All users, optionally filtered by role, ordered by id.
    async fn list(&self, role: Option<Role>) -> Result<Vec<User>, StoreError>;
}
