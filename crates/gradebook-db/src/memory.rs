//! In-memory user store.
//!
//! Used when no `DATABASE_URL` is configured, and by the test suites.

use async_trait::async_trait;
use tokio::sync::RwLock;

use gradebook_models::{NewUser, Role, User};

use crate::{StoreError, UserStore};

#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<User, StoreError> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn find_by_id(&self, id: i64) -> Result<User, StoreError> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.email == new_user.email) {
            return Err(StoreError::Duplicate(new_user.email));
        }

        let id = users.last().map_or(1, |u| u.id + 1);
        let user = User {
            id,
            name: new_user.name,
            email: new_user.email,
            role: new_user.role,
            password_hash: new_user.password_hash,
        };
        users.push(user.clone());

        Ok(user)
    }

    async fn list(&self, role: Option<Role>) -> Result<Vec<User>, StoreError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .filter(|u| role.is_none_or(|r| u.role == r))
            .cloned()
            .collect())
    }
}
