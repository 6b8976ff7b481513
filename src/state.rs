use std::sync::Arc;

use gradebook_auth::TokenService;
use gradebook_db::UserStore;

/// Process-wide state shared by every request.
///
/// Everything in here is read-only after startup. The user store handles its
/// own synchronisation.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub tokens: Arc<TokenService>,
    pub allowed_origins: Vec<String>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>, tokens: TokenService) -> Self {
        Self {
            users,
            tokens: Arc::new(tokens),
            allowed_origins: Vec::new(),
        }
    }

    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.allowed_origins = origins;
        self
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("tokens", &self.tokens)
            .field("allowed_origins", &self.allowed_origins)
            .finish_non_exhaustive()
    }
}
