//! Authentication and role-based authorization.
//!
//! # Modules
//!
//! - [`auth`]: Bearer token extraction and identity resolution
//! - [`role`]: Role allow-sets ([`role::RoleGate`]) and the gating middleware
//! - [`context`]: The request-scoped slot carrying the resolved identity
//!
//! # Request Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::authenticate`] parses the header, validates the token and loads
//!    the user named by its subject
//! 3. [`role::authorize`] checks the user's role against the route allow-set
//! 4. The identity is attached to the request and the handler runs
//!
//! Any failure ends the request with 401 or 403 before the handler is called.
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::context::CurrentUser;
//! use crate::middleware::role::{RoleGate, protect};
//!
//! let admin_only = RoleGate::new(state.clone(), [Role::Admin])?;
//! let router = Router::new().route("/admin/users", protect(get(list_users), admin_only));
//!
//! async fn list_users(CurrentUser(user): CurrentUser) -> impl IntoResponse {
//!     // Only runs for admins
//! }
//! ```

pub mod auth;
pub mod context;
pub mod role;
