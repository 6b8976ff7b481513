//! # Gradebook Models
//!
//! Domain models and DTOs for the Gradebook API.
//!
//! - [`users`]: The [`User`] identity record, the closed [`Role`] set, and the
//!   signup/login request and response bodies.

pub mod users;

// Re-export commonly used types at crate root
pub use users::{
    LoginRequest, LoginResponse, NewUser, Role, SignupRequest, UnknownRole, User, UserListQuery,
    UserResponse,
};
