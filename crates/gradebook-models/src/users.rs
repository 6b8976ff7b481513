//! User domain models and DTOs.
//!
//! [`User`] is the identity record resolved on every authenticated request.
//! It never derives `Serialize`: handlers convert it into [`UserResponse`],
//! which carries no password hash.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

/// The closed set of system roles.
///
/// Stored and transmitted as lowercase strings. Parsing any other string
/// fails with [`UnknownRole`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Lecturer,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Lecturer, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Lecturer => "lecturer",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "lecturer" => Ok(Role::Lecturer),
            "admin" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password_hash: String,
}

/// Insert payload for the user store. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password_hash: String,
}

/// Public view of a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

/// Signup body. `role` stays a string here so an unknown value is reported
/// as a validation problem instead of a generic body rejection.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email is invalid"))]
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "email is invalid"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    /// Seconds until the token expires.
    pub expires_in: i64,
    pub user: UserResponse,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserListQuery {
    pub role: Option<Role>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::Lecturer,
            password_hash: "$2b$12$hash".to_string(),
        }
    }

    #[test]
    fn test_role_parse_known() {
        assert_eq!("student".parse::<Role>(), Ok(Role::Student));
        assert_eq!("lecturer".parse::<Role>(), Ok(Role::Lecturer));
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
    }

    #[test]
    fn test_role_parse_rejects_unknown() {
        assert_eq!(
            "superuser".parse::<Role>(),
            Err(UnknownRole("superuser".to_string()))
        );
        assert!("Admin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_display_round_trips() {
        for role in Role::ALL {
            assert_eq!(role.to_string().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Lecturer).unwrap(), r#""lecturer""#);
        assert!(serde_json::from_str::<Role>(r#""janitor""#).is_err());
    }

    #[test]
    fn test_user_response_has_no_hash() {
        let json = serde_json::to_string(&UserResponse::from(&sample_user())).unwrap();
        assert!(json.contains(r#""email":"ada@example.com""#));
        assert!(json.contains(r#""role":"lecturer""#));
        assert!(!json.contains("hash"));
    }

    #[test]
    fn test_signup_validation() {
        let ok = SignupRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "longenough".to_string(),
            role: "student".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad = SignupRequest {
            name: String::new(),
            email: "not-an-email".to_string(),
            ..ok
        };
        let errors = bad.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_user_list_query_role_filter() {
        let query: UserListQuery = serde_json::from_str(r#"{"role":"admin"}"#).unwrap();
        assert_eq!(query.role, Some(Role::Admin));

        let query: UserListQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.role, None);
    }
}
