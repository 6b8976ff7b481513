use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use gradebook_models::{LoginRequest, LoginResponse, Role, SignupRequest, UserResponse};

use crate::modules::auth::controller::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::signup_user,
        crate::modules::auth::controller::login_user,
        crate::modules::users::controller::get_me,
        crate::modules::users::controller::get_all_users,
        crate::modules::users::controller::get_users_by_role,
        crate::modules::users::controller::get_user_by_id,
    ),
    components(
        schemas(
            Role,
            UserResponse,
            SignupRequest,
            LoginRequest,
            LoginResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Signup and login"),
        (name = "Users", description = "Role-gated user endpoints")
    ),
    info(
        title = "Gradebook API",
        version = "0.1.0",
        description = "Grade system API with bearer-token authentication and role-gated routes.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
