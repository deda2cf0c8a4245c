use crate::auth::application::ports::incoming::use_cases::{LoginCommand, LoginError};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "ann@example.com")]
    pub email: String,

    #[schema(example = "password1")]
    pub password: String,
}

/// User login
///
/// Authenticates with email and password and returns a bearer token valid for
/// up to 24 hours. Unverified accounts are refused.
#[utoipa::path(
    post,
    path = "/user/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued"),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Wrong password"),
        (status = 403, description = "Email not verified"),
        (status = 404, description = "No account with that email")
    )
)]
#[post("/user/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match LoginCommand::new(req.email, req.password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };
    let email = command.email().to_string();

    match data.auth.login.execute(command).await {
        Ok(result) => {
            info!(user_id = %result.user.id, "User logged in");
            ApiResponse::success_with_message("Login successful", result)
        }

        Err(LoginError::UserNotFound) => {
            warn!(email = %email, "Login for unknown email");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(LoginError::InvalidCredentials) => {
            warn!(email = %email, "Login with wrong password");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::EmailNotVerified) => ApiResponse::forbidden(
            "EMAIL_NOT_VERIFIED",
            "Please verify your email before logging in",
        ),

        Err(e) => {
            error!(email = %email, error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
