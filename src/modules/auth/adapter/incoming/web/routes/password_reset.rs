use crate::auth::application::ports::incoming::use_cases::{
    RequestPasswordResetCommand, RequestPasswordResetError, ResetPasswordCommand,
    ResetPasswordCommandError, ResetPasswordError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct ForgotPasswordRequest {
    #[schema(example = "ann@example.com")]
    pub email: String,
}

#[derive(Deserialize, ToSchema)]
pub struct ResetPasswordRequest {
    /// At least 8 characters
    #[schema(example = "new-password1")]
    pub password: String,
}

/// Email a password reset link
///
/// The link carries a one-time token valid for one hour.
#[utoipa::path(
    post,
    path = "/user/forgot-password",
    tag = "auth",
    request_body = ForgotPasswordRequest,
    responses(
        (status = 200, description = "Reset email sent"),
        (status = 400, description = "Invalid email"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Email could not be sent")
    )
)]
#[post("/user/forgot-password")]
pub async fn forgot_password_handler(
    req: web::Json<ForgotPasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match RequestPasswordResetCommand::new(req.into_inner().email) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("INVALID_EMAIL", &e.to_string()),
    };

    match data.auth.request_password_reset.execute(command.clone()).await {
        Ok(()) => ApiResponse::ok_message("Password reset link sent to your email"),

        Err(RequestPasswordResetError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(e) => {
            error!(email = %command.email(), error = %e, "Password reset request failed");
            ApiResponse::internal_error()
        }
    }
}

/// Set a new password with a reset token
#[utoipa::path(
    post,
    path = "/user/reset-password/{token}",
    tag = "auth",
    params(("token" = String, Path, description = "Token from the reset link")),
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Password changed"),
        (status = 400, description = "Password too short, or token invalid or expired")
    )
)]
#[post("/user/reset-password/{token}")]
pub async fn reset_password_handler(
    path: web::Path<String>,
    req: web::Json<ResetPasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match ResetPasswordCommand::new(path.into_inner(), req.into_inner().password) {
        Ok(cmd) => cmd,
        Err(e @ ResetPasswordCommandError::PasswordTooShort(_)) => {
            return ApiResponse::bad_request("INVALID_PASSWORD", &e.to_string())
        }
        Err(e) => return ApiResponse::bad_request("INVALID_TOKEN", &e.to_string()),
    };

    match data.auth.reset_password.execute(command).await {
        Ok(()) => {
            info!("Password reset completed");
            ApiResponse::ok_message("Password has been reset successfully")
        }

        Err(ResetPasswordError::InvalidOrExpiredToken) => ApiResponse::bad_request(
            "INVALID_TOKEN",
            "Reset link is invalid or has expired",
        ),

        Err(e) => {
            error!(error = %e, "Password reset failed");
            ApiResponse::internal_error()
        }
    }
}
