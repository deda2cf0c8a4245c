use crate::auth::application::ports::incoming::use_cases::{ResendOtpCommand, ResendOtpError};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct ResendOtpRequest {
    #[schema(example = "ann@example.com")]
    pub email: String,
}

/// Issue a fresh verification code
///
/// The previous code stops working. Fails when the email cannot be delivered.
#[utoipa::path(
    post,
    path = "/user/resend-otp",
    tag = "auth",
    request_body = ResendOtpRequest,
    responses(
        (status = 200, description = "New code sent"),
        (status = 400, description = "Invalid email or already verified"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Email could not be sent")
    )
)]
#[post("/user/resend-otp")]
pub async fn resend_otp_handler(
    req: web::Json<ResendOtpRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match ResendOtpCommand::new(req.into_inner().email) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("INVALID_EMAIL", &e.to_string()),
    };

    match data.auth.resend_otp.execute(command.clone()).await {
        Ok(()) => ApiResponse::ok_message("Verification code sent"),

        Err(ResendOtpError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(ResendOtpError::AlreadyVerified) => {
            ApiResponse::bad_request("ALREADY_VERIFIED", "Email is already verified")
        }

        Err(e) => {
            error!(email = %command.email(), error = %e, "Failed to resend verification code");
            ApiResponse::internal_error()
        }
    }
}
