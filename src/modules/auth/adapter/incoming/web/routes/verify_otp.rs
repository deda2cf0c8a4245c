use crate::auth::application::ports::incoming::use_cases::{
    VerifyOtpCommand, VerifyOtpCommandError, VerifyOtpError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct VerifyOtpRequest {
    #[schema(example = "ann@example.com")]
    pub email: String,

    /// The 6-digit code from the verification email
    #[schema(example = "482913")]
    pub otp: String,
}

fn map_verify_error(err: VerifyOtpError, email: &str) -> HttpResponse {
    match err {
        VerifyOtpError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),

        VerifyOtpError::AlreadyVerified => {
            ApiResponse::bad_request("ALREADY_VERIFIED", "Email is already verified")
        }

        VerifyOtpError::MissingOtp => ApiResponse::bad_request(
            "OTP_NOT_FOUND",
            "No verification code on record, request a new one",
        ),

        VerifyOtpError::OtpExpired => {
            ApiResponse::bad_request("OTP_EXPIRED", "Verification code has expired")
        }

        VerifyOtpError::OtpMismatch => {
            warn!(email = %email, "Wrong verification code");
            ApiResponse::bad_request("INVALID_OTP", "Invalid verification code")
        }

        VerifyOtpError::RepositoryError(e) => {
            error!(email = %email, error = %e, "Failed to verify email");
            ApiResponse::internal_error()
        }
    }
}

/// Confirm the emailed code and activate the account
#[utoipa::path(
    post,
    path = "/user/verify-otp",
    tag = "auth",
    request_body = VerifyOtpRequest,
    responses(
        (status = 200, description = "Email verified"),
        (status = 400, description = "Code invalid, expired or already used"),
        (status = 404, description = "User not found")
    )
)]
#[post("/user/verify-otp")]
pub async fn verify_otp_handler(
    req: web::Json<VerifyOtpRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let email = req.email.clone();

    let command = match VerifyOtpCommand::new(req.email, req.otp) {
        Ok(cmd) => cmd,
        Err(e) => {
            let code = match e {
                VerifyOtpCommandError::EmptyEmail | VerifyOtpCommandError::InvalidEmail => {
                    "INVALID_EMAIL"
                }
                VerifyOtpCommandError::EmptyOtp | VerifyOtpCommandError::InvalidOtpFormat => {
                    "INVALID_OTP"
                }
            };
            return ApiResponse::bad_request(code, &e.to_string());
        }
    };

    match data.auth.verify_otp.execute(command).await {
        Ok(profile) => {
            info!(user_id = %profile.id, "Email verified");
            ApiResponse::success_with_message("Email verified successfully", profile)
        }
        Err(e) => map_verify_error(e, &email),
    }
}
