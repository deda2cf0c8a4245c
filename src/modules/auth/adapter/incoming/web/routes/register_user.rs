use crate::auth::application::ports::incoming::use_cases::{
    RegisterUserCommand, RegisterUserCommandError, RegisterUserError,
};
use crate::media::adapter::incoming::web::{map_image_error, ImagePayload};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for user registration
#[derive(Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    #[schema(example = "Ann Lee")]
    pub name: String,

    #[schema(example = "ann@example.com")]
    pub email: String,

    #[schema(example = "password1")]
    pub password: String,

    #[serde(default)]
    #[schema(example = 30)]
    pub age: Option<i32>,

    /// male, female or other
    #[serde(default)]
    #[schema(example = "female")]
    pub gender: Option<String>,

    #[serde(default)]
    pub profile_image: Option<ImagePayload>,
}

fn map_command_error(err: RegisterUserCommandError, email: &str) -> HttpResponse {
    warn!(email = %email, error = %err, "Invalid registration input");

    let code = match err {
        RegisterUserCommandError::EmptyName => "INVALID_NAME",
        RegisterUserCommandError::EmptyEmail | RegisterUserCommandError::InvalidEmail => {
            "INVALID_EMAIL"
        }
        RegisterUserCommandError::EmptyPassword => "INVALID_PASSWORD",
        RegisterUserCommandError::InvalidAge => "INVALID_AGE",
        RegisterUserCommandError::InvalidGender => "INVALID_GENDER",
    };
    ApiResponse::bad_request(code, &err.to_string())
}

/// Register a new user
///
/// Creates an unverified account and emails a 6-digit code. The account cannot
/// log in until the code is confirmed through `/user/verify-otp`.
#[utoipa::path(
    post,
    path = "/user/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User created, `email_sent` tells whether the code went out"),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Email already registered"),
        (status = 500, description = "Internal server error")
    )
)]
#[post("/user/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let email = req.email.clone();

    let profile_image = match ImagePayload::decode_optional(req.profile_image, &data.upload_policy)
    {
        Ok(image) => image,
        Err(e) => return map_image_error(e),
    };

    let command = match RegisterUserCommand::new(
        req.name,
        req.email,
        req.password,
        req.age,
        req.gender,
        profile_image,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e, &email),
    };

    match data.auth.register.execute(command).await {
        Ok(registered) => {
            info!(
                user_id = %registered.user.id,
                email_sent = registered.email_sent,
                "User registered"
            );
            ApiResponse::created(registered)
        }

        Err(RegisterUserError::EmailAlreadyExists) => {
            warn!(email = %email, "Email already registered");
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email already registered")
        }

        Err(e) => {
            error!(email = %email, error = %e, "Unhandled registration error");
            ApiResponse::internal_error()
        }
    }
}
