mod login_user_service;
mod password_reset_service;
mod profile_service;
mod register_user_service;
mod resend_otp_service;
mod verify_otp_service;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use login_user_service::LoginUserService;
pub use password_reset_service::{RequestPasswordResetService, ResetPasswordService};
pub use profile_service::{
    GetProfileService, UpdateNotificationSettingsService, UpdateProfileService,
};
pub use register_user_service::RegisterUserService;
pub use resend_otp_service::ResendOtpService;
pub use verify_otp_service::VerifyOtpService;
