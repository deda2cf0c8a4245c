mod fetch_profile;
mod login_user;
mod password_reset;
mod register_user;
mod resend_otp;
mod update_profile;
mod verify_otp;

// `__path_*` items are generated by `#[utoipa::path]` and picked up by `ApiDoc`.
pub use fetch_profile::{
    __path_get_own_profile_handler, __path_get_user_profile_handler, get_own_profile_handler,
    get_user_profile_handler, ProfileWithPosts,
};
pub use login_user::{__path_login_user_handler, login_user_handler, LoginRequest};
pub use password_reset::{
    __path_forgot_password_handler, __path_reset_password_handler, forgot_password_handler,
    reset_password_handler, ForgotPasswordRequest, ResetPasswordRequest,
};
pub use register_user::{__path_register_user_handler, register_user_handler, RegisterUserRequest};
pub use resend_otp::{__path_resend_otp_handler, resend_otp_handler, ResendOtpRequest};
pub use update_profile::{
    __path_update_notifications_handler, __path_update_profile_handler,
    update_notifications_handler, update_profile_handler, NotificationSettingsRequest,
    UpdateProfileRequest,
};
pub use verify_otp::{__path_verify_otp_handler, verify_otp_handler, VerifyOtpRequest};
