mod get_profile_use_case;
mod login_user_use_case;
mod register_user_use_case;
mod request_password_reset_use_case;
mod resend_otp_use_case;
mod reset_password_use_case;
mod update_notification_settings_use_case;
mod update_profile_use_case;
pub(crate) mod validation;
mod verify_otp_use_case;

pub use get_profile_use_case::{GetProfileError, GetProfileUseCase};
pub use login_user_use_case::{
    LoginCommand, LoginCommandError, LoginError, LoginResult, LoginUserUseCase,
};
pub use register_user_use_case::{
    RegisterUserCommand, RegisterUserCommandError, RegisterUserError, RegisterUserUseCase,
    RegisteredUser,
};
pub use request_password_reset_use_case::{
    RequestPasswordResetCommand, RequestPasswordResetCommandError, RequestPasswordResetError,
    RequestPasswordResetUseCase,
};
pub use resend_otp_use_case::{
    ResendOtpCommand, ResendOtpCommandError, ResendOtpError, ResendOtpUseCase,
};
pub use reset_password_use_case::{
    ResetPasswordCommand, ResetPasswordCommandError, ResetPasswordError, ResetPasswordUseCase,
};
pub use update_notification_settings_use_case::{
    UpdateNotificationSettingsError, UpdateNotificationSettingsUseCase,
};
pub use update_profile_use_case::{
    ProfileImages, UpdateProfileCommand, UpdateProfileCommandError, UpdateProfileError,
    UpdateProfileInput, UpdateProfileUseCase,
};
pub use verify_otp_use_case::{
    VerifyOtpCommand, VerifyOtpCommandError, VerifyOtpError, VerifyOtpUseCase,
};
