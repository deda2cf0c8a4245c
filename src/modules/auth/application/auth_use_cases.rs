use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    GetProfileUseCase, LoginUserUseCase, RegisterUserUseCase, RequestPasswordResetUseCase,
    ResendOtpUseCase, ResetPasswordUseCase, UpdateNotificationSettingsUseCase,
    UpdateProfileUseCase, VerifyOtpUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub verify_otp: Arc<dyn VerifyOtpUseCase + Send + Sync>,
    pub resend_otp: Arc<dyn ResendOtpUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub request_password_reset: Arc<dyn RequestPasswordResetUseCase + Send + Sync>,
    pub reset_password: Arc<dyn ResetPasswordUseCase + Send + Sync>,
    pub get_profile: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub update_notifications: Arc<dyn UpdateNotificationSettingsUseCase + Send + Sync>,
}
