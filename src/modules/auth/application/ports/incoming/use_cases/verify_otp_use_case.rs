use async_trait::async_trait;

use super::validation::{self, EmailProblem};
use crate::auth::application::domain::{entities::UserProfile, otp::is_valid_otp_format};

//
// ──────────────────────────────────────────────────────────
// Verify OTP Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct VerifyOtpCommand {
    email: String,
    otp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyOtpCommandError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("OTP cannot be empty")]
    EmptyOtp,

    #[error("OTP must be exactly 6 digits")]
    InvalidOtpFormat,
}

impl VerifyOtpCommand {
    pub fn new(email: String, otp: String) -> Result<Self, VerifyOtpCommandError> {
        let email = validation::normalize_email(&email).map_err(|e| match e {
            EmailProblem::Empty => VerifyOtpCommandError::EmptyEmail,
            EmailProblem::Invalid => VerifyOtpCommandError::InvalidEmail,
        })?;

        let otp = otp.trim();
        if otp.is_empty() {
            return Err(VerifyOtpCommandError::EmptyOtp);
        }
        if !is_valid_otp_format(otp) {
            return Err(VerifyOtpCommandError::InvalidOtpFormat);
        }

        Ok(Self {
            email,
            otp: otp.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn otp(&self) -> &str {
        &self.otp
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum VerifyOtpError {
    #[error("User not found")]
    UserNotFound,

    #[error("Email is already verified")]
    AlreadyVerified,

    #[error("No OTP on record, request a new one")]
    MissingOtp,

    #[error("OTP has expired")]
    OtpExpired,

    #[error("Invalid OTP")]
    OtpMismatch,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait VerifyOtpUseCase: Send + Sync {
    async fn execute(&self, command: VerifyOtpCommand) -> Result<UserProfile, VerifyOtpError>;
}
