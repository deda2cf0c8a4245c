use async_trait::async_trait;

use super::validation::{self, EmailProblem};

#[derive(Debug, Clone)]
pub struct ResendOtpCommand {
    email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResendOtpCommandError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmail,
}

impl ResendOtpCommand {
    pub fn new(email: String) -> Result<Self, ResendOtpCommandError> {
        let email = validation::normalize_email(&email).map_err(|e| match e {
            EmailProblem::Empty => ResendOtpCommandError::EmptyEmail,
            EmailProblem::Invalid => ResendOtpCommandError::InvalidEmail,
        })?;
        Ok(Self { email })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResendOtpError {
    #[error("User not found")]
    UserNotFound,

    #[error("Email is already verified")]
    AlreadyVerified,

    #[error("Failed to send verification email: {0}")]
    EmailDeliveryFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ResendOtpUseCase: Send + Sync {
    async fn execute(&self, command: ResendOtpCommand) -> Result<(), ResendOtpError>;
}
