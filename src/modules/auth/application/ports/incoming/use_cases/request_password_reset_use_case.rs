use async_trait::async_trait;

use super::validation::{self, EmailProblem};

#[derive(Debug, Clone)]
pub struct RequestPasswordResetCommand {
    email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestPasswordResetCommandError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmail,
}

impl RequestPasswordResetCommand {
    pub fn new(email: String) -> Result<Self, RequestPasswordResetCommandError> {
        let email = validation::normalize_email(&email).map_err(|e| match e {
            EmailProblem::Empty => RequestPasswordResetCommandError::EmptyEmail,
            EmailProblem::Invalid => RequestPasswordResetCommandError::InvalidEmail,
        })?;
        Ok(Self { email })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RequestPasswordResetError {
    #[error("User not found")]
    UserNotFound,

    #[error("Failed to send reset email: {0}")]
    EmailDeliveryFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RequestPasswordResetUseCase: Send + Sync {
    async fn execute(
        &self,
        command: RequestPasswordResetCommand,
    ) -> Result<(), RequestPasswordResetError>;
}
