use async_trait::async_trait;

use crate::auth::application::domain::reset_token::MIN_PASSWORD_LEN;

#[derive(Clone)]
pub struct ResetPasswordCommand {
    token: String,
    new_password: String,
}

impl std::fmt::Debug for ResetPasswordCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResetPasswordCommand")
            .field("token", &"***")
            .field("new_password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResetPasswordCommandError {
    #[error("Reset token cannot be empty")]
    EmptyToken,

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
}

impl ResetPasswordCommand {
    pub fn new(token: String, new_password: String) -> Result<Self, ResetPasswordCommandError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ResetPasswordCommandError::EmptyToken);
        }

        if new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ResetPasswordCommandError::PasswordTooShort(MIN_PASSWORD_LEN));
        }

        Ok(Self {
            token: token.to_string(),
            new_password,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("Reset token is invalid or has expired")]
    InvalidOrExpiredToken,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ResetPasswordUseCase: Send + Sync {
    async fn execute(&self, command: ResetPasswordCommand) -> Result<(), ResetPasswordError>;
}
