use async_trait::async_trait;
use serde::Serialize;

use super::validation::{self, EmailProblem};
use crate::auth::application::domain::entities::UserProfile;

//
// ──────────────────────────────────────────────────────────
// Login Command
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct LoginCommand {
    email: String,
    password: String,
}

impl std::fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginCommandError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginCommand {
    pub fn new(email: String, password: String) -> Result<Self, LoginCommandError> {
        let email = validation::normalize_email(&email).map_err(|e| match e {
            EmailProblem::Empty => LoginCommandError::EmptyEmail,
            EmailProblem::Invalid => LoginCommandError::InvalidEmail,
        })?;

        if password.trim().is_empty() {
            return Err(LoginCommandError::EmptyPassword);
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

//
// ──────────────────────────────────────────────────────────
// Result / Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserProfile,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("User not found")]
    UserNotFound,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email is not verified")]
    EmailNotVerified,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<LoginResult, LoginError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_masks_password() {
        let cmd = LoginCommand::new("a@x.com".into(), "hunter2hunter2".into()).unwrap();
        assert!(!format!("{:?}", cmd).contains("hunter2"));
    }

    #[test]
    fn rejects_blank_password() {
        assert_eq!(
            LoginCommand::new("a@x.com".into(), "  ".into()).unwrap_err(),
            LoginCommandError::EmptyPassword
        );
    }
}
