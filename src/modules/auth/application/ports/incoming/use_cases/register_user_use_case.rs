use async_trait::async_trait;
use serde::Serialize;

use super::validation::{self, EmailProblem};
use crate::auth::application::domain::entities::{Gender, UserProfile};
use crate::media::application::domain::entities::ImageUpload;

//
// ──────────────────────────────────────────────────────────
// Register User Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    name: String,
    email: String,
    password: String,
    age: Option<i32>,
    gender: Option<Gender>,
    profile_image: Option<ImageUpload>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterUserCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password cannot be empty")]
    EmptyPassword,

    #[error("Age must be between 1 and 150")]
    InvalidAge,

    #[error("Gender must be male, female or other")]
    InvalidGender,
}

impl RegisterUserCommand {
    pub fn new(
        name: String,
        email: String,
        password: String,
        age: Option<i32>,
        gender: Option<String>,
        profile_image: Option<ImageUpload>,
    ) -> Result<Self, RegisterUserCommandError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegisterUserCommandError::EmptyName);
        }

        let email = validation::normalize_email(&email).map_err(|e| match e {
            EmailProblem::Empty => RegisterUserCommandError::EmptyEmail,
            EmailProblem::Invalid => RegisterUserCommandError::InvalidEmail,
        })?;

        if password.trim().is_empty() {
            return Err(RegisterUserCommandError::EmptyPassword);
        }

        if let Some(age) = age {
            if !validation::is_valid_age(age) {
                return Err(RegisterUserCommandError::InvalidAge);
            }
        }

        let gender = validation::parse_optional_gender(gender)
            .map_err(|_| RegisterUserCommandError::InvalidGender)?;

        Ok(Self {
            name: name.to_string(),
            email,
            password,
            age,
            gender,
            profile_image,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn age(&self) -> Option<i32> {
        self.age
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn take_profile_image(&mut self) -> Option<ImageUpload> {
        self.profile_image.take()
    }
}

//
// ──────────────────────────────────────────────────────────
// Result / Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct RegisteredUser {
    pub user: UserProfile,
    pub email_sent: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(
        &self,
        command: RegisterUserCommand,
    ) -> Result<RegisteredUser, RegisterUserError>;
}
