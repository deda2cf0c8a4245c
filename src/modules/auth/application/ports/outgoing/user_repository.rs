use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::domain::{
    entities::{Gender, User, UserId},
    otp::OneTimePassword,
};

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub profile_image_url: Option<String>,
    pub otp: OneTimePassword,
}

/// Only `Some` fields are written. `cover_image_url: Some(None)` clears the cover image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub about: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub profile_image_url: Option<String>,
    pub cover_image_url: Option<Option<String>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    async fn store_email_otp(
        &self,
        user_id: UserId,
        otp: &OneTimePassword,
    ) -> Result<(), UserRepositoryError>;

    /// Sets the verified flag and clears the OTP fields.
    async fn mark_email_verified(&self, user_id: UserId) -> Result<User, UserRepositoryError>;

    async fn store_password_reset(
        &self,
        user_id: UserId,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError>;

    /// Replaces the password hash and clears the reset token fields.
    async fn reset_password(
        &self,
        user_id: UserId,
        new_password_hash: &str,
    ) -> Result<(), UserRepositoryError>;

    async fn update_profile(
        &self,
        user_id: UserId,
        changes: ProfileChanges,
    ) -> Result<User, UserRepositoryError>;

    async fn set_email_notifications(
        &self,
        user_id: UserId,
        enabled: bool,
    ) -> Result<User, UserRepositoryError>;
}
