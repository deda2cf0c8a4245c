use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::auth::application::{
    domain::{
        entities::{User, UserProfile},
        otp::OneTimePassword,
    },
    ports::{
        incoming::use_cases::{
            RegisterUserCommand, RegisterUserError, RegisterUserUseCase, RegisteredUser,
        },
        outgoing::{NewUser, PasswordHasher, UserQuery, UserRepository, UserRepositoryError},
    },
};
use crate::email::application::ports::outgoing::{EmailRecipient, UserEmailNotifier};
use crate::media::application::services::ImageAttachmentService;

#[derive(Clone)]
pub struct RegisterUserService<R, Q>
where
    R: UserRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    repository: R,
    query: Q,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    emails: Arc<dyn UserEmailNotifier + Send + Sync>,
    images: ImageAttachmentService,
}

impl<R, Q> RegisterUserService<R, Q>
where
    R: UserRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        repository: R,
        query: Q,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        emails: Arc<dyn UserEmailNotifier + Send + Sync>,
        images: ImageAttachmentService,
    ) -> Self {
        Self {
            repository,
            query,
            hasher,
            emails,
            images,
        }
    }
}

#[async_trait]
impl<R, Q> RegisterUserUseCase for RegisterUserService<R, Q>
where
    R: UserRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        mut command: RegisterUserCommand,
    ) -> Result<RegisteredUser, RegisterUserError> {
        let existing = self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(RegisterUserError::EmailAlreadyExists);
        }

        let password_hash = self
            .hasher
            .hash_password(command.password())
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let profile_image_url = self
            .images
            .upload_or_skip(command.take_profile_image(), "profile")
            .await;

        let otp = OneTimePassword::generate(Utc::now());

        let user = self
            .repository
            .create_user(NewUser {
                name: command.name().to_string(),
                username: User::username_from_email(command.email()),
                email: command.email().to_string(),
                password_hash,
                age: command.age(),
                gender: command.gender(),
                profile_image_url,
                otp: otp.clone(),
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => RegisterUserError::EmailAlreadyExists,
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(user_id = %user.id, "User registered");

        let email_sent = match self
            .emails
            .send_otp_email(&EmailRecipient::from(&user), otp.code())
            .await
        {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(user_id = %user.id, error = %e, "Registration OTP email not sent");
                false
            }
        };

        Ok(RegisteredUser {
            user: UserProfile::from(user),
            email_sent,
        })
    }
}
