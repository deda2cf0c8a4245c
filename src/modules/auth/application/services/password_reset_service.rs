use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::auth::application::{
    domain::reset_token::{hash_token, PasswordResetTicket},
    ports::{
        incoming::use_cases::{
            RequestPasswordResetCommand, RequestPasswordResetError, RequestPasswordResetUseCase,
            ResetPasswordCommand, ResetPasswordError, ResetPasswordUseCase,
        },
        outgoing::{PasswordHasher, UserQuery, UserRepository, UserRepositoryError},
    },
};
use crate::email::application::ports::outgoing::{EmailRecipient, UserEmailNotifier};

//
// ──────────────────────────────────────────────────────────
// Request reset (forgot password)
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct RequestPasswordResetService<R, Q>
where
    R: UserRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    repository: R,
    query: Q,
    emails: Arc<dyn UserEmailNotifier + Send + Sync>,
}

impl<R, Q> RequestPasswordResetService<R, Q>
where
    R: UserRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q, emails: Arc<dyn UserEmailNotifier + Send + Sync>) -> Self {
        Self {
            repository,
            query,
            emails,
        }
    }
}

#[async_trait]
impl<R, Q> RequestPasswordResetUseCase for RequestPasswordResetService<R, Q>
where
    R: UserRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        command: RequestPasswordResetCommand,
    ) -> Result<(), RequestPasswordResetError> {
        let user = self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| RequestPasswordResetError::RepositoryError(e.to_string()))?
            .ok_or(RequestPasswordResetError::UserNotFound)?;

        let ticket = PasswordResetTicket::issue(Utc::now());

        self.repository
            .store_password_reset(user.id, &ticket.token_hash, ticket.expires_at)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => RequestPasswordResetError::UserNotFound,
                other => RequestPasswordResetError::RepositoryError(other.to_string()),
            })?;

        self.emails
            .send_password_reset_email(&EmailRecipient::from(&user), &ticket.token)
            .await
            .map_err(|e| RequestPasswordResetError::EmailDeliveryFailed(e.to_string()))?;

        tracing::info!(user_id = %user.id, "Password reset requested");
        Ok(())
    }
}

//
// ──────────────────────────────────────────────────────────
// Reset password with token
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct ResetPasswordService<R, Q>
where
    R: UserRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    repository: R,
    query: Q,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R, Q> ResetPasswordService<R, Q>
where
    R: UserRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q, hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            repository,
            query,
            hasher,
        }
    }
}

#[async_trait]
impl<R, Q> ResetPasswordUseCase for ResetPasswordService<R, Q>
where
    R: UserRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, command: ResetPasswordCommand) -> Result<(), ResetPasswordError> {
        let user = self
            .query
            .find_by_reset_token_hash(&hash_token(command.token()))
            .await
            .map_err(|e| ResetPasswordError::RepositoryError(e.to_string()))?
            .ok_or(ResetPasswordError::InvalidOrExpiredToken)?;

        match user.password_reset_expires_at {
            Some(expires_at) if Utc::now() < expires_at => {}
            _ => return Err(ResetPasswordError::InvalidOrExpiredToken),
        }

        let new_hash = self
            .hasher
            .hash_password(command.new_password())
            .await
            .map_err(|e| ResetPasswordError::HashingFailed(e.to_string()))?;

        self.repository
            .reset_password(user.id, &new_hash)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ResetPasswordError::InvalidOrExpiredToken,
                other => ResetPasswordError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(user_id = %user.id, "Password reset completed");
        Ok(())
    }
}
