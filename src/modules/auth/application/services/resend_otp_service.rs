use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::auth::application::{
    domain::otp::OneTimePassword,
    ports::{
        incoming::use_cases::{ResendOtpCommand, ResendOtpError, ResendOtpUseCase},
        outgoing::{UserQuery, UserRepository, UserRepositoryError},
    },
};
use crate::email::application::ports::outgoing::{EmailRecipient, UserEmailNotifier};

#[derive(Clone)]
pub struct ResendOtpService<R, Q>
where
    R: UserRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    repository: R,
    query: Q,
    emails: Arc<dyn UserEmailNotifier + Send + Sync>,
}

impl<R, Q> ResendOtpService<R, Q>
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
impl<R, Q> ResendOtpUseCase for ResendOtpService<R, Q>
where
    R: UserRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, command: ResendOtpCommand) -> Result<(), ResendOtpError> {
        let user = self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| ResendOtpError::RepositoryError(e.to_string()))?
            .ok_or(ResendOtpError::UserNotFound)?;

        if user.is_email_verified {
            return Err(ResendOtpError::AlreadyVerified);
        }

        let otp = OneTimePassword::generate(Utc::now());

        self.repository
            .store_email_otp(user.id, &otp)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ResendOtpError::UserNotFound,
                other => ResendOtpError::RepositoryError(other.to_string()),
            })?;

        self.emails
            .send_otp_email(&EmailRecipient::from(&user), otp.code())
            .await
            .map_err(|e| ResendOtpError::EmailDeliveryFailed(e.to_string()))?;

        tracing::info!(user_id = %user.id, "Verification code resent");
        Ok(())
    }
}
