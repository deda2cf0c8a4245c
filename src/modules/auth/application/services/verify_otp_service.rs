use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::auth::application::{
    domain::{
        entities::UserProfile,
        otp::{check_otp, OtpRejection},
    },
    ports::{
        incoming::use_cases::{VerifyOtpCommand, VerifyOtpError, VerifyOtpUseCase},
        outgoing::{UserQuery, UserRepository, UserRepositoryError},
    },
};
use crate::email::application::ports::outgoing::{EmailRecipient, UserEmailNotifier};

#[derive(Clone)]
pub struct VerifyOtpService<R, Q>
where
    R: UserRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    repository: R,
    query: Q,
    emails: Arc<dyn UserEmailNotifier + Send + Sync>,
}

impl<R, Q> VerifyOtpService<R, Q>
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
impl<R, Q> VerifyOtpUseCase for VerifyOtpService<R, Q>
where
    R: UserRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, command: VerifyOtpCommand) -> Result<UserProfile, VerifyOtpError> {
        let user = self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| VerifyOtpError::RepositoryError(e.to_string()))?
            .ok_or(VerifyOtpError::UserNotFound)?;

        if user.is_email_verified {
            return Err(VerifyOtpError::AlreadyVerified);
        }

        check_otp(
            user.email_otp.as_deref(),
            user.email_otp_expires_at,
            command.otp(),
            Utc::now(),
        )
        .map_err(|rejection| match rejection {
            OtpRejection::Missing => VerifyOtpError::MissingOtp,
            OtpRejection::Expired => VerifyOtpError::OtpExpired,
            OtpRejection::Mismatch => VerifyOtpError::OtpMismatch,
        })?;

        let verified = self
            .repository
            .mark_email_verified(user.id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => VerifyOtpError::UserNotFound,
                other => VerifyOtpError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(user_id = %verified.id, "Email verified");

        // Welcome mail is a courtesy; the response does not wait for it.
        let emails = Arc::clone(&self.emails);
        let recipient = EmailRecipient::from(&verified);
        tokio::spawn(async move {
            if let Err(e) = emails.send_welcome_email(&recipient).await {
                tracing::warn!(to = %recipient.email, error = %e, "Welcome email not sent");
            }
        });

        Ok(UserProfile::from(verified))
    }
}
