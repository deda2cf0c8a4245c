use uuid::Uuid;

use crate::auth::application::domain::entities::User;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRecipient {
    pub email: String,
    pub name: String,
}

impl From<&User> for EmailRecipient {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserEmailNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

#[async_trait::async_trait]
pub trait UserEmailNotifier: Send + Sync {
    async fn send_otp_email(
        &self,
        recipient: &EmailRecipient,
        otp: &str,
    ) -> Result<(), UserEmailNotificationError>;

    async fn send_welcome_email(
        &self,
        recipient: &EmailRecipient,
    ) -> Result<(), UserEmailNotificationError>;

    async fn send_password_reset_email(
        &self,
        recipient: &EmailRecipient,
        reset_token: &str,
    ) -> Result<(), UserEmailNotificationError>;

    async fn send_like_notification(
        &self,
        recipient: &EmailRecipient,
        liker_name: &str,
        post_title: &str,
        post_id: Uuid,
    ) -> Result<(), UserEmailNotificationError>;

    async fn send_comment_notification(
        &self,
        recipient: &EmailRecipient,
        commenter_name: &str,
        post_title: &str,
        comment: &str,
        post_id: Uuid,
    ) -> Result<(), UserEmailNotificationError>;
}
