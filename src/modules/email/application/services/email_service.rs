use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use super::templates::{self, EmailContent};
use crate::email::application::ports::outgoing::{
    EmailRecipient, EmailSender, UserEmailNotificationError, UserEmailNotifier,
};

/// Site name and public frontend address used in subjects and links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailBranding {
    pub blog_name: String,
    pub frontend_url: String,
}

impl Default for EmailBranding {
    fn default() -> Self {
        Self {
            blog_name: "BlogSite".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
        }
    }
}

impl EmailBranding {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            blog_name: std::env::var("BLOG_NAME").unwrap_or(defaults.blog_name),
            frontend_url: std::env::var("FRONTEND_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.frontend_url),
        }
    }

    pub fn post_url(&self, post_id: Uuid) -> String {
        format!("{}/post/{}", self.frontend_url, post_id)
    }

    pub fn reset_link(&self, token: &str) -> String {
        format!("{}/reset-password/{}", self.frontend_url, token)
    }
}

#[derive(Clone)]
pub struct UserEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    branding: EmailBranding,
}

impl fmt::Debug for UserEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("branding", &self.branding)
            .finish()
    }
}

impl UserEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, branding: EmailBranding) -> Self {
        Self { sender, branding }
    }

    async fn deliver(
        &self,
        recipient: &EmailRecipient,
        content: EmailContent,
    ) -> Result<(), UserEmailNotificationError> {
        self.sender
            .send_email(&recipient.email, &content.subject, &content.html)
            .await
            .map_err(|e| {
                tracing::error!(to = %recipient.email, subject = %content.subject, error = %e, "Email delivery failed");
                UserEmailNotificationError::EmailSendingFailed(e.to_string())
            })
    }
}

#[async_trait]
impl UserEmailNotifier for UserEmailService {
    async fn send_otp_email(
        &self,
        recipient: &EmailRecipient,
        otp: &str,
    ) -> Result<(), UserEmailNotificationError> {
        let content = templates::otp_email(&self.branding.blog_name, &recipient.name, otp);
        self.deliver(recipient, content).await
    }

    async fn send_welcome_email(
        &self,
        recipient: &EmailRecipient,
    ) -> Result<(), UserEmailNotificationError> {
        let content = templates::welcome_email(
            &self.branding.blog_name,
            &self.branding.frontend_url,
            &recipient.name,
        );
        self.deliver(recipient, content).await
    }

    async fn send_password_reset_email(
        &self,
        recipient: &EmailRecipient,
        reset_token: &str,
    ) -> Result<(), UserEmailNotificationError> {
        let link = self.branding.reset_link(reset_token);
        let content =
            templates::password_reset_email(&self.branding.blog_name, &recipient.name, &link);
        self.deliver(recipient, content).await
    }

    async fn send_like_notification(
        &self,
        recipient: &EmailRecipient,
        liker_name: &str,
        post_title: &str,
        post_id: Uuid,
    ) -> Result<(), UserEmailNotificationError> {
        let content = templates::like_notification(
            &self.branding.blog_name,
            &recipient.name,
            liker_name,
            post_title,
            &self.branding.post_url(post_id),
        );
        self.deliver(recipient, content).await
    }

    async fn send_comment_notification(
        &self,
        recipient: &EmailRecipient,
        commenter_name: &str,
        post_title: &str,
        comment: &str,
        post_id: Uuid,
    ) -> Result<(), UserEmailNotificationError> {
        let content = templates::comment_notification(
            &self.branding.blog_name,
            &recipient.name,
            commenter_name,
            post_title,
            comment,
            &self.branding.post_url(post_id),
        );
        self.deliver(recipient, content).await
    }
}
