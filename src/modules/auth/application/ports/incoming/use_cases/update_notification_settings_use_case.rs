use async_trait::async_trait;

use crate::auth::application::domain::entities::{UserId, UserProfile};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateNotificationSettingsError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateNotificationSettingsUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        email_notifications: bool,
    ) -> Result<UserProfile, UpdateNotificationSettingsError>;
}
