use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::{UserId, UserProfile},
    ports::{
        incoming::use_cases::{
            GetProfileError, GetProfileUseCase, UpdateNotificationSettingsError,
            UpdateNotificationSettingsUseCase, UpdateProfileCommand, UpdateProfileError,
            UpdateProfileUseCase,
        },
        outgoing::{UserQuery, UserRepository, UserRepositoryError},
    },
};
use crate::media::application::services::ImageAttachmentService;

// ──────────────────────────────────────────────────────────
// Get profile
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct GetProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProfileUseCase for GetProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<UserProfile, GetProfileError> {
        self.query
            .find_by_id(user_id)
            .await
            .map_err(|e| GetProfileError::QueryError(e.to_string()))?
            .map(UserProfile::from)
            .ok_or(GetProfileError::UserNotFound)
    }
}

// ──────────────────────────────────────────────────────────
// Update profile
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    images: ImageAttachmentService,
}

impl<R> UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, images: ImageAttachmentService) -> Self {
        Self { repository, images }
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateProfileCommand,
    ) -> Result<UserProfile, UpdateProfileError> {
        let (user_id, mut changes, images) = command.into_parts();

        // A failed upload keeps the stored URL.
        changes.profile_image_url = self.images.upload_or_skip(images.profile, "profile").await;

        if let Some(url) = self.images.upload_or_skip(images.cover, "cover").await {
            changes.cover_image_url = Some(Some(url));
        } else if images.remove_cover {
            changes.cover_image_url = Some(None);
        }

        let user = self
            .repository
            .update_profile(user_id, changes)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateProfileError::UserNotFound,
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(user_id = %user.id, "Profile updated");
        Ok(UserProfile::from(user))
    }
}

// ──────────────────────────────────────────────────────────
// Notification settings
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct UpdateNotificationSettingsService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateNotificationSettingsService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateNotificationSettingsUseCase for UpdateNotificationSettingsService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        email_notifications: bool,
    ) -> Result<UserProfile, UpdateNotificationSettingsError> {
        self.repository
            .set_email_notifications(user_id, email_notifications)
            .await
            .map(UserProfile::from)
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateNotificationSettingsError::UserNotFound,
                other => UpdateNotificationSettingsError::RepositoryError(other.to_string()),
            })
    }
}
