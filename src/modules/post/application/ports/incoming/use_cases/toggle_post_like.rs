use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::domain::entities::LikeToggle;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TogglePostLikeError {
    #[error("Post not found")]
    NotFound,

    #[error("You cannot like your own post")]
    SelfLikeForbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait TogglePostLikeUseCase: Send + Sync {
    async fn execute(
        &self,
        post_id: Uuid,
        requester: UserId,
    ) -> Result<LikeToggle, TogglePostLikeError>;
}
