use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::domain::entities::LikeToggle;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ToggleCommentLikeError {
    #[error("Comment not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Unlike posts, authors may like their own comments.
#[async_trait]
pub trait ToggleCommentLikeUseCase: Send + Sync {
    async fn execute(
        &self,
        comment_id: Uuid,
        requester: UserId,
    ) -> Result<LikeToggle, ToggleCommentLikeError>;
}
