use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCommentError {
    #[error("Comment not found")]
    NotFound,

    #[error("You can only delete your own comments")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteCommentUseCase: Send + Sync {
    async fn execute(&self, comment_id: Uuid, requester: UserId)
        -> Result<(), DeleteCommentError>;
}
