use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::comment::application::domain::entities::{CommentRecord, CommentTarget};

#[derive(Debug, Clone)]
pub struct NewComment {
    pub author: UserId,
    pub content: String,
    pub target: CommentTarget,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentRepositoryError {
    #[error("Comment not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create_comment(
        &self,
        comment: NewComment,
    ) -> Result<CommentRecord, CommentRepositoryError>;

    /// Replies and like rows go with the comment.
    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), CommentRepositoryError>;

    /// Idempotent: liking twice leaves one row.
    async fn add_like(&self, comment_id: Uuid, user_id: UserId)
        -> Result<(), CommentRepositoryError>;

    /// Idempotent: removing a missing like succeeds.
    async fn remove_like(
        &self,
        comment_id: Uuid,
        user_id: UserId,
    ) -> Result<(), CommentRepositoryError>;
}
