use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::comment::application::domain::entities::CommentNode;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListCommentsError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListCommentsUseCase: Send + Sync {
    /// Top-level comments of the post, oldest first, each with its reply tree.
    async fn execute(&self, post_id: Uuid) -> Result<Vec<CommentNode>, ListCommentsError>;
}
