use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeletePostError {
    #[error("Post not found")]
    NotFound,

    #[error("Only the author can delete this post")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeletePostUseCase: Send + Sync {
    async fn execute(&self, post_id: Uuid, requester: UserId) -> Result<(), DeletePostError>;
}
