use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::comment::application::ports::{
    incoming::use_cases::{DeleteCommentError, DeleteCommentUseCase},
    outgoing::{CommentQuery, CommentRepository, CommentRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteCommentService<R, Q>
where
    R: CommentRepository + Send + Sync,
    Q: CommentQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> DeleteCommentService<R, Q>
where
    R: CommentRepository + Send + Sync,
    Q: CommentQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> DeleteCommentUseCase for DeleteCommentService<R, Q>
where
    R: CommentRepository + Send + Sync,
    Q: CommentQuery + Send + Sync,
{
    async fn execute(
        &self,
        comment_id: Uuid,
        requester: UserId,
    ) -> Result<(), DeleteCommentError> {
        let comment = self
            .query
            .find_record(comment_id)
            .await
            .map_err(|e| DeleteCommentError::RepositoryError(e.to_string()))?
            .ok_or(DeleteCommentError::NotFound)?;

        // Owning the post grants nothing here.
        if !comment.is_authored_by(requester) {
            return Err(DeleteCommentError::Forbidden);
        }

        self.repository
            .delete_comment(comment_id)
            .await
            .map_err(|e| match e {
                CommentRepositoryError::NotFound => DeleteCommentError::NotFound,
                other => DeleteCommentError::RepositoryError(other.to_string()),
            })?;

        info!("Comment {} deleted by {}", comment_id, requester);
        Ok(())
    }
}
