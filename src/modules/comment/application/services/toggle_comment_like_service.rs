use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::comment::application::ports::{
    incoming::use_cases::{ToggleCommentLikeError, ToggleCommentLikeUseCase},
    outgoing::{CommentQuery, CommentRepository},
};
use crate::modules::post::application::domain::entities::LikeToggle;

#[derive(Debug, Clone)]
pub struct ToggleCommentLikeService<R, Q>
where
    R: CommentRepository + Send + Sync,
    Q: CommentQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> ToggleCommentLikeService<R, Q>
where
    R: CommentRepository + Send + Sync,
    Q: CommentQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> ToggleCommentLikeUseCase for ToggleCommentLikeService<R, Q>
where
    R: CommentRepository + Send + Sync,
    Q: CommentQuery + Send + Sync,
{
    async fn execute(
        &self,
        comment_id: Uuid,
        requester: UserId,
    ) -> Result<LikeToggle, ToggleCommentLikeError> {
        let repo_err = |e: String| ToggleCommentLikeError::RepositoryError(e);

        self.query
            .find_record(comment_id)
            .await
            .map_err(|e| repo_err(e.to_string()))?
            .ok_or(ToggleCommentLikeError::NotFound)?;

        let already_liked = self
            .query
            .has_liked(comment_id, requester)
            .await
            .map_err(|e| repo_err(e.to_string()))?;

        let write = if already_liked {
            self.repository.remove_like(comment_id, requester).await
        } else {
            self.repository.add_like(comment_id, requester).await
        };
        write.map_err(|e| repo_err(e.to_string()))?;

        let likes_count = self
            .query
            .count_likes(comment_id)
            .await
            .map_err(|e| repo_err(e.to_string()))?;

        Ok(LikeToggle {
            liked: !already_liked,
            likes_count,
        })
    }
}
