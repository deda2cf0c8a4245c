use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::ports::{
    incoming::use_cases::{DeletePostError, DeletePostUseCase},
    outgoing::{PostQuery, PostRepository, PostRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeletePostService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> DeletePostService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> DeletePostUseCase for DeletePostService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self, post_id: Uuid, requester: UserId) -> Result<(), DeletePostError> {
        let post = self
            .query
            .find_record(post_id)
            .await
            .map_err(|e| DeletePostError::RepositoryError(e.to_string()))?
            .ok_or(DeletePostError::NotFound)?;

        if !post.is_owned_by(requester) {
            return Err(DeletePostError::Forbidden);
        }

        self.repository
            .delete_post_cascade(post_id)
            .await
            .map_err(|e| match e {
                PostRepositoryError::NotFound => DeletePostError::NotFound,
                other => DeletePostError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(post_id = %post_id, owner = %requester, "Post deleted");
        Ok(())
    }
}
