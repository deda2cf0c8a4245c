use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::email::application::ports::outgoing::{EngagementNotifier, PostLikedEvent};
use crate::modules::post::application::domain::entities::LikeToggle;
use crate::modules::post::application::ports::{
    incoming::use_cases::{TogglePostLikeError, TogglePostLikeUseCase},
    outgoing::{PostQuery, PostRepository},
};

#[derive(Clone)]
pub struct TogglePostLikeService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    repository: R,
    query: Q,
    notifier: Arc<dyn EngagementNotifier + Send + Sync>,
}

impl<R, Q> fmt::Debug for TogglePostLikeService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TogglePostLikeService").finish_non_exhaustive()
    }
}

impl<R, Q> TogglePostLikeService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    pub fn new(
        repository: R,
        query: Q,
        notifier: Arc<dyn EngagementNotifier + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            query,
            notifier,
        }
    }
}

#[async_trait]
impl<R, Q> TogglePostLikeUseCase for TogglePostLikeService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    async fn execute(
        &self,
        post_id: Uuid,
        requester: UserId,
    ) -> Result<LikeToggle, TogglePostLikeError> {
        let post = self
            .query
            .find_record(post_id)
            .await
            .map_err(|e| TogglePostLikeError::RepositoryError(e.to_string()))?
            .ok_or(TogglePostLikeError::NotFound)?;

        if post.is_owned_by(requester) {
            return Err(TogglePostLikeError::SelfLikeForbidden);
        }

        let already_liked = self
            .query
            .has_liked(post_id, requester)
            .await
            .map_err(|e| TogglePostLikeError::RepositoryError(e.to_string()))?;

        let write = if already_liked {
            self.repository.remove_like(post_id, requester).await
        } else {
            self.repository.add_like(post_id, requester).await
        };
        write.map_err(|e| TogglePostLikeError::RepositoryError(e.to_string()))?;

        let likes_count = self
            .query
            .count_likes(post_id)
            .await
            .map_err(|e| TogglePostLikeError::RepositoryError(e.to_string()))?;

        let liked = !already_liked;
        if liked {
            self.notifier.post_liked(PostLikedEvent {
                post_id,
                post_title: post.title,
                post_owner: post.owner,
                liker: requester,
            });
        }

        Ok(LikeToggle { liked, likes_count })
    }
}
