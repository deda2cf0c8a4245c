use async_trait::async_trait;
use chrono::Utc;

use crate::media::application::services::ImageAttachmentService;
use crate::modules::post::application::ports::{
    incoming::use_cases::{EditPostCommand, EditPostError, EditPostUseCase},
    outgoing::{PostChanges, PostQuery, PostRepository, PostRepositoryError, PostView},
};

#[derive(Debug, Clone)]
pub struct EditPostService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    repository: R,
    query: Q,
    images: ImageAttachmentService,
}

impl<R, Q> EditPostService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q, images: ImageAttachmentService) -> Self {
        Self {
            repository,
            query,
            images,
        }
    }
}

#[async_trait]
impl<R, Q> EditPostUseCase for EditPostService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self, mut command: EditPostCommand) -> Result<PostView, EditPostError> {
        let post = self
            .query
            .find_record(command.post_id())
            .await
            .map_err(|e| EditPostError::RepositoryError(e.to_string()))?
            .ok_or(EditPostError::NotFound)?;

        if !post.is_owned_by(command.requester()) {
            return Err(EditPostError::Forbidden);
        }

        // None keeps the current image.
        let image_url = self.images.upload_or_skip(command.take_image(), "post").await;

        let changes = PostChanges {
            title: command.title().to_string(),
            content: command.content().map(str::to_string),
            image_url,
            edited_at: Utc::now(),
        };

        self.repository
            .update_post(post.id, changes)
            .await
            .map_err(|e| match e {
                PostRepositoryError::NotFound => EditPostError::NotFound,
                other => EditPostError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(post_id = %post.id, "Post edited");

        self.query
            .find_view(post.id)
            .await
            .map_err(|e| EditPostError::RepositoryError(e.to_string()))?
            .ok_or(EditPostError::NotFound)
    }
}
