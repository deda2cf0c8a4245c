use async_trait::async_trait;

use crate::media::application::services::ImageAttachmentService;
use crate::modules::post::application::ports::{
    incoming::use_cases::{CreatePostCommand, CreatePostError, CreatePostUseCase},
    outgoing::{NewPost, PostQuery, PostRepository, PostView},
};

#[derive(Debug, Clone)]
pub struct CreatePostService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    repository: R,
    query: Q,
    images: ImageAttachmentService,
}

impl<R, Q> CreatePostService<R, Q>
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
impl<R, Q> CreatePostUseCase for CreatePostService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self, mut command: CreatePostCommand) -> Result<PostView, CreatePostError> {
        let image_url = self.images.upload_or_skip(command.take_image(), "post").await;

        let record = self
            .repository
            .create_post(NewPost {
                owner: command.author(),
                title: command.title().to_string(),
                content: command.content().to_string(),
                image_url,
            })
            .await
            .map_err(|e| CreatePostError::RepositoryError(e.to_string()))?;

        tracing::info!(post_id = %record.id, author = %record.owner, "Post created");

        self.query
            .find_view(record.id)
            .await
            .map_err(|e| CreatePostError::RepositoryError(e.to_string()))?
            .ok_or_else(|| {
                CreatePostError::RepositoryError(format!("post {} vanished after insert", record.id))
            })
    }
}
