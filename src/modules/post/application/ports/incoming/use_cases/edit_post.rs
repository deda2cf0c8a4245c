use async_trait::async_trait;
use uuid::Uuid;

use super::create_post::{normalize_title, PostTitleError};
use crate::auth::application::domain::entities::UserId;
use crate::media::application::domain::entities::ImageUpload;
use crate::modules::post::application::ports::outgoing::PostView;

#[derive(Debug, Clone)]
pub struct EditPostCommand {
    post_id: Uuid,
    requester: UserId,
    title: String,
    content: Option<String>,
    image: Option<ImageUpload>,
}

impl EditPostCommand {
    /// `content: None` keeps the stored body.
    pub fn new(
        post_id: Uuid,
        requester: UserId,
        title: String,
        content: Option<String>,
        image: Option<ImageUpload>,
    ) -> Result<Self, PostTitleError> {
        Ok(Self {
            post_id,
            requester,
            title: normalize_title(&title)?,
            content,
            image,
        })
    }

    pub fn post_id(&self) -> Uuid {
        self.post_id
    }

    pub fn requester(&self) -> UserId {
        self.requester
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn take_image(&mut self) -> Option<ImageUpload> {
        self.image.take()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EditPostError {
    #[error("Post not found")]
    NotFound,

    #[error("Only the author can edit this post")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait EditPostUseCase: Send + Sync {
    async fn execute(&self, command: EditPostCommand) -> Result<PostView, EditPostError>;
}
