use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::media::application::domain::entities::ImageUpload;
use crate::modules::post::application::domain::entities::MAX_TITLE_LEN;
use crate::modules::post::application::ports::outgoing::PostView;

//
// ──────────────────────────────────────────────────────────
// Title rules (shared with edit)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PostTitleError {
    #[error("Title cannot be empty")]
    Empty,

    #[error("Title must not exceed {0} characters")]
    TooLong(usize),
}

pub(crate) fn normalize_title(raw: &str) -> Result<String, PostTitleError> {
    let title = raw.trim();

    if title.is_empty() {
        return Err(PostTitleError::Empty);
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(PostTitleError::TooLong(MAX_TITLE_LEN));
    }

    Ok(title.to_string())
}

//
// ──────────────────────────────────────────────────────────
// Create Post Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreatePostCommand {
    author: UserId,
    title: String,
    content: String,
    image: Option<ImageUpload>,
}

impl CreatePostCommand {
    pub fn new(
        author: UserId,
        title: String,
        content: Option<String>,
        image: Option<ImageUpload>,
    ) -> Result<Self, PostTitleError> {
        Ok(Self {
            author,
            title: normalize_title(&title)?,
            content: content.unwrap_or_default(),
            image,
        })
    }

    pub fn author(&self) -> UserId {
        self.author
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn take_image(&mut self) -> Option<ImageUpload> {
        self.image.take()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePostError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreatePostUseCase: Send + Sync {
    async fn execute(&self, command: CreatePostCommand) -> Result<PostView, CreatePostError>;
}
