use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::comment::application::domain::entities::{CommentNode, CommentTarget};

pub const MAX_COMMENT_LEN: usize = 2000;

#[derive(Debug, Clone)]
pub struct AddCommentCommand {
    author: UserId,
    content: String,
    target: CommentTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddCommentCommandError {
    #[error("Comment cannot be empty")]
    EmptyContent,

    #[error("Comment must not exceed {0} characters")]
    ContentTooLong(usize),

    #[error("Exactly one of post_id or comment_id is required")]
    InvalidTarget,
}

impl AddCommentCommand {
    pub fn new(
        author: UserId,
        content: String,
        post_id: Option<Uuid>,
        comment_id: Option<Uuid>,
    ) -> Result<Self, AddCommentCommandError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(AddCommentCommandError::EmptyContent);
        }
        if content.chars().count() > MAX_COMMENT_LEN {
            return Err(AddCommentCommandError::ContentTooLong(MAX_COMMENT_LEN));
        }

        let target = match (post_id, comment_id) {
            (Some(post_id), None) => CommentTarget::Post(post_id),
            (None, Some(comment_id)) => CommentTarget::Comment(comment_id),
            _ => return Err(AddCommentCommandError::InvalidTarget),
        };

        Ok(Self {
            author,
            content: content.to_string(),
            target,
        })
    }

    pub fn author(&self) -> UserId {
        self.author
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn target(&self) -> CommentTarget {
        self.target
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddCommentError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Comment not found")]
    ParentNotFound,

    #[error("You cannot comment on your own post")]
    SelfCommentForbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddCommentUseCase: Send + Sync {
    async fn execute(&self, command: AddCommentCommand) -> Result<CommentNode, AddCommentError>;
}
