use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::domain::entities::AuthorSummary;

/// Levels of a comment tree returned in one read.
pub const MAX_COMMENT_DEPTH: usize = 8;

/// Where a comment hangs: directly under a post or under another comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentTarget {
    Post(Uuid),
    Comment(Uuid),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentRecord {
    pub id: Uuid,
    pub author: UserId,
    pub content: String,
    pub post_id: Option<Uuid>,
    pub parent_comment_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CommentRecord {
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author == user_id
    }

    pub fn target(&self) -> Option<CommentTarget> {
        match (self.post_id, self.parent_comment_id) {
            (Some(post_id), None) => Some(CommentTarget::Post(post_id)),
            (None, Some(parent_id)) => Some(CommentTarget::Comment(parent_id)),
            _ => None,
        }
    }
}

/// A comment with its author, likers and (possibly truncated) replies.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CommentNode {
    pub id: Uuid,
    pub content: String,
    pub author: AuthorSummary,
    pub post_id: Option<Uuid>,
    pub parent_comment_id: Option<Uuid>,
    pub likes: Vec<Uuid>,
    pub likes_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set on the deepest returned level when replies exist but were not loaded
    pub has_more_replies: bool,
    #[schema(no_recursion)]
    pub replies: Vec<CommentNode>,
}
