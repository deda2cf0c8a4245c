use async_trait::async_trait;
use std::collections::HashSet;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::comment::application::domain::entities::{CommentNode, CommentRecord};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side. Nodes come back with empty `replies`; callers assemble the tree.
#[async_trait]
pub trait CommentQuery: Send + Sync {
    async fn find_record(&self, comment_id: Uuid)
        -> Result<Option<CommentRecord>, CommentQueryError>;

    async fn find_node(&self, comment_id: Uuid) -> Result<Option<CommentNode>, CommentQueryError>;

    /// Comments attached directly to the post, oldest first.
    async fn top_level(&self, post_id: Uuid) -> Result<Vec<CommentNode>, CommentQueryError>;

    /// Direct replies to any of the given comments, oldest first.
    async fn replies_to(&self, parent_ids: Vec<Uuid>)
        -> Result<Vec<CommentNode>, CommentQueryError>;

    /// The subset of `comment_ids` that have at least one reply.
    async fn ids_with_replies(
        &self,
        comment_ids: Vec<Uuid>,
    ) -> Result<HashSet<Uuid>, CommentQueryError>;

    async fn has_liked(&self, comment_id: Uuid, user_id: UserId)
        -> Result<bool, CommentQueryError>;

    async fn count_likes(&self, comment_id: Uuid) -> Result<u64, CommentQueryError>;
}
