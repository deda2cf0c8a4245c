// src/modules/post/application/ports/outgoing/post_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::domain::entities::PostRecord;

//
// ──────────────────────────────────────────────────────────
// Write DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct NewPost {
    pub owner: UserId,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}

/// `None` fields keep their stored value. Every edit stamps `edited_at`.
#[derive(Debug, Clone)]
pub struct PostChanges {
    pub title: String,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub edited_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostRepositoryError {
    #[error("Post not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create_post(&self, post: NewPost) -> Result<PostRecord, PostRepositoryError>;

    async fn update_post(
        &self,
        post_id: Uuid,
        changes: PostChanges,
    ) -> Result<PostRecord, PostRepositoryError>;

    /// Removes the post with its comments (and their replies) and its likes, atomically.
    async fn delete_post_cascade(&self, post_id: Uuid) -> Result<(), PostRepositoryError>;

    /// Idempotent: liking twice leaves one row.
    async fn add_like(&self, post_id: Uuid, user_id: UserId) -> Result<(), PostRepositoryError>;

    /// Idempotent: removing a missing like succeeds.
    async fn remove_like(&self, post_id: Uuid, user_id: UserId)
        -> Result<(), PostRepositoryError>;
}
