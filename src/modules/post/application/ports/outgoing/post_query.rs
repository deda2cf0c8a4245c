// src/modules/post/application/ports/outgoing/post_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::domain::entities::{AuthorSummary, PostRecord};

pub const DEFAULT_PER_PAGE: u32 = 20;
pub const MAX_PER_PAGE: u32 = 100;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PostView {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub is_edited: bool,
    pub edited_at: Option<DateTime<Utc>>,
    pub author: AuthorSummary,
    /// Ids of the users who liked the post
    pub likes: Vec<Uuid>,
    pub likes_count: u64,
    /// Top-level comments only
    pub comments_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostListFilter {
    pub author: Option<UserId>,
}

impl PostListFilter {
    pub fn everyone() -> Self {
        Self { author: None }
    }

    pub fn by_author(author: UserId) -> Self {
        Self {
            author: Some(author),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    /// Missing or zero values fall back to the defaults; `per_page` is capped.
    pub fn new(page: Option<u32>, per_page: Option<u32>) -> Self {
        let page = page.filter(|p| *p > 0).unwrap_or(1);
        let per_page = per_page
            .filter(|p| *p > 0)
            .unwrap_or(DEFAULT_PER_PAGE)
            .min(MAX_PER_PAGE);

        Self { page, per_page }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side, joins users, likes and comments)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PostQuery: Send + Sync {
    async fn find_record(&self, post_id: Uuid) -> Result<Option<PostRecord>, PostQueryError>;

    async fn find_view(&self, post_id: Uuid) -> Result<Option<PostView>, PostQueryError>;

    /// Newest first.
    async fn list(
        &self,
        filter: PostListFilter,
        page: PageRequest,
    ) -> Result<PageResult<PostView>, PostQueryError>;

    async fn has_liked(&self, post_id: Uuid, user_id: UserId) -> Result<bool, PostQueryError>;

    async fn count_likes(&self, post_id: Uuid) -> Result<u64, PostQueryError>;
}
