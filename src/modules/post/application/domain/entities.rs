use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

pub const MAX_TITLE_LEN: usize = 200;

/// Stored post row, without the joined author or counters.
#[derive(Debug, Clone, PartialEq)]
pub struct PostRecord {
    pub id: Uuid,
    pub owner: UserId,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub is_edited: bool,
    pub edited_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostRecord {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner == user_id
    }
}

/// Public fields of a user shown next to posts and comments.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AuthorSummary {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub profile_image_url: Option<String>,
}

/// Outcome of a like toggle on a post or a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct LikeToggle {
    pub liked: bool,
    pub likes_count: u64,
}
