use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostLikedEvent {
    pub post_id: Uuid,
    pub post_title: String,
    pub post_owner: UserId,
    pub liker: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCommentedEvent {
    pub post_id: Uuid,
    pub post_title: String,
    pub post_owner: UserId,
    pub commenter: UserId,
    pub comment: String,
}

/// Fire-and-forget engagement notifications. Calls return immediately and
/// never report delivery failures to the caller.
pub trait EngagementNotifier: Send + Sync {
    fn post_liked(&self, event: PostLikedEvent);
    fn post_commented(&self, event: PostCommentedEvent);
}
