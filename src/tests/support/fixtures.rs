use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserProfile;
use crate::modules::comment::application::domain::entities::CommentNode;
use crate::modules::post::application::domain::entities::AuthorSummary;
use crate::modules::post::application::ports::outgoing::PostView;

pub fn author_summary(id: Uuid) -> AuthorSummary {
    AuthorSummary {
        id,
        name: "Ann".to_string(),
        username: "ann".to_string(),
        profile_image_url: None,
    }
}

/// Verified profile with notifications on.
pub fn user_profile(id: Uuid) -> UserProfile {
    UserProfile {
        id,
        name: "Ann".to_string(),
        username: "ann".to_string(),
        email: "ann@example.com".to_string(),
        age: None,
        gender: None,
        about: None,
        location: None,
        website: None,
        profile_image_url: None,
        cover_image_url: None,
        is_email_verified: true,
        email_notifications: true,
        joined_at: Utc::now(),
    }
}

pub fn post_view(author: Uuid, title: &str) -> PostView {
    let now = Utc::now();
    PostView {
        id: Uuid::new_v4(),
        title: title.to_string(),
        content: String::new(),
        image_url: None,
        is_edited: false,
        edited_at: None,
        author: author_summary(author),
        likes: Vec::new(),
        likes_count: 0,
        comments_count: 0,
        created_at: now,
        updated_at: now,
    }
}

/// Top-level comment without replies or likes.
pub fn comment_node(author: Uuid, content: &str) -> CommentNode {
    let now = Utc::now();
    CommentNode {
        id: Uuid::new_v4(),
        content: content.to_string(),
        author: author_summary(author),
        post_id: Some(Uuid::new_v4()),
        parent_comment_id: None,
        likes: Vec::new(),
        likes_count: 0,
        created_at: now,
        updated_at: now,
        has_more_replies: false,
        replies: Vec::new(),
    }
}
