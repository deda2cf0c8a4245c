pub mod comment_likes;
pub mod comments;
