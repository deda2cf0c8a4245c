pub mod post_likes;
pub mod posts;
