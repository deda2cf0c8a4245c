mod create_post;
mod delete_post;
mod edit_post;
mod list_posts;
mod toggle_post_like;

pub use create_post::{__path_create_post_handler, create_post_handler, CreatePostRequest};
pub use delete_post::{__path_delete_post_handler, delete_post_handler};
pub use edit_post::{__path_edit_post_handler, edit_post_handler, EditPostRequest};
pub use list_posts::{
    __path_all_posts_handler, __path_public_feed_handler, __path_user_feed_handler,
    all_posts_handler, public_feed_handler, user_feed_handler, FeedQuery,
};
pub use toggle_post_like::{
    __path_toggle_post_like_handler, toggle_post_like_handler, TogglePostLikeRequest,
};
