mod create_post_service;
mod delete_post_service;
mod edit_post_service;
mod list_posts_service;
mod toggle_post_like_service;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use create_post_service::CreatePostService;
pub use delete_post_service::DeletePostService;
pub use edit_post_service::EditPostService;
pub use list_posts_service::ListPostsService;
pub use toggle_post_like_service::TogglePostLikeService;
