mod create_post;
mod delete_post;
mod edit_post;
mod list_posts;
mod toggle_post_like;

pub use create_post::{CreatePostCommand, CreatePostError, CreatePostUseCase, PostTitleError};
pub use delete_post::{DeletePostError, DeletePostUseCase};
pub use edit_post::{EditPostCommand, EditPostError, EditPostUseCase};
pub use list_posts::{ListPostsError, ListPostsUseCase};
pub use toggle_post_like::{TogglePostLikeError, TogglePostLikeUseCase};
