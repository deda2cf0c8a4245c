mod add_comment_service;
mod delete_comment_service;
mod list_comments_service;
mod toggle_comment_like_service;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use add_comment_service::AddCommentService;
pub use delete_comment_service::DeleteCommentService;
pub use list_comments_service::ListCommentsService;
pub use toggle_comment_like_service::ToggleCommentLikeService;
